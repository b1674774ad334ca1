//! 仪表盘页面视图
//!
//! 上半区：统计卡片 + 风险仪表；下半区：最近活动列表。
//! 仪表的配色固定用危险色，与分数大小无关（沿用服务端面板的设计）。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use cyberintel_core::dashboard::format_count;

use crate::model::App;
use crate::view::theme::colors;

/// 渲染仪表盘
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let Some(ref summary) = app.dashboard.summary else {
        let hint = if app.dashboard.loading {
            "  Loading dashboard..."
        } else {
            "  Dashboard not loaded."
        };
        frame.render_widget(
            Paragraph::new(Line::styled(hint, Style::default().fg(c.muted))),
            area,
        );
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // 统计卡片
            Constraint::Length(4), // 风险仪表
            Constraint::Min(1),    // 活动列表
        ])
        .split(area);

    // ========== 统计卡片 ==========
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[0]);

    render_tile(
        frame,
        tiles[0],
        " Total Scans ",
        &format_count(summary.total_scans),
        c.highlight,
    );
    render_tile(
        frame,
        tiles[1],
        " Threats Detected ",
        &format_count(summary.threats_detected),
        c.error,
    );

    // ========== 风险仪表 ==========
    let score = summary.risk_score.clamp(0.0, 100.0);
    let gauge_block = Block::default()
        .title(" Risk Score ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    let gauge = Gauge::default()
        .block(gauge_block)
        .gauge_style(Style::default().fg(c.error))
        .ratio(score / 100.0)
        .label(Span::styled(
            format!("{score:.0} / 100"),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, layout[1]);

    // ========== 最近活动 ==========
    let mut title = " Recent Activity ".to_string();
    if let Some(at) = app.dashboard.refreshed_at {
        title = format!(" Recent Activity (as of {}) ", at.format("%H:%M:%S"));
    }
    let activity_block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let items: Vec<ListItem> = summary
        .activity
        .iter()
        .map(|row| {
            let badge_color = c.tone(row.tone);
            ListItem::new(Line::from(vec![
                Span::styled("  ◉ ", Style::default().fg(c.highlight)),
                Span::styled(
                    format!("{:<20}", row.action),
                    Style::default().fg(c.fg),
                ),
                Span::styled(format!("{:<14}", row.time), Style::default().fg(c.muted)),
                Span::styled(
                    format!("[{}]", row.status),
                    Style::default().fg(badge_color).add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(activity_block), layout[2]);
}

/// 渲染一张统计卡片
fn render_tile(frame: &mut Frame, area: Rect, title: &str, value: &str, accent: ratatui::style::Color) {
    let c = colors();
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {value}"),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
    ])
    .block(block);
    frame.render_widget(content, area);
}
