//! 密码实验室页面视图
//!
//! 强度计的填充宽度与原始分数成正比，颜色跟随强度档位。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::theme;
use crate::model::App;

/// 渲染密码实验室页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = theme();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // 输入区
            Constraint::Length(3), // 强度计
            Constraint::Min(1),    // 详情与建议
        ])
        .split(area);

    // ========== 输入区 ==========
    let shown = if app.password_lab.masked {
        "•".repeat(app.password_lab.input.chars().count())
    } else {
        app.password_lab.input.clone()
    };
    let input = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Password: ", Style::default().fg(c.muted)),
            Span::styled(shown, Style::default().fg(c.fg)),
            Span::styled("▏", Style::default().fg(c.highlight)),
        ]),
        Line::styled(
            "  Analysis runs as you type. Alt+v toggles visibility.",
            Style::default().fg(c.muted),
        ),
    ]);
    frame.render_widget(input, layout[0]);

    // ========== 强度计 ==========
    let Some(ref report) = app.password_lab.report else {
        return;
    };

    let band_color = c.tone(report.band.tone());
    let score = report.score.clamp(0.0, 100.0);
    let meter = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(c.border)),
        )
        .gauge_style(Style::default().fg(band_color))
        .ratio(score / 100.0)
        .label(Span::styled(
            report.band.label(),
            Style::default().fg(band_color).add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(meter, layout[1]);

    // ========== 详情与建议 ==========
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Crack time: ", Style::default().fg(c.muted)),
            Span::styled(report.crack_time.clone(), Style::default().fg(c.fg)),
            Span::styled("    Entropy: ", Style::default().fg(c.muted)),
            Span::styled(format!("{:.1}", report.entropy), Style::default().fg(c.fg)),
        ]),
    ];

    if let Some(ref warning) = report.warning {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  ▲ ", Style::default().fg(c.warning)),
            Span::styled(warning.clone(), Style::default().fg(c.warning)),
        ]));
    }

    if !report.suggestions.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "  Suggestions:",
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ));
        for suggestion in &report.suggestions {
            lines.push(Line::from(vec![
                Span::styled("   • ", Style::default().fg(c.highlight)),
                Span::styled(suggestion.clone(), Style::default().fg(c.fg)),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), layout[2]);
}
