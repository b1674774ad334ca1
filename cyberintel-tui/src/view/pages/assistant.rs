//! AI 助手页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use cyberintel_core::{ActionId, Speaker};

use super::theme;
use crate::model::App;

/// 渲染助手页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = theme();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // 会话记录
            Constraint::Length(2), // 输入行
        ])
        .split(area);

    // ========== 会话记录 ==========
    let mut lines = Vec::new();
    for turn in app.assistant.transcript.turns() {
        let (prefix, prefix_color) = match turn.speaker {
            Speaker::User => ("  You ▸ ", c.highlight),
            Speaker::Assistant => ("  Sentinel ▸ ", c.success),
        };
        let mut spans = vec![Span::styled(
            prefix,
            Style::default().fg(prefix_color).add_modifier(Modifier::BOLD),
        )];
        for segment in &turn.segments {
            let mut style = Style::default().fg(c.fg);
            if segment.bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(segment.text.clone(), style));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if app.assistant.transcript.typing() {
        lines.push(Line::from(vec![
            Span::styled(
                "  Sentinel ▸ ",
                Style::default().fg(c.success).add_modifier(Modifier::BOLD),
            ),
            Span::styled("● ● ●", Style::default().fg(c.muted).add_modifier(Modifier::DIM)),
        ]));
    }

    // 保持最新内容可见：超出高度时从底部往回截取
    let visible = layout[0].height as usize;
    if lines.len() > visible {
        lines.drain(..lines.len() - visible);
    }
    frame.render_widget(Paragraph::new(lines), layout[0]);

    // ========== 输入行 ==========
    let busy = app.busy.is_busy(ActionId::SendChat);
    let hint = if busy { "sending..." } else { "Enter to send" };
    let input = Paragraph::new(Line::from(vec![
        Span::styled("  ▸ ", Style::default().fg(c.highlight)),
        Span::styled(app.assistant.input.clone(), Style::default().fg(c.fg)),
        Span::styled("▏", Style::default().fg(c.highlight)),
        Span::styled(format!("   ({hint})"), Style::default().fg(c.muted)),
    ]));
    frame.render_widget(input, layout[1]);
}
