//! 泄露查询页面视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use cyberintel_core::{ActionId, BreachReport};

use super::{action_button, input_line, render_lines, theme};
use crate::model::App;

/// 渲染泄露查询页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = theme();
    let mut lines = vec![
        Line::from(""),
        Line::styled(
            "  Check whether an email address appears in known breaches.",
            Style::default().fg(c.muted),
        ),
        Line::from(""),
        input_line("Email", &app.breach.input, &c),
        Line::from(""),
        action_button(app, ActionId::SearchBreach, &c),
        Line::from(""),
    ];

    match app.breach.report {
        None => {}
        Some(BreachReport::Safe { ref message }) => {
            // 安全结论只显示横幅，证据卡片列表整个隐藏
            lines.push(Line::from(vec![
                Span::styled("  ⛨ ", Style::default().fg(c.success)),
                Span::styled(
                    message.clone(),
                    Style::default().fg(c.success).add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        Some(BreachReport::Compromised {
            ref message,
            ref cards,
        }) => {
            lines.push(Line::from(vec![
                Span::styled("  ▲ ", Style::default().fg(c.error)),
                Span::styled(
                    message.clone(),
                    Style::default().fg(c.error).add_modifier(Modifier::BOLD),
                ),
            ]));
            for card in cards {
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {} ", card.name),
                        Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("({})", card.date), Style::default().fg(c.muted)),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("    {}", card.description),
                    Style::default().fg(c.fg),
                )));
                let mut tag_spans = vec![Span::styled(
                    "    Compromised: ",
                    Style::default().fg(c.muted),
                )];
                for (i, tag) in card.tags.iter().enumerate() {
                    if i > 0 {
                        tag_spans.push(Span::raw(" "));
                    }
                    tag_spans.push(Span::styled(
                        format!("⟨{tag}⟩"),
                        Style::default().fg(c.warning),
                    ));
                }
                lines.push(Line::from(tag_spans));
            }
        }
    }

    render_lines(frame, area, lines);
}
