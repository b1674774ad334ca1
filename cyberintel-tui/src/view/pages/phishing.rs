//! 钓鱼文本检测页面视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use cyberintel_core::ActionId;

use super::{action_button, input_line, reason_lines, render_lines, theme};
use crate::model::App;

/// 渲染钓鱼检测页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = theme();
    let mut lines = vec![
        Line::from(""),
        Line::styled(
            "  Paste a suspicious email or SMS text below.",
            Style::default().fg(c.muted),
        ),
        Line::from(""),
        input_line("Text", &app.phishing.input, &c),
        Line::from(""),
        action_button(app, ActionId::ScanText, &c),
        Line::from(""),
    ];

    if let Some(ref report) = app.phishing.report {
        let tone_color = c.tone(report.tone);
        lines.push(Line::styled(
            "  ────────────────────────────────────────",
            Style::default().fg(c.border),
        ));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:.0}% ", report.score),
                Style::default().fg(tone_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled("phishing probability", Style::default().fg(c.muted)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Verdict: ", Style::default().fg(c.muted)),
            Span::styled(
                report.verdict.clone(),
                Style::default().fg(tone_color).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
        lines.extend(reason_lines(&report.reasons, &c));
    }

    render_lines(frame, area, lines);
}
