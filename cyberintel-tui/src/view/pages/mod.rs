//! 各面板的页面视图

pub mod assistant;
pub mod breach;
pub mod dashboard;
pub mod password_lab;
pub mod phishing;
pub mod url_scanner;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use cyberintel_core::ActionId;

use crate::model::App;
use crate::view::theme::{colors, ThemeColors};

/// 单行输入框渲染：标签 + 缓冲内容 + 光标占位
pub(crate) fn input_line<'a>(label: &'a str, value: &'a str, c: &ThemeColors) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {label}: "), Style::default().fg(c.muted)),
        Span::styled(value, Style::default().fg(c.fg)),
        Span::styled("▏", Style::default().fg(c.highlight)),
    ])
}

/// 操作按钮渲染：busy 时显示处理中指示，空闲时显示原标签。
/// 标签从 ActionId 派生，释放后必然回到原值。
pub(crate) fn action_button(app: &App, action: ActionId, c: &ThemeColors) -> Line<'static> {
    let (text, color) = if app.busy.is_busy(action) {
        ("◌ Processing...".to_string(), c.muted)
    } else {
        (format!("[ {} ]", action.label()), c.highlight)
    };
    Line::from(Span::styled(
        format!("  {text}"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

/// 证据条目渲染
pub(crate) fn reason_lines(
    reasons: &[cyberintel_core::ReasonEntry],
    c: &ThemeColors,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for reason in reasons {
        let tone_color = c.tone(reason.tone);
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", reason.tone.icon()), Style::default().fg(tone_color)),
            Span::styled(
                reason.label.clone(),
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", reason.desc),
            Style::default().fg(c.muted),
        )));
    }
    lines
}

/// 页面正文整体渲染为 Paragraph 的便捷封装
pub(crate) fn render_lines(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    use ratatui::widgets::Paragraph;
    frame.render_widget(Paragraph::new(lines), area);
}

/// 取当前主题色，所有页面共用
pub(crate) fn theme() -> ThemeColors {
    colors()
}
