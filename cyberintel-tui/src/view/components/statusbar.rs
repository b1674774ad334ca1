//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use cyberintel_core::ViewId;

use crate::model::{App, FocusPanel};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和面板生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.search.open {
        hints.push(("Enter", "Search"));
        hints.push(("Esc", "Close"));
        return hints;
    }

    // 全局快捷键
    hints.push(("Tab", "Switch Focus"));

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Navigate"));
            hints.push(("Enter", "Open Panel"));
        }
        FocusPanel::Content => match app.router.active() {
            ViewId::Dashboard => {
                hints.push(("Alt+r", "Reload"));
            }
            ViewId::PasswordLab => {
                hints.push(("Type", "Analyze"));
                hints.push(("Alt+v", "Show/Hide"));
            }
            ViewId::Assistant => {
                hints.push(("Enter", "Send"));
            }
            _ => {
                hints.push(("Enter", "Scan"));
                hints.push(("Ctrl+u", "Clear"));
            }
        },
    }

    hints.push(("Alt+k", "Search"));
    hints.push(("Alt+q", "Quit"));

    hints
}
