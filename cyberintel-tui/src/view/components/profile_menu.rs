//! 档案菜单浮层
//!
//! 顶栏的账号下拉菜单。任何导航都会把它关掉（路由副作用），
//! 这里只负责画。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染档案菜单（如果打开）
pub fn render(app: &App, frame: &mut Frame) {
    if !app.router.profile_menu_open() {
        return;
    }

    let c = colors();
    let area = frame.area();
    let width = 28;
    let height = 6;
    let menu_area = Rect::new(
        area.width.saturating_sub(width + 1),
        1,
        width.min(area.width),
        height.min(area.height),
    );

    let block = Block::default()
        .title(" Operator ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));

    let lines = vec![
        Line::styled("  analyst@cyberintel", Style::default().fg(c.fg)),
        Line::styled("  Clearance: Level 2", Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled("  Esc to close", Style::default().fg(c.muted)),
    ];

    frame.render_widget(Clear, menu_area);
    frame.render_widget(Paragraph::new(lines).block(block), menu_area);
}
