//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use cyberintel_core::ViewId;

use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 背景填充
    frame.render_widget(
        Block::default().style(Style::default().bg(colors().bg)),
        size,
    );

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏
    render_title_bar(app, frame, title_area);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧导航
            Constraint::Percentage(80), // 右侧内容
        ])
        .split(content_area);

    let nav_area = columns[0];
    let page_area = columns[1];

    // 渲染左侧导航
    components::navigation::render(app, frame, nav_area);

    // 渲染右侧内容
    render_page_content(app, frame, page_area);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 浮层（在页面之上）：档案菜单、toast
    components::profile_menu::render(app, frame);
    components::toasts::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let text = if app.search.open {
        format!(" CyberIntel ▸ Search: {}_", app.search.query)
    } else {
        " CyberIntel Security Operations v0.1.0".to_string()
    };
    let title = Paragraph::new(text).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前视图渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    // 内容区域的边框
    let is_focused = app.focus.is_content();
    let border_style = if is_focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let active = app.router.active();
    let block = Block::default()
        .title(format!(" {} ", active.title()))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 根据当前视图渲染具体内容
    match active {
        ViewId::Dashboard => pages::dashboard::render(app, frame, inner_area),
        ViewId::UrlScanner => pages::url_scanner::render(app, frame, inner_area),
        ViewId::PasswordLab => pages::password_lab::render(app, frame, inner_area),
        ViewId::PhishingDetector => pages::phishing::render(app, frame, inner_area),
        ViewId::BreachChecker => pages::breach::render(app, frame, inner_area),
        ViewId::Assistant => pages::assistant::render(app, frame, inner_area),
    }
}
