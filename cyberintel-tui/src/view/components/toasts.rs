//! toast 通知浮层
//!
//! 右上角堆叠显示，最早的在最上面；进入淡出阶段的条目降暗。

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use cyberintel_core::{Phase, Severity};

use crate::model::App;
use crate::view::theme::colors;

/// 单个 toast 的最大宽度（含边框）
const MAX_WIDTH: u16 = 46;

/// 渲染 toast 队列
pub fn render(app: &App, frame: &mut Frame) {
    if app.notifications.is_empty() {
        return;
    }

    let c = colors();
    let now = Instant::now();
    let area = frame.area();
    let mut y = 1; // 标题栏下方开始

    for notification in app.notifications.items() {
        let Some(phase) = notification.phase(now) else {
            continue;
        };

        let icon = match notification.severity {
            Severity::Success => "✓",
            Severity::Error => "✗",
            Severity::Warning => "▲",
            Severity::Info => "ℹ",
        };

        let accent = c.severity(notification.severity);
        let mut style = Style::default().fg(accent);
        if phase == Phase::Fading {
            style = style.add_modifier(Modifier::DIM);
        }

        let text = format!("{icon} {}", notification.message);
        let width = (text.width() as u16 + 4).min(MAX_WIDTH).min(area.width);
        let height = 3;
        if y + height > area.height.saturating_sub(1) {
            break; // 屏幕放不下时省略更旧的
        }

        let toast_area = Rect::new(area.width.saturating_sub(width + 1), y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style);
        let paragraph = Paragraph::new(Line::from(Span::styled(text, style))).block(block);

        frame.render_widget(Clear, toast_area);
        frame.render_widget(paragraph, toast_area);

        y += height;
    }
}
