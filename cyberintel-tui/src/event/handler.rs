//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use cyberintel_core::ViewId;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, NavigationMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop, // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C 始终可以退出
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 搜索框展开时优先捕获按键
    if app.search.open {
        return handle_search_keys(key);
    }

    // 档案菜单打开时，确认/取消键只是关闭它
    if app.router.profile_menu_open() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => AppMessage::GoBack,
            _ => AppMessage::Noop,
        };
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::PROFILE_MENU.matches(&key) {
        return AppMessage::ToggleProfileMenu;
    }
    if DefaultKeymap::ALERTS.matches(&key) {
        return AppMessage::ShowAlerts;
    }
    if DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::OpenSearch;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理搜索框按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::GoBack,
        KeyCode::Enter => AppMessage::SearchSubmit,
        KeyCode::Backspace => AppMessage::SearchBackspace,
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            AppMessage::SearchInput(ch)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
///
/// 除仪表盘外每个面板都以文本输入为主，普通字符一律作为输入，
/// 面板专属操作走 Alt/Ctrl 组合键。
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::CLEAR_INPUT.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearInput);
    }
    if DefaultKeymap::TOGGLE_MASK.matches(&key)
        && app.router.active() == ViewId::PasswordLab
    {
        return AppMessage::Content(ContentMessage::ToggleMask);
    }

    if app.router.active() == ViewId::Dashboard {
        // 仪表盘没有输入区
        return AppMessage::Noop;
    }

    match key.code {
        KeyCode::Enter => AppMessage::Content(ContentMessage::Submit),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            AppMessage::Content(ContentMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}
