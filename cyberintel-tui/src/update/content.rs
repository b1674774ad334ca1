//! 内容面板更新逻辑
//!
//! 每个显式提交面板遵循同一套协议：
//!   1. 输入去空白；为空 → warning toast，不发请求
//!   2. busy 互斥；冲突 → 忽略本次触发
//!   3. 返回 Command 交给 Backend 发出唯一一个请求
//!
//! 密码面板的实时路径是例外：每次编辑直接触发请求（带序号），
//! 清空输入则隐藏结果区且不发请求。

use std::time::Instant;

use cyberintel_core::{require_input, ActionId, ViewId};

use crate::message::ContentMessage;
use crate::model::App;
use crate::update::Command;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match msg {
        ContentMessage::Input(ch) => handle_input(app, ch),
        ContentMessage::Backspace => handle_backspace(app),
        ContentMessage::ClearInput => handle_clear(app),
        ContentMessage::Submit => handle_submit(app),
        ContentMessage::ToggleMask => {
            if app.router.active() == ViewId::PasswordLab {
                app.password_lab.masked = !app.password_lab.masked;
            }
            None
        }
    }
}

// ========== 输入编辑 ==========

fn handle_input(app: &mut App, ch: char) -> Option<Command> {
    match app.router.active() {
        ViewId::UrlScanner => {
            app.url_scanner.input.push(ch);
            None
        }
        ViewId::PasswordLab => {
            app.password_lab.input.push(ch);
            password_edited(app)
        }
        ViewId::PhishingDetector => {
            app.phishing.input.push(ch);
            None
        }
        ViewId::BreachChecker => {
            app.breach.input.push(ch);
            None
        }
        ViewId::Assistant => {
            app.assistant.input.push(ch);
            None
        }
        ViewId::Dashboard => None,
    }
}

fn handle_backspace(app: &mut App) -> Option<Command> {
    match app.router.active() {
        ViewId::UrlScanner => {
            app.url_scanner.input.pop();
            None
        }
        ViewId::PasswordLab => {
            app.password_lab.input.pop();
            password_edited(app)
        }
        ViewId::PhishingDetector => {
            app.phishing.input.pop();
            None
        }
        ViewId::BreachChecker => {
            app.breach.input.pop();
            None
        }
        ViewId::Assistant => {
            app.assistant.input.pop();
            None
        }
        ViewId::Dashboard => None,
    }
}

fn handle_clear(app: &mut App) -> Option<Command> {
    match app.router.active() {
        ViewId::UrlScanner => {
            app.url_scanner.input.clear();
            None
        }
        ViewId::PasswordLab => {
            app.password_lab.input.clear();
            password_edited(app)
        }
        ViewId::PhishingDetector => {
            app.phishing.input.clear();
            None
        }
        ViewId::BreachChecker => {
            app.breach.input.clear();
            None
        }
        ViewId::Assistant => {
            app.assistant.input.clear();
            None
        }
        ViewId::Dashboard => None,
    }
}

// ========== 实时密码分析 ==========

/// 每次编辑后调用：空输入隐藏结果且不发请求，
/// 否则带上新序号请求一次完整输入的分析。
fn password_edited(app: &mut App) -> Option<Command> {
    // 序号无条件自增：清空输入后，旧的在途响应会因序号过期被丢弃
    let seq = app.password_lab.next_seq();
    if app.password_lab.input.is_empty() {
        app.password_lab.report = None;
        return None;
    }
    Some(Command::AnalyzePassword {
        password: app.password_lab.input.clone(),
        seq,
    })
}

// ========== 显式提交 ==========

fn handle_submit(app: &mut App) -> Option<Command> {
    match app.router.active() {
        ViewId::UrlScanner => submit_url(app),
        ViewId::PasswordLab => submit_password(app),
        ViewId::PhishingDetector => submit_text(app),
        ViewId::BreachChecker => submit_breach(app),
        ViewId::Assistant => submit_chat(app),
        ViewId::Dashboard => None,
    }
}

fn submit_url(app: &mut App) -> Option<Command> {
    let Ok(url) = require_input(&app.url_scanner.input, "url") else {
        app.notifications
            .warning("Please enter a URL to scan.", Instant::now());
        return None;
    };
    app.busy.begin(ActionId::ScanUrl).ok()?;
    Some(Command::AnalyzeUrl { url })
}

/// 密码面板的提交按钮不发请求（分析走实时路径），只做校验提示
fn submit_password(app: &mut App) -> Option<Command> {
    if app.password_lab.input.is_empty() {
        app.notifications
            .warning("Please enter a password.", Instant::now());
    } else {
        app.notifications
            .success("Analysis complete.", Instant::now());
    }
    None
}

fn submit_text(app: &mut App) -> Option<Command> {
    let Ok(text) = require_input(&app.phishing.input, "text") else {
        app.notifications
            .warning("Please paste email or SMS text to scan.", Instant::now());
        return None;
    };
    app.busy.begin(ActionId::ScanText).ok()?;
    Some(Command::AnalyzeText { text })
}

fn submit_breach(app: &mut App) -> Option<Command> {
    let Ok(email) = require_input(&app.breach.input, "email") else {
        app.notifications
            .warning("Please enter an email address.", Instant::now());
        return None;
    };
    app.busy.begin(ActionId::SearchBreach).ok()?;
    // 新查询在途期间绝不显示过期结果
    app.breach.report = None;
    Some(Command::CheckBreach { email })
}

fn submit_chat(app: &mut App) -> Option<Command> {
    // 空消息静默忽略，不弹提示（与其余面板不同）
    let Ok(text) = require_input(&app.assistant.input, "message") else {
        return None;
    };
    app.busy.begin(ActionId::SendChat).ok()?;
    app.assistant.input.clear();
    app.assistant.transcript.push_user(&text);
    app.assistant.transcript.set_typing(true);
    Some(Command::SendChat { message: text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::navigation::activate;
    use cyberintel_core::Severity;

    fn app_on(view: ViewId) -> App {
        let mut app = App::new();
        activate(&mut app, view);
        app
    }

    fn type_text(app: &mut App, text: &str) -> Option<Command> {
        let mut last = None;
        for ch in text.chars() {
            last = update(app, ContentMessage::Input(ch));
        }
        last
    }

    #[test]
    fn empty_url_submit_warns_without_request() {
        let mut app = app_on(ViewId::UrlScanner);
        app.url_scanner.input = "   ".to_string();
        let command = update(&mut app, ContentMessage::Submit);
        assert!(command.is_none());
        assert_eq!(app.notifications.len(), 1);
        assert_eq!(app.notifications.items()[0].severity, Severity::Warning);
        assert!(!app.busy.is_busy(ActionId::ScanUrl));
    }

    #[test]
    fn url_submit_trims_and_issues_one_request() {
        let mut app = app_on(ViewId::UrlScanner);
        app.url_scanner.input = "  https://example.com  ".to_string();
        let command = update(&mut app, ContentMessage::Submit);
        assert_eq!(
            command,
            Some(Command::AnalyzeUrl {
                url: "https://example.com".to_string()
            })
        );
        assert!(app.busy.is_busy(ActionId::ScanUrl));
    }

    #[test]
    fn double_submit_while_busy_issues_no_second_request() {
        let mut app = app_on(ViewId::UrlScanner);
        app.url_scanner.input = "https://example.com".to_string();
        let first = update(&mut app, ContentMessage::Submit);
        assert!(first.is_some());
        let second = update(&mut app, ContentMessage::Submit);
        assert!(second.is_none());
    }

    #[test]
    fn empty_text_submit_warns_without_request() {
        let mut app = app_on(ViewId::PhishingDetector);
        let command = update(&mut app, ContentMessage::Submit);
        assert!(command.is_none());
        assert_eq!(app.notifications.items()[0].severity, Severity::Warning);
    }

    #[test]
    fn empty_breach_submit_warns_without_request() {
        let mut app = app_on(ViewId::BreachChecker);
        let command = update(&mut app, ContentMessage::Submit);
        assert!(command.is_none());
        assert_eq!(app.notifications.len(), 1);
        assert_eq!(app.notifications.items()[0].severity, Severity::Warning);
    }

    #[test]
    fn breach_submit_hides_previous_report() {
        let mut app = app_on(ViewId::BreachChecker);
        app.breach.report = Some(cyberintel_core::BreachReport::Safe {
            message: "No breaches found".to_string(),
        });
        app.breach.input = "ada@example.com".to_string();
        let command = update(&mut app, ContentMessage::Submit);
        assert!(matches!(command, Some(Command::CheckBreach { .. })));
        assert!(app.breach.report.is_none());
    }

    #[test]
    fn password_typing_fires_live_request_per_edit() {
        let mut app = app_on(ViewId::PasswordLab);
        let command = type_text(&mut app, "hunter2");
        // 每次编辑都自增序号；最后一次的序号等于编辑次数
        assert_eq!(
            command,
            Some(Command::AnalyzePassword {
                password: "hunter2".to_string(),
                seq: 7,
            })
        );
    }

    #[test]
    fn clearing_password_hides_report_without_request() {
        let mut app = app_on(ViewId::PasswordLab);
        type_text(&mut app, "x");
        app.password_lab.report = Some(sample_password_report());
        let command = update(&mut app, ContentMessage::Backspace);
        assert!(command.is_none());
        assert!(app.password_lab.report.is_none());
    }

    #[test]
    fn password_submit_button_never_issues_request() {
        let mut app = app_on(ViewId::PasswordLab);
        assert!(update(&mut app, ContentMessage::Submit).is_none());
        assert_eq!(app.notifications.items()[0].severity, Severity::Warning);

        type_text(&mut app, "correct horse");
        // 实时请求来自编辑本身，提交按钮只给确认提示
        assert!(update(&mut app, ContentMessage::Submit).is_none());
        assert_eq!(app.notifications.items()[1].severity, Severity::Success);
    }

    #[test]
    fn chat_submit_appends_user_turn_and_shows_typing() {
        let mut app = app_on(ViewId::Assistant);
        app.assistant.input = "is this safe?".to_string();
        let command = update(&mut app, ContentMessage::Submit);
        assert!(matches!(command, Some(Command::SendChat { .. })));
        assert!(app.assistant.input.is_empty());
        assert_eq!(app.assistant.transcript.turns().len(), 1);
        assert!(app.assistant.transcript.typing());
        assert!(app.busy.is_busy(ActionId::SendChat));
    }

    #[test]
    fn empty_chat_submit_is_ignored_silently() {
        let mut app = app_on(ViewId::Assistant);
        let command = update(&mut app, ContentMessage::Submit);
        assert!(command.is_none());
        assert!(app.notifications.is_empty());
        assert!(app.assistant.transcript.turns().is_empty());
    }

    #[test]
    fn mask_toggle_only_applies_on_password_lab() {
        let mut app = app_on(ViewId::PasswordLab);
        assert!(app.password_lab.masked);
        update(&mut app, ContentMessage::ToggleMask);
        assert!(!app.password_lab.masked);

        let mut app = app_on(ViewId::UrlScanner);
        update(&mut app, ContentMessage::ToggleMask);
        assert!(app.password_lab.masked);
    }

    fn sample_password_report() -> cyberintel_core::PasswordReport {
        cyberintel_core::PasswordReport {
            score: 10.0,
            band: cyberintel_core::StrengthBand::Weak,
            crack_time: "instant".to_string(),
            entropy: 4.0,
            warning: None,
            suggestions: vec![],
        }
    }
}
