//! 后台请求完成处理
//!
//! 这里是 busy 释放的唯一位置：每个显式提交面板的完成分支
//! 先 `finish` 再看结果，网络失败不可能让按钮永久卡在忙碌态。
//! 失败时不做部分渲染 —— 面板保留上一次成功的结果。

use std::time::Instant;

use chrono::Local;
use cyberintel_core::{
    ActionId, BreachReport, DashboardSummary, PasswordReport, PhishingReport, UrlReport,
    OUTAGE_REPLY,
};

use crate::message::ApiMessage;
use crate::model::App;

/// 处理请求完成消息
pub fn update(app: &mut App, msg: ApiMessage) {
    match msg {
        ApiMessage::DashboardLoaded(result) => {
            app.dashboard.loading = false;
            app.dashboard.loaded = true;
            app.clear_status();
            match result {
                Ok(stats) => {
                    app.dashboard.summary = Some(DashboardSummary::from(stats));
                    app.dashboard.refreshed_at = Some(Local::now());
                }
                Err(err) => {
                    // 回退到固定分数，仪表盘永远不会空着
                    log::warn!("dashboard stats unavailable: {err}");
                    app.dashboard.summary = Some(DashboardSummary::fallback());
                }
            }
        }

        ApiMessage::UrlScanFinished(result) => {
            app.busy.finish(ActionId::ScanUrl);
            match result {
                Ok(analysis) => {
                    app.url_scanner.report = Some(UrlReport::from(analysis));
                    app.notifications
                        .success("URL Analysis complete.", Instant::now());
                }
                Err(err) => {
                    log::warn!("url analysis failed: {err}");
                    app.notifications
                        .error("API Error: Could not analyze URL.", Instant::now());
                }
            }
        }

        ApiMessage::PasswordAnalyzed { seq, result } => {
            // 过期响应（之后又有编辑）直接丢弃，last-response-wins
            if !app.password_lab.is_current(seq) {
                log::debug!("discarding stale password analysis (seq {seq})");
                return;
            }
            match result {
                Ok(analysis) => {
                    app.password_lab.report = Some(PasswordReport::from(analysis));
                }
                Err(err) => {
                    // 实时路径静默失败：打字过程中不弹错误提示
                    log::debug!("live password analysis failed: {err}");
                }
            }
        }

        ApiMessage::TextScanFinished(result) => {
            app.busy.finish(ActionId::ScanText);
            match result {
                Ok(analysis) => {
                    app.phishing.report = Some(PhishingReport::from(analysis));
                    app.notifications
                        .success("Text Scan complete.", Instant::now());
                }
                Err(err) => {
                    log::warn!("text scan failed: {err}");
                    app.notifications
                        .error("API Error: Could not analyze text.", Instant::now());
                }
            }
        }

        ApiMessage::BreachSearchFinished(result) => {
            app.busy.finish(ActionId::SearchBreach);
            match result {
                Ok(check) => {
                    app.breach.report = Some(BreachReport::from(check));
                }
                Err(err) => {
                    log::warn!("breach lookup failed: {err}");
                    app.notifications.error(
                        "API Error: Could not check breach database.",
                        Instant::now(),
                    );
                }
            }
        }

        ApiMessage::ChatReplyReceived(result) => {
            app.busy.finish(ActionId::SendChat);
            app.assistant.transcript.set_typing(false);
            match result {
                Ok(reply) => {
                    app.assistant.transcript.push_assistant(&reply.response);
                }
                Err(err) => {
                    // 对话里用固定的掉线回复代替错误 toast
                    log::warn!("chat request failed: {err}");
                    app.assistant.transcript.push_assistant(OUTAGE_REPLY);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyberintel_client::{
        ApiError, BreachCheck, ChatReply, DashboardStats, PasswordAnalysis, PasswordFeedback,
        UrlAnalysis,
    };
    use cyberintel_core::{Severity, Speaker, Tone};

    fn network_error() -> ApiError {
        ApiError::NetworkError {
            endpoint: "/test".to_string(),
            detail: "connection refused".to_string(),
        }
    }

    fn url_analysis() -> UrlAnalysis {
        UrlAnalysis {
            risk_score: 12.0,
            badge_class: "safe".to_string(),
            verdict: "Low Risk".to_string(),
            reasons: vec![],
        }
    }

    #[test]
    fn url_success_renders_and_releases_busy() {
        let mut app = App::new();
        app.busy.begin(ActionId::ScanUrl).unwrap();
        update(&mut app, ApiMessage::UrlScanFinished(Ok(url_analysis())));
        assert!(!app.busy.is_busy(ActionId::ScanUrl));
        assert!(app.url_scanner.report.is_some());
        assert_eq!(app.notifications.items()[0].severity, Severity::Success);
    }

    #[test]
    fn url_failure_keeps_prior_report_and_releases_busy() {
        let mut app = App::new();
        update(&mut app, ApiMessage::UrlScanFinished(Ok(url_analysis())));
        let prior_verdict = app.url_scanner.report.as_ref().unwrap().verdict.clone();

        app.busy.begin(ActionId::ScanUrl).unwrap();
        update(&mut app, ApiMessage::UrlScanFinished(Err(network_error())));

        assert!(!app.busy.is_busy(ActionId::ScanUrl));
        assert_eq!(app.url_scanner.report.as_ref().unwrap().verdict, prior_verdict);
        let errors = app
            .notifications
            .items()
            .iter()
            .filter(|n| n.severity == Severity::Error)
            .count();
        assert_eq!(errors, 1);
    }

    #[test]
    fn late_response_renders_into_its_own_panel_only() {
        // 慢请求在用户切走之后完成：结果写入所属面板，
        // 当前激活的视图不受影响。
        let mut app = App::new();
        app.busy.begin(ActionId::ScanUrl).unwrap();
        app.router.switch_to(cyberintel_core::ViewId::BreachChecker);

        update(&mut app, ApiMessage::UrlScanFinished(Ok(url_analysis())));

        assert_eq!(
            app.router.active(),
            cyberintel_core::ViewId::BreachChecker
        );
        assert!(app.url_scanner.report.is_some());
        assert!(app.breach.report.is_none());
    }

    #[test]
    fn stale_password_analysis_is_discarded() {
        let mut app = App::new();
        app.password_lab.input = "hunter2!".to_string();
        let old_seq = app.password_lab.next_seq();
        let new_seq = app.password_lab.next_seq();

        update(
            &mut app,
            ApiMessage::PasswordAnalyzed {
                seq: old_seq,
                result: Ok(password_analysis(90.0)),
            },
        );
        assert!(app.password_lab.report.is_none());

        update(
            &mut app,
            ApiMessage::PasswordAnalyzed {
                seq: new_seq,
                result: Ok(password_analysis(40.0)),
            },
        );
        let report = app.password_lab.report.as_ref().unwrap();
        assert!((report.score - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn live_password_failure_is_silent() {
        let mut app = App::new();
        let seq = app.password_lab.next_seq();
        update(
            &mut app,
            ApiMessage::PasswordAnalyzed {
                seq,
                result: Err(network_error()),
            },
        );
        assert!(app.notifications.is_empty());
        assert!(app.password_lab.report.is_none());
    }

    #[test]
    fn dashboard_failure_falls_back_to_default_score() {
        let mut app = App::new();
        app.dashboard.loading = true;
        update(&mut app, ApiMessage::DashboardLoaded(Err(network_error())));
        assert!(!app.dashboard.loading);
        assert!(app.dashboard.loaded);
        let summary = app.dashboard.summary.as_ref().unwrap();
        assert!((summary.risk_score - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dashboard_success_classifies_activity() {
        let mut app = App::new();
        let stats = DashboardStats {
            total_scans: 2,
            threats_detected: 5,
            risk_score: 60.0,
            recent_activity: vec![cyberintel_client::ActivityEntry {
                action: "Breach Check".to_string(),
                time: "12 mins ago".to_string(),
                status: "Found 4".to_string(),
            }],
        };
        update(&mut app, ApiMessage::DashboardLoaded(Ok(stats)));
        let summary = app.dashboard.summary.as_ref().unwrap();
        assert_eq!(summary.activity[0].tone, Tone::Danger);
        assert!(app.dashboard.refreshed_at.is_some());
    }

    #[test]
    fn breach_failure_notifies_once_and_releases_busy() {
        let mut app = App::new();
        app.busy.begin(ActionId::SearchBreach).unwrap();
        update(
            &mut app,
            ApiMessage::BreachSearchFinished(Err(network_error())),
        );
        assert!(!app.busy.is_busy(ActionId::SearchBreach));
        assert_eq!(app.notifications.len(), 1);
        assert_eq!(app.notifications.items()[0].severity, Severity::Error);
    }

    #[test]
    fn breach_success_projects_report() {
        let mut app = App::new();
        app.busy.begin(ActionId::SearchBreach).unwrap();
        let check = BreachCheck {
            status: "safe".to_string(),
            message: "No breaches found".to_string(),
            breaches: vec![],
        };
        update(&mut app, ApiMessage::BreachSearchFinished(Ok(check)));
        assert!(matches!(
            app.breach.report,
            Some(BreachReport::Safe { .. })
        ));
    }

    #[test]
    fn chat_reply_replaces_typing_indicator() {
        let mut app = App::new();
        app.busy.begin(ActionId::SendChat).unwrap();
        app.assistant.transcript.push_user("hello");
        app.assistant.transcript.set_typing(true);

        let reply = ChatReply {
            response: "Stay **vigilant** out there.".to_string(),
        };
        update(&mut app, ApiMessage::ChatReplyReceived(Ok(reply)));

        assert!(!app.assistant.transcript.typing());
        assert!(!app.busy.is_busy(ActionId::SendChat));
        let turns = app.assistant.transcript.turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].speaker, Speaker::Assistant);
        assert!(turns[1].segments.iter().any(|s| s.bold));
    }

    #[test]
    fn chat_failure_appends_outage_line() {
        let mut app = App::new();
        app.busy.begin(ActionId::SendChat).unwrap();
        app.assistant.transcript.set_typing(true);
        update(&mut app, ApiMessage::ChatReplyReceived(Err(network_error())));

        assert!(!app.assistant.transcript.typing());
        let turns = app.assistant.transcript.turns();
        assert_eq!(turns[0].speaker, Speaker::Assistant);
        assert!(turns[0].segments[0].text.contains("SYSTEM OUTAGE"));
        assert!(app.notifications.is_empty());
    }

    fn password_analysis(score: f64) -> PasswordAnalysis {
        PasswordAnalysis {
            score,
            crack_time: "2 hours".to_string(),
            entropy: 33.0,
            feedback: PasswordFeedback::default(),
        }
    }
}
