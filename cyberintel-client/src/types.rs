//! Wire types for the CyberIntel API.
//!
//! Field names mirror the server's JSON exactly; anything the UI derives
//! (tones, bands, icons) is computed downstream, not here.

use serde::{Deserialize, Serialize};

// ========== Dashboard ==========

/// Aggregate counters and recent activity, from `GET /dashboard-stats`.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardStats {
    pub total_scans: u64,
    pub threats_detected: u64,
    /// Overall risk score on `[0, 100]`, drives the dashboard gauge.
    pub risk_score: f64,
    #[serde(default)]
    pub recent_activity: Vec<ActivityEntry>,
}

/// One row of the recent-activity feed.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityEntry {
    pub action: String,
    pub time: String,
    /// Free-text status; badge severity is derived by substring match.
    pub status: String,
}

// ========== URL analysis ==========

/// Verdict for one URL, from `POST /analyze-url`.
#[derive(Debug, Clone, Deserialize)]
pub struct UrlAnalysis {
    pub risk_score: f64,
    /// Categorical severity token; only `"safe"` and `"warning"` are
    /// contractually recognized, anything else renders as danger.
    pub badge_class: String,
    pub verdict: String,
    #[serde(default)]
    pub reasons: Vec<UrlReason>,
}

/// One evidence entry explaining a URL verdict.
#[derive(Debug, Clone, Deserialize)]
pub struct UrlReason {
    /// Per-entry severity token (`safe`/`warning`/`danger`).
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub desc: String,
}

// ========== Password analysis ==========

/// Strength report for one password, from `POST /analyze-password`.
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordAnalysis {
    /// Strength score on `[0, 100]`; the meter fill is proportional to it.
    pub score: f64,
    pub crack_time: String,
    pub entropy: f64,
    pub feedback: PasswordFeedback,
}

/// Decomposed feedback: at most one warning plus a suggestion list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PasswordFeedback {
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

// ========== Phishing-text analysis ==========

/// Classification of a pasted email/SMS text, from `POST /analyze-email`.
#[derive(Debug, Clone, Deserialize)]
pub struct PhishingAnalysis {
    /// Phishing probability on `[0, 100]`.
    pub probability: f64,
    pub badge_class: String,
    pub verdict: String,
    #[serde(default)]
    pub reasons: Vec<PhishingReason>,
}

/// One evidence entry explaining a phishing verdict.
#[derive(Debug, Clone, Deserialize)]
pub struct PhishingReason {
    pub label: String,
    pub desc: String,
}

// ========== Breach lookup ==========

/// Breach-database lookup result, from `POST /check-breach`.
///
/// `status == "safe"` means no breaches; any other value comes with one or
/// more [`BreachRecord`]s.
#[derive(Debug, Clone, Deserialize)]
pub struct BreachCheck {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub breaches: Vec<BreachRecord>,
}

/// One known breach the queried address appears in.
#[derive(Debug, Clone, Deserialize)]
pub struct BreachRecord {
    pub breach_name: String,
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub data_compromised: Vec<String>,
}

// ========== Chat ==========

/// Assistant reply, from `POST /chat`. The text may contain `**bold**`
/// emphasis markup.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

// ========== Request bodies ==========

#[derive(Debug, Serialize)]
pub(crate) struct UrlRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PasswordRequest<'a> {
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct TextRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmailRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub message: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_dashboard_stats() {
        let json = r#"{
            "total_scans": 4,
            "threats_detected": 17,
            "risk_score": 85,
            "recent_activity": [
                {"action": "URL Scan", "status": "Safe", "time": "Just now"}
            ]
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_scans, 4);
        assert_eq!(stats.threats_detected, 17);
        assert!((stats.risk_score - 85.0).abs() < f64::EPSILON);
        assert_eq!(stats.recent_activity.len(), 1);
        assert_eq!(stats.recent_activity[0].status, "Safe");
    }

    #[test]
    fn deserialize_url_analysis_with_reason_type_keyword() {
        let json = r#"{
            "risk_score": 72,
            "badge_class": "danger",
            "verdict": "High Risk",
            "reasons": [
                {"type": "danger", "label": "Suspicious TLD", "desc": "Uncommon top-level domain"}
            ]
        }"#;
        let report: UrlAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(report.reasons[0].kind, "danger");
        assert_eq!(report.verdict, "High Risk");
    }

    #[test]
    fn deserialize_password_feedback_missing_fields() {
        // The server omits `warning` when there is none and may omit the
        // suggestion list entirely.
        let json = r#"{
            "score": 91.5,
            "crack_time": "centuries",
            "entropy": 88.2,
            "feedback": {}
        }"#;
        let report: PasswordAnalysis = serde_json::from_str(json).unwrap();
        assert!(report.feedback.warning.is_none());
        assert!(report.feedback.suggestions.is_empty());
    }

    #[test]
    fn deserialize_breach_check_safe_without_breaches() {
        let json = r#"{"status": "safe", "message": "No breaches found"}"#;
        let check: BreachCheck = serde_json::from_str(json).unwrap();
        assert_eq!(check.status, "safe");
        assert!(check.breaches.is_empty());
    }

    #[test]
    fn deserialize_breach_check_with_records() {
        let json = r#"{
            "status": "breached",
            "message": "Found in 1 breach",
            "breaches": [{
                "breach_name": "MegaCorp 2021",
                "date": "2021-06-12",
                "description": "Credential stuffing incident",
                "data_compromised": ["Emails", "Passwords"]
            }]
        }"#;
        let check: BreachCheck = serde_json::from_str(json).unwrap();
        assert_eq!(check.breaches.len(), 1);
        assert_eq!(
            check.breaches[0].data_compromised,
            vec!["Emails", "Passwords"]
        );
    }

    #[test]
    fn serialize_request_bodies() {
        let body = serde_json::to_value(UrlRequest { url: "https://x.io" }).unwrap();
        assert_eq!(body, serde_json::json!({"url": "https://x.io"}));

        let body = serde_json::to_value(ChatRequest { message: "hello" }).unwrap();
        assert_eq!(body, serde_json::json!({"message": "hello"}));
    }
}
