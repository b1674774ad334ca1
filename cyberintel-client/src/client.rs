//! The CyberIntel API client.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::http;
use crate::types::{
    BreachCheck, ChatReply, ChatRequest, DashboardStats, EmailRequest, PasswordAnalysis,
    PasswordRequest, PhishingAnalysis, TextRequest, UrlAnalysis, UrlRequest,
};

/// Default API base when no configuration overrides it.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5555/api";

/// Client for the CyberIntel analysis API.
///
/// `reqwest::Client` is internally reference-counted, so this struct is
/// cheap to clone; the UI layer normally creates it once at startup and
/// shares it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct SentinelClient {
    http: reqwest::Client,
    base_url: String,
}

impl SentinelClient {
    /// Create a client rooted at `base_url` (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// API base this client is rooted at.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========== Endpoints ==========

    /// Fetch aggregate counters and the recent-activity feed.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.get("/dashboard-stats").await
    }

    /// Analyze a URL for reputation/risk signals.
    pub async fn analyze_url(&self, url: &str) -> Result<UrlAnalysis> {
        self.post("/analyze-url", &UrlRequest { url }).await
    }

    /// Score a password's strength. Called once per input event on the live
    /// typing path, so it must stay a single cheap round trip.
    pub async fn analyze_password(&self, password: &str) -> Result<PasswordAnalysis> {
        self.post("/analyze-password", &PasswordRequest { password })
            .await
    }

    /// Classify a pasted email/SMS text for phishing signals.
    pub async fn analyze_email(&self, text: &str) -> Result<PhishingAnalysis> {
        self.post("/analyze-email", &TextRequest { text }).await
    }

    /// Look an email address up in the breach database.
    pub async fn check_breach(&self, email: &str) -> Result<BreachCheck> {
        self.post("/check-breach", &EmailRequest { email }).await
    }

    /// Send one chat message to the assistant.
    pub async fn chat(&self, message: &str) -> Result<ChatReply> {
        self.post("/chat", &ChatRequest { message }).await
    }

    // ========== Request helpers ==========

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        log::debug!("GET {url}");

        let body = http::execute(self.http.get(&url), path).await?;
        http::parse_json(&body, path)
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        log::debug!("POST {url}");

        let response = http::execute(self.http.post(&url).json(body), path).await?;
        http::parse_json(&response, path)
    }
}
