//! # cyberintel-client
//!
//! Typed HTTP client for the CyberIntel security-analytics API.
//!
//! One async method per analysis endpoint, JSON in and JSON out:
//!
//! | Endpoint | Method | Request body |
//! |----------|--------|--------------|
//! | `/dashboard-stats` | GET | — |
//! | `/analyze-url` | POST | `{ "url": ... }` |
//! | `/analyze-password` | POST | `{ "password": ... }` |
//! | `/analyze-email` | POST | `{ "text": ... }` |
//! | `/check-breach` | POST | `{ "email": ... }` |
//! | `/chat` | POST | `{ "message": ... }` |
//!
//! The client applies no retry, backoff, or authentication: every failure is
//! reported to the caller as a single [`ApiError`] and the caller decides how
//! to surface it. The transport's own timeout (if any) is the only timeout.
//!
//! ## TLS Backend
//!
//! - **`rustls`** *(default)* — Use rustls. Recommended for cross-compilation.
//! - **`native-tls`** — Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cyberintel_client::SentinelClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SentinelClient::new("http://127.0.0.1:5555/api");
//!
//!     let report = client.analyze_url("https://example.com/login").await?;
//!     println!("{} ({})", report.verdict, report.risk_score);
//!
//!     let stats = client.dashboard_stats().await?;
//!     println!("{} scans, {} threats", stats.total_scans, stats.threats_detected);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod http;
mod types;

pub use client::{SentinelClient, DEFAULT_API_BASE};
pub use error::{ApiError, Result};
pub use types::{
    ActivityEntry, BreachCheck, BreachRecord, ChatReply, DashboardStats, PasswordAnalysis,
    PasswordFeedback, PhishingAnalysis, PhishingReason, UrlAnalysis, UrlReason,
};
