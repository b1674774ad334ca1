//! CyberIntel Core Library
//!
//! Pure client-side orchestration state for the security dashboard:
//! - View routing (single-active-panel navigation)
//! - Notification queue (auto-dismissing toasts)
//! - Busy-state controller (per-control mutual exclusion)
//! - Score/badge/band mappings and response projections
//! - Chat transcript with emphasis-markup resolution
//!
//! Everything in this crate is plain data plus transition functions: no
//! terminal, no network, no clocks of its own (callers inject `Instant`s).
//! The rendering adapter and the request dispatcher live in the TUI crate.

pub mod busy;
pub mod chat;
pub mod dashboard;
pub mod error;
pub mod markup;
pub mod notify;
pub mod report;
pub mod router;
pub mod score;

// Re-export common types
pub use busy::{ActionId, BusyState};
pub use chat::{ChatTranscript, ChatTurn, Speaker, OUTAGE_REPLY};
pub use dashboard::{ActivityRow, DashboardSummary};
pub use error::{require_input, CoreError, CoreResult};
pub use notify::{Notification, NotificationQueue, Phase, Severity};
pub use report::{BreachCard, BreachReport, PasswordReport, PhishingReport, ReasonEntry, UrlReport};
pub use router::{ViewId, ViewRouter};
pub use score::{StrengthBand, Tone};
