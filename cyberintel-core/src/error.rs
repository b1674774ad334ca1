//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use cyberintel_client::ApiError;

use crate::busy::ActionId;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Required input field was empty or whitespace-only
    #[error("Input required: {0}")]
    EmptyInput(&'static str),

    /// The trigger control already has a request in flight
    #[error("Action already in progress: {0:?}")]
    Busy(ActionId),
}

/// Core layer result type
pub type CoreResult<T> = Result<T, CoreError>;

/// Trim `value`; reject it when nothing remains.
///
/// Every explicit-submit panel validates through here, so an empty or
/// whitespace-only field never reaches the network.
pub fn require_input(value: &str, field: &'static str) -> CoreResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyInput(field));
    }
    Ok(trimmed.to_string())
}
