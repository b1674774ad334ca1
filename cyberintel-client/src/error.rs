use serde::{Deserialize, Serialize};

/// Unified error type for all CyberIntel API operations.
///
/// Each variant carries the `endpoint` that produced the error so callers can
/// name the failing action in user-facing messages. All variants are
/// serializable for structured error reporting.
///
/// None of these errors is retried by the client: the API contract is a
/// single request per user action, and a failed invocation is terminal until
/// the user acts again.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, broken stream, etc.).
    NetworkError {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out at the transport layer.
    Timeout {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-success status code.
    HttpStatus {
        /// Endpoint that produced the error.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, if it could be read.
        body: Option<String>,
    },

    /// Failed to parse the server's JSON response.
    ParseError {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Details about the parse failure.
        detail: String,
    },
}

impl ApiError {
    /// Endpoint path the failing request was addressed to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        match self {
            Self::NetworkError { endpoint, .. }
            | Self::Timeout { endpoint, .. }
            | Self::HttpStatus { endpoint, .. }
            | Self::ParseError { endpoint, .. } => endpoint,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { endpoint, detail } => {
                write!(f, "[{endpoint}] Network error: {detail}")
            }
            Self::Timeout { endpoint, detail } => {
                write!(f, "[{endpoint}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                endpoint,
                status,
                body,
            } => {
                if let Some(body) = body {
                    write!(f, "[{endpoint}] HTTP {status}: {body}")
                } else {
                    write!(f, "[{endpoint}] HTTP {status}")
                }
            }
            Self::ParseError { endpoint, detail } => {
                write!(f, "[{endpoint}] Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
