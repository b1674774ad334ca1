//! Generic HTTP request handling shared by every endpoint method.
//!
//! Unified flow: send the prepared request, log status and body at `debug`,
//! map transport failures and non-success statuses into [`ApiError`], and
//! parse JSON separately so parse failures keep the raw body in the logs.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Maximum body length echoed into debug/error logs.
const LOG_BODY_LIMIT: usize = 512;

/// Truncate a response body for logging.
pub(crate) fn truncate_for_log(body: &str) -> String {
    if body.len() <= LOG_BODY_LIMIT {
        return body.to_string();
    }
    let mut end = LOG_BODY_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... ({} bytes)", &body[..end], body.len())
}

/// Perform an HTTP request and return the response body text.
///
/// # Arguments
/// * `request` - configured request builder (URL, headers, body)
/// * `endpoint` - endpoint path, used for logging and error context
///
/// # Returns
/// * `Ok(body)` - body text of a 2xx response
/// * `Err(ApiError)` - transport failure, non-success status, or unreadable body
pub(crate) async fn execute(request: RequestBuilder, endpoint: &str) -> Result<String, ApiError> {
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            ApiError::Timeout {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        } else {
            ApiError::NetworkError {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        }
    })?;

    let status = response.status();
    log::debug!("[{endpoint}] Response Status: {status}");

    if !status.is_success() {
        let body = response.text().await.ok();
        log::warn!("[{endpoint}] HTTP {status}");
        return Err(ApiError::HttpStatus {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text().await.map_err(|e| ApiError::NetworkError {
        endpoint: endpoint.to_string(),
        detail: format!("Failed to read response body: {e}"),
    })?;

    log::debug!("[{endpoint}] Response Body: {}", truncate_for_log(&body));

    Ok(body)
}

/// Parse a JSON response body.
pub(crate) fn parse_json<T>(body: &str, endpoint: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("[{endpoint}] JSON parse failed: {e}");
        log::error!("[{endpoint}] Raw response: {}", truncate_for_log(body));
        ApiError::ParseError {
            endpoint: endpoint.to_string(),
            detail: e.to_string(),
        }
    })
}
