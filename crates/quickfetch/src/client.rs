//! Request executor and verb wrappers.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::RequestConfig;
use crate::error::{Error, Result};
use crate::request::{CredentialsMode, Method, TransportRequest};
use crate::response::{Body, Response};
use crate::transport::{ReqwestTransport, Transport};

/// Headers attached to every request unless shadowed by the caller.
const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("content-type", "application/json"),
    ("accept", "application/json"),
];

/// Async HTTP request helper.
///
/// One `request` entry point plus five verb wrappers that fix the method.
/// Every call builds its transport options from a fresh [`RequestConfig`],
/// races the exchange against a timeout-armed cancellation token, decodes
/// the body by content type, and fails with a status-shaped error on
/// non-2xx.
///
/// ```no_run
/// use quickfetch::{Client, RequestConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new()?;
///     let response = client
///         .get("/users/1", RequestConfig::new().base_url("https://api.example.com"))
///         .await?;
///     println!("status: {}", response.status);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client backed by the default reqwest transport.
    pub fn new() -> Result<Self> {
        Ok(Self {
            transport: Arc::new(ReqwestTransport::new()?),
        })
    }

    /// Create a client over a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Execute one HTTP exchange described by `config`.
    ///
    /// `url` is concatenated directly after `config.base_url`, without
    /// escaping. The configured timeout always races the exchange, even
    /// when the caller supplied their own cancellation token; whichever
    /// source fires first terminates the call with a timeout-shaped error.
    pub async fn request(&self, url: &str, config: RequestConfig) -> Result<Response> {
        let timeout_ms = config.timeout.as_millis() as u64;

        // A caller-supplied token links in as the parent, so either its
        // trigger or the timer terminates this exchange; first one wins.
        let token = match &config.signal {
            Some(signal) => signal.child_token(),
            None => CancellationToken::new(),
        };

        let body = match (&config.body, config.method.allows_body()) {
            (Some(value), true) => Some(serde_json::to_string(value)?),
            _ => None,
        };

        let request = TransportRequest {
            method: config.method,
            url: format!("{}{}", config.base_url, url),
            headers: merge_headers(&config.headers),
            body,
            credentials: if config.with_credentials {
                CredentialsMode::Include
            } else {
                CredentialsMode::SameOrigin
            },
            cache: config.cache,
            signal: token.clone(),
        };

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            timeout_ms,
            "dispatching request"
        );

        // The select drops both the timer and the in-flight exchange on
        // every exit path; nothing outlives this call.
        let outcome = tokio::select! {
            outcome = self.transport.fetch(request) => outcome,
            _ = token.cancelled() => {
                tracing::warn!(url, timeout_ms, "request cancelled before a response arrived");
                return Err(Error::Timeout { timeout_ms });
            }
            _ = tokio::time::sleep(config.timeout) => {
                tracing::warn!(url, timeout_ms, "request timed out");
                return Err(Error::Timeout { timeout_ms });
            }
        };

        let raw = outcome?;

        // Decode before the status check: an error response still carries a
        // decodable payload, and a malformed body fails the call as-is.
        let body = Body::decode(raw.header("content-type"), raw.body.clone())?;

        let status_text = status_text_for(raw.status, &raw.status_text);
        if !(200..300).contains(&raw.status) {
            tracing::warn!(url, status = raw.status, "request failed with error status");
            return Err(Error::Status {
                status: raw.status,
                status_text,
                body,
            });
        }

        Ok(Response {
            status: raw.status,
            status_text,
            headers: raw.headers,
            body,
        })
    }

    /// Send a GET request.
    pub async fn get(&self, url: &str, config: RequestConfig) -> Result<Response> {
        self.request(url, config.method(Method::Get)).await
    }

    /// Send a POST request.
    pub async fn post(&self, url: &str, config: RequestConfig) -> Result<Response> {
        self.request(url, config.method(Method::Post)).await
    }

    /// Send a PUT request.
    pub async fn put(&self, url: &str, config: RequestConfig) -> Result<Response> {
        self.request(url, config.method(Method::Put)).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, url: &str, config: RequestConfig) -> Result<Response> {
        self.request(url, config.method(Method::Delete)).await
    }

    /// Send a PATCH request.
    pub async fn patch(&self, url: &str, config: RequestConfig) -> Result<Response> {
        self.request(url, config.method(Method::Patch)).await
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

/// Merge the default header set with caller overrides; caller values win
/// on case-insensitive name collision, unshadowed defaults remain.
fn merge_headers(overrides: &HashMap<String, String>) -> HashMap<String, String> {
    let mut merged: HashMap<String, String> = DEFAULT_HEADERS
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    for (name, value) in overrides {
        merged.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        merged.insert(name.clone(), value.clone());
    }

    merged
}

/// Prefer the transport-provided reason phrase, falling back to the
/// canonical phrase for the status code.
fn status_text_for(status: u16, provided: &str) -> String {
    if !provided.is_empty() {
        return provided.to_string();
    }
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_headers_keeps_defaults() {
        let merged = merge_headers(&HashMap::new());
        assert_eq!(merged.get("content-type").map(String::as_str), Some("application/json"));
        assert_eq!(merged.get("accept").map(String::as_str), Some("application/json"));
    }

    #[test]
    fn test_merge_headers_caller_wins_case_insensitively() {
        let mut overrides = HashMap::new();
        overrides.insert("Content-Type".to_string(), "text/csv".to_string());
        let merged = merge_headers(&overrides);

        let content_types: Vec<_> = merged
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .collect();
        assert_eq!(content_types.len(), 1);
        assert_eq!(content_types[0].1, "text/csv");
        // The unshadowed default survives.
        assert_eq!(merged.get("accept").map(String::as_str), Some("application/json"));
    }

    #[test]
    fn test_merge_headers_extra_caller_headers_pass_through() {
        let mut overrides = HashMap::new();
        overrides.insert("Authorization".to_string(), "Bearer token".to_string());
        let merged = merge_headers(&overrides);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("Authorization").map(String::as_str), Some("Bearer token"));
    }

    #[test]
    fn test_status_text_fallback() {
        assert_eq!(status_text_for(500, ""), "Internal Server Error");
        assert_eq!(status_text_for(404, ""), "Not Found");
        assert_eq!(status_text_for(200, "Custom OK"), "Custom OK");
        assert_eq!(status_text_for(599, ""), "");
    }
}
