//! The HTTP exchange seam: a `Transport` trait plus the default
//! reqwest-backed implementation.
//!
//! The executor owns content-type negotiation and the timeout race, so a
//! transport only has to perform one exchange and hand back the raw status,
//! headers, and body bytes. That keeps test doubles trivial.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::request::TransportRequest;

/// Network-level failures reported by a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection failed (DNS, TCP, TLS).
    #[error("connection error: {0}")]
    Connection(String),

    /// The request could not be built (e.g. malformed header name).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Generic reqwest error.
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}

/// Raw outcome of one HTTP exchange, before content-type negotiation.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,

    /// Reason phrase as reported by the transport. May be empty; the
    /// executor falls back to the canonical phrase for the status code.
    pub status_text: String,

    /// Response headers with lowercased names.
    pub headers: HashMap<String, String>,

    /// Undecoded response body.
    pub body: Bytes,
}

impl TransportResponse {
    /// Get a header value (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == name_lower)
            .map(|(_, v)| v.as_str())
    }
}

/// A fetch-like HTTP exchange primitive.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one HTTP exchange.
    async fn fetch(&self, request: TransportRequest)
        -> Result<TransportResponse, TransportError>;
}

/// Default transport over a pooled `reqwest` client.
///
/// Credential and cache modes from the request ride through as follows:
/// non-default cache hints map to the matching `Cache-Control` request
/// directive; the credential mode is carried as data (reqwest's cookie jar
/// is enabled at client construction and cannot be toggled per request).
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build the underlying pooled client.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("quickfetch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn fetch(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let mut headers = reqwest::header::HeaderMap::new();
        for (name, value) in &request.headers {
            let name = reqwest::header::HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| TransportError::InvalidRequest(format!("header name {name:?}: {e}")))?;
            let value = reqwest::header::HeaderValue::from_str(value)
                .map_err(|e| TransportError::InvalidRequest(format!("header value: {e}")))?;
            headers.insert(name, value);
        }
        if let Some(directive) = request.cache.cache_control() {
            headers.insert(
                reqwest::header::CACHE_CONTROL,
                reqwest::header::HeaderValue::from_static(directive),
            );
        }

        let mut builder = self.client.request(method, &request.url).headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.as_str().to_ascii_lowercase(), v.to_string());
            }
        }

        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            status_text,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        assert!(ReqwestTransport::new().is_ok());
    }

    #[test]
    fn test_transport_response_header_lookup() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        let response = TransportResponse {
            status: 200,
            status_text: "OK".to_string(),
            headers,
            body: Bytes::new(),
        };

        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }
}
