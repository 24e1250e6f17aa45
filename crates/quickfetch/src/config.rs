//! Per-request configuration with field-by-field defaults.

use std::collections::HashMap;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::request::{CacheMode, Method};

/// Timeout applied when the caller does not specify one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Configuration for a single request.
///
/// Constructed fresh per call and never mutated after construction. Every
/// field has an independent default, so partial configs are legal:
///
/// ```
/// use quickfetch::RequestConfig;
///
/// let config = RequestConfig::new()
///     .base_url("https://api.example.com")
///     .timeout_ms(5_000);
/// assert!(config.with_credentials);
/// ```
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Prefix concatenated (unescaped) in front of the call-site URL.
    pub base_url: String,

    /// HTTP method. The verb wrappers overwrite this unconditionally.
    pub method: Method,

    /// Header overrides, merged over the default header set with the
    /// caller's value winning on name collision.
    pub headers: HashMap<String, String>,

    /// JSON payload. Serialized and attached unless the method is GET.
    pub body: Option<serde_json::Value>,

    /// Whether to forward cookies and ambient credentials.
    pub with_credentials: bool,

    /// Total time allowed for the exchange.
    pub timeout: Duration,

    /// Externally supplied cancellation token. When absent the executor
    /// creates its own; the timeout timer races either way.
    pub signal: Option<CancellationToken>,

    /// Cache behavior hint forwarded to the transport.
    pub cache: CacheMode,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            method: Method::Get,
            headers: HashMap::new(),
            body: None,
            with_credentials: true,
            timeout: DEFAULT_TIMEOUT,
            signal: None,
            cache: CacheMode::Default,
        }
    }
}

impl RequestConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL prefix.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Add a single header override.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Replace the header override map.
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Set the JSON request payload.
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set whether cookies and ambient credentials are forwarded.
    pub fn with_credentials(mut self, enabled: bool) -> Self {
        self.with_credentials = enabled;
        self
    }

    /// Set the total timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout from milliseconds.
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.timeout = Duration::from_millis(ms);
        self
    }

    /// Supply an external cancellation token.
    pub fn signal(mut self, token: CancellationToken) -> Self {
        self.signal = Some(token);
        self
    }

    /// Set the cache behavior hint.
    pub fn cache(mut self, cache: CacheMode) -> Self {
        self.cache = cache;
        self
    }
}
