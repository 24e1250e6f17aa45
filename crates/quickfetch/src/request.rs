//! Request-side types handed to the transport.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tokio_util::sync::CancellationToken;

/// HTTP request methods supported by the helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    /// Returns the method as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }

    /// GET exchanges never carry a request payload.
    pub fn allows_body(&self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "PATCH" => Ok(Self::Patch),
            _ => Err(format!("Invalid HTTP method: {}", s)),
        }
    }
}

/// Credential forwarding mode for one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsMode {
    /// Forward cookies and ambient credentials.
    Include,
    /// Only forward credentials to the origin itself.
    SameOrigin,
}

impl CredentialsMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::SameOrigin => "same-origin",
        }
    }
}

/// Cache behavior hint carried to the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheMode {
    #[default]
    Default,
    NoStore,
    Reload,
    NoCache,
    ForceCache,
    OnlyIfCached,
}

impl CacheMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::NoStore => "no-store",
            Self::Reload => "reload",
            Self::NoCache => "no-cache",
            Self::ForceCache => "force-cache",
            Self::OnlyIfCached => "only-if-cached",
        }
    }

    /// The `Cache-Control` request directive this hint maps to, if any.
    pub(crate) fn cache_control(&self) -> Option<&'static str> {
        match self {
            Self::NoStore => Some("no-store"),
            Self::Reload | Self::NoCache => Some("no-cache"),
            Self::OnlyIfCached => Some("only-if-cached"),
            Self::Default | Self::ForceCache => None,
        }
    }
}

/// Fully-built transport options for a single exchange.
///
/// Produced by the executor from a [`RequestConfig`](crate::RequestConfig);
/// the URL is the plain concatenation of the configured base URL and the
/// call-site path, and `headers` already contain the merged default set.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: HashMap<String, String>,
    /// Pre-serialized JSON payload. Absent for GET regardless of config.
    pub body: Option<String>,
    pub credentials: CredentialsMode,
    pub cache: CacheMode,
    /// Effective cancellation token for this exchange. The executor races
    /// it against the transport; implementations may also observe it.
    pub signal: CancellationToken,
}
