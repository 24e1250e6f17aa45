//! Error taxonomy for request execution.
//!
//! The set is closed: a non-2xx status, a timeout, a body that does not
//! decode per its declared content type, or a network-level transport
//! failure. Decode failures deliberately stay transparent rather than being
//! normalized into the status-error shape, so callers can always tell
//! "the server answered with an error" apart from "the answer was garbage".

use thiserror::Error;

use crate::response::Body;
use crate::transport::TransportError;

/// Errors produced by a single request execution.
#[derive(Debug, Error)]
pub enum Error {
    /// The exchange completed but the status was outside 2xx. Carries the
    /// already-decoded response payload.
    #[error("HTTP {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        body: Body,
    },

    /// Cancellation fired before any response arrived. No status fields:
    /// the server never answered.
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// The response body could not be decoded per its declared content
    /// type. Surfaced as the raw serde error, unwrapped.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// Network-level failure unrelated to cancellation, surfaced unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Result type for request operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The HTTP status code, present only for status errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The decoded error payload, present only for status errors.
    pub fn body(&self) -> Option<&Body> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether this call was terminated by the cancellation guard.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
