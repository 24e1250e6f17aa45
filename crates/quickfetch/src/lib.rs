//! quickfetch: minimal async HTTP request helper.
//!
//! One `request` entry point that issues an HTTP call with a default
//! header set, credential mode, content-type negotiated decoding, and a
//! timeout-guarded exchange, plus five verb wrappers that fix the method.
//!
//! # Architecture
//!
//! - [`Client`]: the request executor and verb wrappers
//! - [`RequestConfig`]: per-call configuration with field-by-field defaults
//! - [`Transport`]: the injected HTTP exchange seam, with
//!   [`ReqwestTransport`] as the default implementation
//! - [`Response`] / [`Body`]: normalized successful outcomes
//! - [`Error`]: the closed failure taxonomy (status / timeout / decode /
//!   transport)

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;

pub use client::Client;
pub use config::{RequestConfig, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
pub use request::{CacheMode, CredentialsMode, Method, TransportRequest};
pub use response::{Body, Response};
pub use transport::{ReqwestTransport, Transport, TransportError, TransportResponse};
