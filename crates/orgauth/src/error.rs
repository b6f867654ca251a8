//! Error types for the orgauth library.
//!
//! This module provides a unified error type with explicit variants for
//! transport, protocol, decoding, token and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for orgauth operations.
///
/// No variant is retried or recovered internally; every failure is handed
/// back to the caller as-is.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, DNS, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service answered with a non-success HTTP status.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The service answered with a body that is not JSON.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The login response lacks one of the two tokens.
    #[error("login response is missing the '{field}' token")]
    MissingToken { field: &'static str },

    /// Input validation errors (bad host, unusable token).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed (includes DNS resolution and TLS handshake).
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Connect or read phase timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// A non-success response from the service.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// The `detail` message from the service, if the body carried one.
    pub detail: Option<String>,
    /// The error body, if it was JSON.
    pub body: Option<serde_json::Value>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, detail: Option<String>, body: Option<serde_json::Value>) -> Self {
        Self {
            status,
            detail,
            body,
        }
    }

    /// Build a protocol error from a raw error body.
    ///
    /// A JSON body is kept whole. The service reports most failures as
    /// `{"detail": "..."}`, which also fills `detail`.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let body = serde_json::from_slice::<serde_json::Value>(body).ok();
        let detail = body
            .as_ref()
            .and_then(|v| v.get("detail"))
            .and_then(|d| d.as_str())
            .map(str::to_owned);
        Self::new(status, detail, body)
    }

    /// Check if the service rejected the credentials or token.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

/// A response body that could not be parsed as JSON.
#[derive(Debug, Error)]
#[error("response body is not valid JSON ({source}): {body}")]
pub struct DecodeError {
    source: serde_json::Error,
    /// Leading part of the offending body, lossily decoded.
    pub body: String,
}

const BODY_PREVIEW_LEN: usize = 200;

impl DecodeError {
    pub(crate) fn new(source: serde_json::Error, body: &[u8]) -> Self {
        let mut body = String::from_utf8_lossy(body).into_owned();
        if body.len() > BODY_PREVIEW_LEN {
            let mut end = BODY_PREVIEW_LEN;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            body.truncate(end);
            body.push_str("...");
        }
        Self { source, body }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid service host or base URL.
    #[error("invalid service URL '{value}': {reason}")]
    ServiceUrl { value: String, reason: String },

    /// Organization name that cannot form a path segment.
    #[error("invalid organization '{value}': {reason}")]
    Organization { value: String, reason: String },

    /// Token cannot be sent as a bearer credential.
    #[error("invalid token: {reason}")]
    Token { reason: String },
}
