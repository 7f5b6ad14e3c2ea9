//! Error taxonomy surfaced to the user.
//!
//! Every request-issuing path ends in either data or an [`ErrorDetail`].
//! The state machine turns an `ErrorDetail` into the error screen; it is
//! never dropped on the floor.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unreachable host, timeout, TLS or other transport failure.
    NetworkError,
    /// HTTP 4xx: bad input, not found, conflict.
    ClientError,
    /// HTTP 5xx.
    ServerError,
    /// Unparseable body or a body missing required fields.
    MalformedResponse,
}

impl ErrorKind {
    /// Derives the kind from an HTTP status outside the 2xx range.
    pub fn from_status(status: u16) -> Self {
        match status {
            400..=499 => ErrorKind::ClientError,
            500..=599 => ErrorKind::ServerError,
            _ => ErrorKind::MalformedResponse,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::NetworkError => "Network error",
            ErrorKind::ClientError => "Client error",
            ErrorKind::ServerError => "Server error",
            ErrorKind::MalformedResponse => "Malformed response",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ErrorDetail {
    pub kind: ErrorKind,
    pub message: String,
    /// HTTP status, when the error came from a response.
    pub status: Option<u16>,
}

impl ErrorDetail {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NetworkError, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedResponse, message)
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}
