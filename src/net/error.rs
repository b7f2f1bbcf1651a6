//! Error type shared by every REST call.
//!
//! ERROR HANDLING
//! ==============
//! Two classes only. `Transport` covers anything that prevented a usable
//! response (network failure, malformed success body). `Status` covers a
//! non-2xx response, carrying the server's `detail` string when one was sent.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// HTTP status the backend uses for a missing or expired session.
pub const STATUS_UNAUTHORIZED: u16 = 401;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
}

impl ApiError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    /// True when the server rejected the call because the session is gone.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == STATUS_UNAUTHORIZED)
    }

    /// Server-provided detail, if the failure carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail: Some(detail), .. } => Some(detail.as_str()),
            _ => None,
        }
    }

    /// Message to show the user for this failure.
    ///
    /// Application failures surface `detail` verbatim and otherwise fall back
    /// to `fallback`; transport failures always use `transport_message`.
    pub fn user_message(&self, fallback: &str, transport_message: &str) -> String {
        match self {
            Self::Transport(_) => transport_message.to_owned(),
            Self::Status { .. } => self.detail().unwrap_or(fallback).to_owned(),
        }
    }
}
