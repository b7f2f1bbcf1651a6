//! Wire DTOs for the activities backend.
//!
//! DESIGN
//! ======
//! These mirror the JSON bodies the server sends and accepts. The roster
//! itself is decoded in `state::roster` so response order is kept.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `GET /auth/status`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthStatusResponse {
    pub is_authenticated: bool,
    #[serde(default)]
    pub username: Option<String>,
}

/// Per-activity payload inside the `GET /activities` mapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// JSON body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful signup/unregister body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body sent with non-2xx responses.
///
/// `detail` is usually a string but validation failures send a list, so it is
/// kept loosely typed and only surfaced when it is text.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text.clone()),
            _ => None,
        }
    }
}
