//! Auth-session state for the signed-in teacher, if any.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the presenter to gate removal controls and the signup form; written
//! only by the dispatcher after status, login, logout, or a 401.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AuthStatusResponse;

/// Client-side belief about whether an operator is signed in.
///
/// `username` is non-empty exactly when `is_authenticated` is true; the
/// constructors are the only way to build a value with other fields set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSession {
    is_authenticated: bool,
    username: String,
}

impl AuthSession {
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Signed-in session for `username`; an empty name yields signed out.
    pub fn signed_in(username: impl Into<String>) -> Self {
        let username = username.into();
        if username.is_empty() {
            return Self::signed_out();
        }
        Self { is_authenticated: true, username }
    }

    pub fn from_status(status: AuthStatusResponse) -> Self {
        if !status.is_authenticated {
            return Self::signed_out();
        }
        Self::signed_in(status.username.unwrap_or_default())
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
