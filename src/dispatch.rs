//! Action dispatcher: the only code that mutates auth and roster state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components turn clicks and form submits into calls on [`Dispatcher`]. Each
//! call issues one request through [`ActivitiesApi`], reconciles the response
//! into the [`ClientStore`], and hands back an [`ActionOutcome`] for the status
//! banner. Nothing is retried and nothing is applied optimistically.
//!
//! An action resolves as soon as its own response arrives. The roster refresh
//! that follows a successful action is a separate step,
//! [`Dispatcher::follow_up`], run after the outcome has been handled.
//!
//! ORDERING
//! ========
//! Requests are not queued. Roster fetches are ticketed by `RosterState` so a
//! stale roster never overwrites a newer one. Auth updates apply in arrival
//! order: the last response to land wins.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use crate::net::api::ActivitiesApi;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, MessageResponse};
use crate::state::auth::AuthSession;
use crate::state::roster::ActivityRoster;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Teacher login successful.";
pub const LOGOUT_SUCCESS_MESSAGE: &str = "Logged out.";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const SIGNUP_TRANSPORT_MESSAGE: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_TRANSPORT_MESSAGE: &str = "Failed to unregister. Please try again.";
pub const LOGIN_TRANSPORT_MESSAGE: &str = "Failed to log in. Please try again.";
pub const LOGOUT_TRANSPORT_MESSAGE: &str = "Failed to log out.";

/// Result of a user-triggered action, shown in the status banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Success(String),
    Error(String),
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }
}

/// Where the dispatcher keeps auth and roster state.
///
/// The app backs this with Leptos signals; tests back it with `RefCell`s.
pub trait ClientStore {
    fn set_auth(&self, auth: AuthSession);
    fn begin_roster_fetch(&self) -> u64;
    /// Returns false if the result was stale and discarded.
    fn apply_roster(&self, ticket: u64, roster: ActivityRoster) -> bool;
    /// Returns false if the failure was stale and discarded.
    fn fail_roster(&self, ticket: u64) -> bool;
}

#[derive(Clone, Debug)]
pub struct Dispatcher<A, S> {
    api: A,
    store: S,
}

impl<A: ActivitiesApi, S: ClientStore> Dispatcher<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Best-effort startup status check. Failures are logged and leave the
    /// session untouched.
    pub async fn refresh_auth(&self) {
        match self.api.auth_status().await {
            Ok(status) => self.store.set_auth(AuthSession::from_status(status)),
            Err(err) => log::error!("Error fetching auth status: {err}"),
        }
    }

    /// Re-fetch and replace the whole roster.
    pub async fn refresh_roster(&self) {
        let ticket = self.store.begin_roster_fetch();
        let applied = match self.api.activities().await {
            Ok(roster) => self.store.apply_roster(ticket, roster),
            Err(err) => {
                log::error!("Error fetching activities: {err}");
                self.store.fail_roster(ticket)
            }
        };
        if !applied {
            log::debug!("dropped stale roster response (ticket {ticket})");
        }
    }

    /// Re-fetch the roster after `outcome` if the action succeeded.
    pub async fn follow_up(&self, outcome: &ActionOutcome) {
        if outcome.is_success() {
            self.refresh_roster().await;
        }
    }

    pub async fn signup(&self, activity: &str, email: &str) -> ActionOutcome {
        let result = self.api.signup(activity, email).await;
        self.reconcile_membership("signing up", result, SIGNUP_TRANSPORT_MESSAGE)
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> ActionOutcome {
        let result = self.api.unregister(activity, email).await;
        self.reconcile_membership("unregistering", result, UNREGISTER_TRANSPORT_MESSAGE)
    }

    pub async fn login(&self, username: &str, password: &str) -> ActionOutcome {
        let request = LoginRequest { username: username.trim().to_owned(), password: password.to_owned() };
        match self.api.login(&request).await {
            Ok(body) => {
                self.store.set_auth(AuthSession::signed_in(body.username));
                ActionOutcome::Success(LOGIN_SUCCESS_MESSAGE.to_owned())
            }
            Err(err) => {
                if matches!(err, ApiError::Transport(_)) {
                    log::error!("Error during login: {err}");
                }
                ActionOutcome::Error(err.user_message(LOGIN_FAILED_MESSAGE, LOGIN_TRANSPORT_MESSAGE))
            }
        }
    }

    /// Sign out. Local state is cleared only once the request completed; the
    /// response body and status are not examined.
    pub async fn logout(&self) -> ActionOutcome {
        match self.api.logout().await {
            Ok(()) => {
                self.store.set_auth(AuthSession::signed_out());
                ActionOutcome::Success(LOGOUT_SUCCESS_MESSAGE.to_owned())
            }
            Err(err) => {
                log::error!("Error during logout: {err}");
                ActionOutcome::Error(LOGOUT_TRANSPORT_MESSAGE.to_owned())
            }
        }
    }

    fn reconcile_membership(
        &self,
        action: &str,
        result: Result<MessageResponse, ApiError>,
        transport_message: &str,
    ) -> ActionOutcome {
        match result {
            Ok(body) => ActionOutcome::Success(body.message),
            Err(err) => {
                log::error!("Error {action}: {err}");
                if err.is_unauthorized() {
                    self.store.set_auth(AuthSession::signed_out());
                }
                ActionOutcome::Error(err.user_message(GENERIC_ERROR_MESSAGE, transport_message))
            }
        }
    }
}
