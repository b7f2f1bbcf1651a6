//! REST API client for the activities backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): `HttpApi` returns a transport error for
//! every call since there is no browser `fetch` to drive.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. A 2xx body that fails to
//! decode is a transport failure; a non-2xx response becomes `ApiError::Status`
//! with the server's string `detail` when it sent one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuthStatusResponse, ErrorBody, LoginRequest, LoginResponse, MessageResponse};
use crate::config::ClientConfig;
use crate::state::roster::ActivityRoster;

/// Backend operations the dispatcher depends on.
///
/// Implemented by [`HttpApi`] in the browser and by in-memory fakes in tests.
#[allow(async_fn_in_trait)]
pub trait ActivitiesApi {
    async fn auth_status(&self) -> Result<AuthStatusResponse, ApiError>;
    async fn activities(&self) -> Result<ActivityRoster, ApiError>;
    async fn signup(&self, activity: &str, email: &str) -> Result<MessageResponse, ApiError>;
    async fn unregister(&self, activity: &str, email: &str) -> Result<MessageResponse, ApiError>;
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
    /// Resolves `Ok` for any completed response; the body is not examined.
    async fn logout(&self) -> Result<(), ApiError>;
}

const URI_COMPONENT_SAFE: &[u8] = b"-_.!~*'()";
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode a path segment or query value like `encodeURIComponent`.
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || URI_COMPONENT_SAFE.contains(&byte) {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX_UPPER[usize::from(byte >> 4)]));
            out.push(char::from(HEX_UPPER[usize::from(byte & 0x0f)]));
        }
    }
    out
}

pub fn auth_status_endpoint(base: &str) -> String {
    format!("{base}/auth/status")
}

pub fn activities_endpoint(base: &str) -> String {
    format!("{base}/activities")
}

pub fn login_endpoint(base: &str) -> String {
    format!("{base}/auth/login")
}

pub fn logout_endpoint(base: &str) -> String {
    format!("{base}/auth/logout")
}

pub fn signup_endpoint(base: &str, activity: &str, email: &str) -> String {
    membership_endpoint(base, activity, "signup", email)
}

pub fn unregister_endpoint(base: &str, activity: &str, email: &str) -> String {
    membership_endpoint(base, activity, "unregister", email)
}

fn membership_endpoint(base: &str, activity: &str, action: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/{action}?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

/// HTTP implementation of [`ActivitiesApi`] rooted at the configured base.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { base: config.api_base.clone() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

#[cfg(feature = "csr")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if (200..300).contains(&status) {
        return resp.json::<T>().await.map_err(ApiError::transport);
    }
    Err(status_error(status, resp.json::<ErrorBody>().await))
}

/// Error for a non-2xx response. A body that isn't a JSON error object
/// leaves the detail empty.
pub fn status_error<E: std::fmt::Display>(status: u16, body: Result<ErrorBody, E>) -> ApiError {
    let detail = match body {
        Ok(body) => body.detail_text(),
        Err(err) => {
            log::debug!("status {status} response has no readable error body: {err}");
            None
        }
    };
    ApiError::Status { status, detail }
}

#[cfg(not(feature = "csr"))]
fn unavailable<T>() -> Result<T, ApiError> {
    Err(ApiError::Transport("not available outside the browser".to_owned()))
}

impl ActivitiesApi for HttpApi {
    async fn auth_status(&self) -> Result<AuthStatusResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&auth_status_endpoint(&self.base))
                .send()
                .await
                .map_err(ApiError::transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            unavailable()
        }
    }

    async fn activities(&self) -> Result<ActivityRoster, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&activities_endpoint(&self.base))
                .send()
                .await
                .map_err(ApiError::transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            unavailable()
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    async fn signup(&self, activity: &str, email: &str) -> Result<MessageResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&signup_endpoint(&self.base, activity, email))
                .send()
                .await
                .map_err(ApiError::transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            unavailable()
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    async fn unregister(&self, activity: &str, email: &str) -> Result<MessageResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::delete(&unregister_endpoint(&self.base, activity, email))
                .send()
                .await
                .map_err(ApiError::transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            unavailable()
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&login_endpoint(&self.base))
                .json(request)
                .map_err(ApiError::transport)?
                .send()
                .await
                .map_err(ApiError::transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            unavailable()
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            gloo_net::http::Request::post(&logout_endpoint(&self.base))
                .send()
                .await
                .map_err(ApiError::transport)?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            unavailable()
        }
    }
}
