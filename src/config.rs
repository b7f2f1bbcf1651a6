//! Client configuration read from the host page.
//!
//! The backend serves the page, so the defaults (same-origin API, 5 second
//! status banner) need no configuration at all. A host page can override them
//! with `data-api-base` / `data-banner-ms` attributes on `<body>`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "";
pub const DEFAULT_BANNER_DURATION_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every endpoint path, without a trailing slash.
    pub api_base: String,
    /// How long a status banner stays visible.
    pub banner_duration_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), banner_duration_ms: DEFAULT_BANNER_DURATION_MS }
    }
}

impl ClientConfig {
    /// Build config from raw attribute values; missing or invalid values fall
    /// back to defaults.
    pub fn from_raw(api_base: Option<&str>, banner_ms: Option<&str>) -> Self {
        Self { api_base: parse_api_base(api_base), banner_duration_ms: parse_banner_ms(banner_ms) }
    }

    /// Config for the running app: page attributes in the browser, defaults
    /// elsewhere.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            Self::from_document()
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    /// Read overrides from `<body data-api-base=".." data-banner-ms="..">`.
    #[cfg(feature = "csr")]
    pub fn from_document() -> Self {
        let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
        let Some(body) = body else {
            return Self::default();
        };
        let api_base = body.get_attribute("data-api-base");
        let banner_ms = body.get_attribute("data-banner-ms");
        Self::from_raw(api_base.as_deref(), banner_ms.as_deref())
    }
}

fn parse_api_base(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_owned()
}

fn parse_banner_ms(raw: Option<&str>) -> u64 {
    match raw.map(str::trim).map(str::parse::<u64>) {
        Some(Ok(ms)) if ms > 0 => ms,
        _ => DEFAULT_BANNER_DURATION_MS,
    }
}
