//! # Client configuration: `client.toml`
//!
//! Settings the browser client needs before it can talk to the backend. On
//! native builds the file lives in the application data directory (filename:
//! [`ClientConfig::filename`] = `"client.toml"`); web builds start from the
//! defaults and take overrides at compile time.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"   # origin of the events REST API
//!
//! [ui]
//! redirect_delay_ms = 1500             # pause before leaving the edit form
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. Builder helpers (`with_base_url`, `with_redirect_delay`), TOML (de)serialisation, canonical filename. |
//! | [`ApiConfig`] | Backend section: the API `base_url`. |
//! | [`UiConfig`] | View behaviour: `redirect_delay_ms`, default **1500 ms**. |
//!
//! Every struct derives or implements `Default`, so a missing or partial file
//! is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`ApiConfig::base_url`].
pub const BASE_URL_ENV: &str = "EVENTS_API_URL";

/// Top-level configuration stored in `client.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin the `/api/...` paths are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// View behaviour settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Delay before navigating away after an edit is saved (or found unchanged).
    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_ms: u64,
}

fn default_redirect_delay() -> u64 {
    1500
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            redirect_delay_ms: default_redirect_delay(),
        }
    }
}

impl ClientConfig {
    /// Builder method to set the API origin. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder method to set the redirect delay.
    pub fn with_redirect_delay(mut self, ms: u64) -> Self {
        self.ui.redirect_delay_ms = ms;
        self
    }

    /// Apply an optional base URL override (compile-time or environment).
    /// Blank values are ignored.
    pub fn with_base_url_override(self, url: Option<&str>) -> Self {
        match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(u) => self.with_base_url(u),
            None => self,
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "client.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
