#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://wger.de/api/v2";
pub const BASE_URL_ENV: &str = "WGER_API_URL";
pub const TOKEN_ENV: &str = "WGER_TOKEN";

/// Connection settings shared by every request. Built once, never mutated.
///
/// Neither field is validated: an empty token is sent as `Token `, and a
/// malformed base URL only surfaces as a transport error on first use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Read `WGER_API_URL` and `WGER_TOKEN` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] against an arbitrary variable source.
    /// Unset and empty values both fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let token = lookup(TOKEN_ENV).unwrap_or_default();

        Self { base_url, token }
    }

    pub fn from_provider<C: ConfigProvider + ?Sized>(provider: &C) -> Self {
        Self::new(provider.base_url(), provider.token())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: String::new(),
        }
    }
}

impl ConfigProvider for ClientConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn token(&self) -> &str {
        &self.token
    }
}
