use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, WgerError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// File form of the client settings:
///
/// ```toml
/// [api]
/// base_url = "https://wger.de/api/v2"
/// token = "${WGER_TOKEN}"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub token: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
        }
    }
}

fn env_placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex"))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading client config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content, |name| std::env::var(name).ok());

        toml::from_str(&processed).map_err(|e| WgerError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${NAME}` with the variable's value. Unknown names stay as written.
    fn substitute_env_vars<F>(content: &str, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        env_placeholder()
            .replace_all(content, |caps: &regex::Captures| {
                let name = &caps[1];
                lookup(name).unwrap_or_else(|| format!("${{{}}}", name))
            })
            .into_owned()
    }

    pub fn into_client_config(self) -> ClientConfig {
        ClientConfig::new(self.api.base_url, self.api.token)
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.api.base_url
    }

    fn token(&self) -> &str {
        &self.api.token
    }
}
