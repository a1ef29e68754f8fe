//! # Client configuration
//!
//! Where the REST backend lives. The browser bundle has no runtime environment,
//! so the base URL is fixed at build time:
//!
//! 1. `PORTFOLIO_API_URL` at compile time, if set;
//! 2. otherwise [`DEFAULT_BASE_URL`].
//!
//! Native builds and tests can also parse a TOML document:
//!
//! ```toml
//! [api]
//! base_url = "https://example.com/api"
//! ```

use serde::{Deserialize, Serialize};

/// Backend location used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Settings for [`crate::ApiClient`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Absolute URL every request path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    option_env!("PORTFOLIO_API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    api: ClientConfig,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Parse from a TOML document with an `[api]` table.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<ConfigFile>(s).map(|file| file.api)
    }

    /// Join a request path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let config = ClientConfig::new("http://localhost:8080/api/");
        assert_eq!(
            config.url("/public/projects"),
            "http://localhost:8080/api/public/projects"
        );
        assert_eq!(
            config.url("auth/login"),
            "http://localhost:8080/api/auth/login"
        );
    }

    #[test]
    fn test_from_toml() {
        let config = ClientConfig::from_toml("[api]\nbase_url = \"https://example.com/api\"\n").unwrap();
        assert_eq!(config.base_url, "https://example.com/api");

        // Missing table falls back to the default
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
