//! Desk configuration
//!
//! Loaded from a TOML file with `PROPDESK_*` environment overrides.

use crate::error::Result;
use serde::Deserialize;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub company: CompanyConfig,
}

/// Prop-firm API settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Company identity used in outbound notifications
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyConfig {
    #[serde(default = "default_company_name")]
    pub name: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_company_name() -> String {
    "Propdesk Funding".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: default_company_name(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, overridable via `PROPDESK_*`
    /// environment variables (e.g. `PROPDESK_API__BASE_URL`).
    /// A missing file falls back to defaults.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("PROPDESK").separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
