//! # Dashboard configuration — `dashboard.toml`
//!
//! Where the users come from and how the table pages through them. The web
//! build runs on the defaults; the desktop build reads the file from the user's
//! config directory when one exists.
//!
//! ## Structure
//!
//! ```toml
//! [source]
//! base_url = "https://dummyjson.com"
//! timeout_secs = 30        # native builds only, 0 = client default
//!
//! [table]
//! page_size = 20
//! total_users = 208
//! initial_page = "1"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DashboardConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`SourceConfig`] | Remote API base URL and request timeout. |
//! | [`TableConfig`] | Page size, the fixed total the pager is sized from, and the starting page token. |
//!
//! Every section and field has a default, so a missing or empty file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::page::INITIAL_PAGE_TOKEN;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dashboard config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialise dashboard config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid dashboard config: {0}")]
    Invalid(String),
}

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub table: TableConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. 0 leaves the HTTP client's default.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://dummyjson.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_total_users")]
    pub total_users: u32,
    #[serde(default = "default_initial_page")]
    pub initial_page: String,
}

fn default_page_size() -> u32 {
    20
}

fn default_total_users() -> u32 {
    208
}

fn default_initial_page() -> String {
    INITIAL_PAGE_TOKEN.to_string()
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            total_users: default_total_users(),
            initial_page: default_initial_page(),
        }
    }
}

impl DashboardConfig {
    /// Builder method to point at another API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.source.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the table cannot page with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table.page_size == 0 {
            return Err(ConfigError::Invalid("table.page_size must be at least 1".into()));
        }
        Ok(())
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
