//! Paging configuration
//!
//! Four required options: the paging API key, the account subdomain, and
//! one on-call service key per triggering severity. Validation runs once
//! at startup so a misconfigured plugin never half-operates.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Paging service configuration
///
/// All four keys are required and must be non-empty; call
/// [`PagerConfig::validate`] before handing the config to the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PagerConfig {
    /// Paging service API key
    pub api_key: String,
    /// Paging service account subdomain
    pub subdomain: String,
    /// On-call service key for warning-severity events
    pub warning_service_key: String,
    /// On-call service key for failure-severity events
    pub failure_service_key: String,
}

impl PagerConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let contents =
            fs::read_to_string(path.as_ref()).map_err(|_| ConfigError::FileNotFound(path_str))?;

        let config: Self = toml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self).map_err(ConfigError::from)?;

        fs::write(path.as_ref(), contents)?;

        Ok(())
    }

    /// Build from the host daemon's flat string-keyed option map
    ///
    /// Unknown keys are ignored; missing keys surface through
    /// [`PagerConfig::validate`].
    pub fn from_map(options: &HashMap<String, String>) -> Self {
        let get = |key: &str| options.get(key).cloned().unwrap_or_default();

        Self {
            api_key: get("api_key"),
            subdomain: get("subdomain"),
            warning_service_key: get("warning_service_key"),
            failure_service_key: get("failure_service_key"),
        }
    }

    /// Get default configuration path
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("pagerlink").join("pager.toml")
        } else {
            PathBuf::from("pager.toml")
        }
    }

    /// Ensure every required option is present and non-empty
    ///
    /// Fails on the first missing key, naming it.
    pub fn validate(&self) -> Result<()> {
        let required: [(&'static str, &str); 4] = [
            ("api_key", &self.api_key),
            ("subdomain", &self.subdomain),
            ("warning_service_key", &self.warning_service_key),
            ("failure_service_key", &self.failure_service_key),
        ];

        for (name, value) in required {
            if value.is_empty() {
                log::error!("Required configuration key {} missing!", name);
                return Err(ConfigError::MissingKey(name).into());
            }
        }

        Ok(())
    }
}
