//! # Configuration Management
//!
//! This module provides configuration management for the Sheets proxy
//! service. Configuration is stored in Cloudflare KV storage and loaded at
//! runtime with defaults for all settings, so a fresh deployment works
//! without any KV writes.
//!
//! ## Configuration Sources
//!
//! 1. **KV Storage**: Primary configuration source stored under the "config" key
//! 2. **Defaults**: Fallback values when KV storage is unavailable or empty
//!
//! ## Configuration Options
//!
//! - `default_read_range`: A1 range applied when a read request omits `range`
//! - `sheets_api_base`: Base URL for spreadsheet value operations
//! - `token_url`: OAuth2 token endpoint for the JWT-bearer exchange
//!
//! The endpoint overrides exist for integration testing against a stub
//! upstream; production deployments leave them at the Google defaults.

use crate::constants::{DEFAULT_READ_RANGE, SHEETS_API_BASE_URL, TOKEN_URL};
use serde::{Deserialize, Serialize};
use worker::kv::KvStore;
use worker::{console_log, Result};

/// Configuration structure for the Sheets proxy service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// A1 range used when the read endpoint is called without a `range`
    /// query parameter.
    #[serde(default = "default_read_range")]
    pub default_read_range: String,

    /// Base URL for the Sheets values API.
    #[serde(default = "default_sheets_api_base")]
    pub sheets_api_base: String,

    /// OAuth2 token endpoint used by the gateway.
    #[serde(default = "default_token_url")]
    pub token_url: String,
}

fn default_read_range() -> String {
    DEFAULT_READ_RANGE.to_string()
}

fn default_sheets_api_base() -> String {
    SHEETS_API_BASE_URL.to_string()
}

fn default_token_url() -> String {
    TOKEN_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_read_range: default_read_range(),
            sheets_api_base: default_sheets_api_base(),
            token_url: default_token_url(),
        }
    }
}

impl Config {
    /// Loads configuration from KV storage with fallback to defaults.
    ///
    /// Attempts to load the "config" key from the bound KV namespace. A
    /// missing key falls back to [`Config::default`]; a KV access error is
    /// propagated up.
    pub async fn load(kv: &KvStore) -> Result<Self> {
        match kv.get("config").json().await? {
            Some(config) => {
                console_log!("Configuration loaded from KV storage");
                Ok(config)
            }
            None => {
                console_log!("Config not found in KV, using default");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_google_endpoints() {
        let config = Config::default();
        assert_eq!(config.sheets_api_base, SHEETS_API_BASE_URL);
        assert_eq!(config.token_url, TOKEN_URL);
        assert_eq!(config.default_read_range, "CSdata!A1:H");
    }

    #[test]
    fn partial_kv_payload_fills_missing_fields() {
        let config: Config = serde_json::from_str(r#"{"default_read_range":"Log!A1:C"}"#).unwrap();
        assert_eq!(config.default_read_range, "Log!A1:C");
        assert_eq!(config.sheets_api_base, SHEETS_API_BASE_URL);
        assert_eq!(config.token_url, TOKEN_URL);
    }
}
