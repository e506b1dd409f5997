//! # Client Configuration
//!
//! Configuration for the REST client.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                           │
//! │                                                                     │
//! │  1. Environment Variables (highest priority)                        │
//! │     CHAMP_API_URL=https://pos.example.com/api                       │
//! │     CHAMP_API_TIMEOUT_SECS=10                                       │
//! │     CHAMP_API_TOKEN=eyJ...                                          │
//! │                                                                     │
//! │  2. TOML Config File                                                │
//! │     ~/.config/champ-pos/client.toml (Linux)                         │
//! │     ~/Library/Application Support/com.champ.pos/client.toml (macOS) │
//! │                                                                     │
//! │  3. Default Values (lowest priority)                                │
//! │     http://localhost:5000/api, 30s timeout, no token                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # client.toml
//! base_url = "https://pos.example.com/api"
//! timeout_secs = 10
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Default backend location for development setups.
const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Transport-level request timeout. There is no application-level timeout
/// on top of this; a stalled submission holds its screen until the
/// transport resolves or errors.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`crate::ApiClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Transport timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Bearer token for authenticated sessions, attached to every request.
    #[serde(default)]
    pub auth_token: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            auth_token: None,
        }
    }
}

impl ApiConfig {
    /// Loads configuration: defaults, overlaid by the TOML file when one
    /// exists, overlaid by environment variables.
    ///
    /// A missing file is normal; an unreadable or malformed file is
    /// logged and skipped rather than failing startup.
    pub fn load() -> Self {
        let mut config = match Self::config_file_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => ApiConfig::default(),
        };
        config.apply_env();
        debug!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "API config loaded");
        config
    }

    /// Reads the TOML config file, falling back to defaults on any error.
    fn from_file(path: &PathBuf) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => config,
                Err(err) => {
                    warn!(?path, %err, "Ignoring malformed config file");
                    ApiConfig::default()
                }
            },
            Err(err) => {
                warn!(?path, %err, "Ignoring unreadable config file");
                ApiConfig::default()
            }
        }
    }

    /// Applies environment variable overrides.
    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("CHAMP_API_URL") {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
        if let Ok(raw) = std::env::var("CHAMP_API_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout_secs = secs,
                _ => warn!(%raw, "Ignoring invalid CHAMP_API_TIMEOUT_SECS"),
            }
        }
        if let Ok(token) = std::env::var("CHAMP_API_TOKEN") {
            if !token.trim().is_empty() {
                self.auth_token = Some(token);
            }
        }
    }

    /// Platform config file location (`client.toml` under the app's
    /// config directory).
    fn config_file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "champ", "champ-pos")
            .map(|dirs| dirs.config_dir().join("client.toml"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
