//! Settings with persistence.
//!
//! The settings file is stored at:
//! - Linux: `~/.config/cardano-link/config.json`
//! - macOS: `~/Library/Application Support/cardano-link/config.json`
//! - Windows: `%APPDATA%/cardano-link/config.json`
//!
//! # Example
//!
//! ```ignore
//! use cardano_link::config::Settings;
//!
//! let mut settings = Settings::load();
//! settings.network = NetworkType::Testnet;
//! settings.save()?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::http::DEFAULT_TIMEOUT_SECS;
use crate::domain::{ExplorerProvider, NetworkType, non_blank};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
const APP_NAME: &str = "cardano-link";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// Backend Configuration
// ============================================================================

/// Endpoint and credentials for the chain-indexing backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendConfig {
    /// Blockfrost project id. Required unless `base_url` points at a
    /// self-hosted, unauthenticated instance.
    #[serde(default)]
    pub project_id: Option<String>,
    /// Overrides the network's default API base URL.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    /// Non-blank project id, if configured.
    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        non_blank(self.project_id.as_deref())
    }

    /// Base URL to use for `network`.
    #[must_use]
    pub fn base_url_for(&self, network: NetworkType) -> &str {
        non_blank(self.base_url.as_deref()).unwrap_or(network.blockfrost_url())
    }

    /// Whether a non-blank base URL override is set.
    #[must_use]
    pub fn has_custom_base_url(&self) -> bool {
        non_blank(self.base_url.as_deref()).is_some()
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Persisted settings: which network to talk to, which explorer to link,
/// and how to reach the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub network: NetworkType,
    #[serde(default)]
    pub explorer: ExplorerProvider,
    #[serde(default)]
    pub backend: BackendConfig,
}

impl Settings {
    /// Returns the path to the configuration file, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the settings from disk, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(settings) => settings,
            Err(err) => {
                tracing::debug!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the settings from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the file cannot be
    /// read, or its JSON cannot be parsed.
    pub fn try_load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Like [`try_load`](Self::try_load), but a missing file yields the
    /// defaults. Used before editing and saving the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, or the file exists
    /// but cannot be read or parsed.
    pub fn try_load_or_default() -> Result<Self> {
        Self::load_from_or_default(&Self::config_path()?)
    }

    /// Loads settings from an explicit file, using the defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Loads settings from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Saves the settings to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot
    /// be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves settings to an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
