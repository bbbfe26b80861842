//! Settings file I/O

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::settings as settings_config;
use crate::error::OktaError;

/// Non-secret settings remembered between runs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(rename = "orgUrl", skip_serializing_if = "Option::is_none")]
    pub org_url: Option<String>,
    #[serde(rename = "clientId", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

/// Handles reading and writing the settings file
pub struct SettingsStore {
    path: PathBuf,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore {
    /// Create a store using the default path (~/.oktactl/settings.json)
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Create a store with a custom path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(settings_config::DIR_NAME)
            .join(settings_config::FILE_NAME)
    }

    /// Load settings from disk.
    /// Returns Default if file doesn't exist, errors on corrupt JSON.
    pub fn load(&self) -> Result<Settings, OktaError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            OktaError::Config(format!(
                "Failed to read settings {}: {}",
                self.path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            OktaError::Config(format!(
                "Failed to parse settings {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Save settings to disk (tmp file + rename, 0600 on Unix)
    pub fn save(&self, settings: &Settings) -> Result<(), OktaError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                OktaError::Config(format!(
                    "Failed to create settings directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| OktaError::Config(format!("Failed to serialize settings: {}", e)))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).map_err(|e| {
            OktaError::Config(format!(
                "Failed to write temp settings file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, permissions).map_err(|e| {
                OktaError::Config(format!("Failed to set permissions on settings file: {}", e))
            })?;
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            OktaError::Config(format!(
                "Failed to rename temp settings file to {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }
}
