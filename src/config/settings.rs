use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::clock::DEFAULT_UTC_OFFSET_MINUTES;
use crate::errors::{PwdManagerError, Result};
use crate::generator;

/// User-level configuration, loaded from `pwdmanager.toml` in the
/// application directory.
///
/// Every field has a sensible default so pwdmanager works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// File name of the database inside the application directory.
    #[serde(default = "default_db_file_name")]
    pub db_file_name: String,

    /// Explicit database location, overriding the application directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// Offset from UTC, in minutes, for "Last Updated" timestamps (default: IST).
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,

    /// Length suggested when generating a password.
    #[serde(default = "default_password_length")]
    pub default_password_length: usize,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_db_file_name() -> String {
    "passwords.db".to_string()
}

fn default_utc_offset_minutes() -> i32 {
    DEFAULT_UTC_OFFSET_MINUTES
}

fn default_password_length() -> usize {
    16
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_file_name: default_db_file_name(),
            db_path: None,
            utc_offset_minutes: default_utc_offset_minutes(),
            default_password_length: default_password_length(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the application directory.
    pub const FILE_NAME: &'static str = "pwdmanager.toml";

    /// Load settings from `<app_dir>/pwdmanager.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed or holds out-of-range
    /// values, an error is returned.
    pub fn load(app_dir: &Path) -> Result<Self> {
        let config_path = app_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PwdManagerError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;
        settings.validate()?;

        tracing::debug!(path = %config_path.display(), "loaded settings");
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.db_file_name.trim().is_empty() {
            return Err(PwdManagerError::ConfigError(
                "db_file_name cannot be empty".into(),
            ));
        }
        generator::validate_length(self.default_password_length)
            .map_err(|e| PwdManagerError::ConfigError(format!("default_password_length: {e}")))?;
        self.utc_offset()?;
        Ok(())
    }

    /// Build the full path to the database inside `app_dir`, unless an
    /// explicit `db_path` is configured.
    ///
    /// Example: `~/.local/share/pwdmanager/passwords.db`
    pub fn db_path_in(&self, app_dir: &Path) -> PathBuf {
        match &self.db_path {
            Some(path) => path.clone(),
            None => app_dir.join(&self.db_file_name),
        }
    }

    /// The configured UTC offset as a chrono offset.
    pub fn utc_offset(&self) -> Result<chrono::FixedOffset> {
        crate::clock::offset_from_minutes(self.utc_offset_minutes)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
