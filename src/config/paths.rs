//! Path management for fedcare
//!
//! ## Path Resolution Order
//!
//! Config directory:
//! 1. `FEDCARE_CONFIG_DIR` environment variable (if set)
//! 2. `$XDG_CONFIG_HOME/fedcare` or `~/.config/fedcare`
//!
//! Backup root (resolved by [`FedcarePaths::backup_root`]):
//! 1. `--root` / `FEDCARE_BACKUP_ROOT`
//! 2. `backup_root` in `config.json`
//! 3. `~/fedcare-backup`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use super::settings::Settings;
use crate::error::FedcareError;

/// Name of the default backup directory under the user's home
pub const BACKUP_DIR_NAME: &str = "fedcare-backup";

/// Manages all paths used by fedcare
#[derive(Debug, Clone)]
pub struct FedcarePaths {
    /// Directory holding `config.json`
    config_dir: PathBuf,
    /// The invoking user's home directory
    home_dir: PathBuf,
}

impl FedcarePaths {
    /// Create a new FedcarePaths instance from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FedcareError> {
        let dirs = BaseDirs::new()
            .ok_or_else(|| FedcareError::Config("Could not determine home directory".into()))?;

        let config_dir =
            resolve_config_dir(std::env::var_os("FEDCARE_CONFIG_DIR"), dirs.config_dir());

        Ok(Self {
            config_dir,
            home_dir: dirs.home_dir().to_path_buf(),
        })
    }

    /// Create FedcarePaths with explicit directories (useful for testing)
    pub fn with_dirs(config_dir: PathBuf, home_dir: PathBuf) -> Self {
        Self {
            config_dir,
            home_dir,
        }
    }

    /// Get the config directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Get the default backup root (~/fedcare-backup)
    pub fn default_backup_root(&self) -> PathBuf {
        self.home_dir.join(BACKUP_DIR_NAME)
    }

    /// Resolve the backup root from an explicit override, the settings file,
    /// or the home-relative default, in that order
    pub fn backup_root(&self, cli_override: Option<&Path>, settings: &Settings) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| settings.backup_root.clone())
            .unwrap_or_else(|| self.default_backup_root())
    }
}

/// Pick the config directory: an explicit override wins over `<base>/fedcare`
fn resolve_config_dir(custom: Option<OsString>, base_config: &Path) -> PathBuf {
    match custom {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => base_config.join("fedcare"),
    }
}
