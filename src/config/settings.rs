//! User settings for fedcare
//!
//! Settings live in `config.json` inside the config directory. Every field
//! has a default, so a missing or partial file is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::FedcarePaths;
use crate::error::FedcareError;

/// Configuration files captured by `fedcare backup` unless overridden
pub const DEFAULT_TARGETS: &[&str] = &[
    "/etc/fstab",
    "/etc/hosts",
    "/etc/dnf/dnf.conf",
    "/etc/ssh/sshd_config",
    "/etc/default/grub",
    "/etc/NetworkManager/",
];

/// User settings for fedcare
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Backup root override; `~/fedcare-backup` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_root: Option<PathBuf>,

    /// Absolute paths captured by each snapshot
    #[serde(default = "default_targets")]
    pub targets: Vec<PathBuf>,

    /// Wrapper used when a restore or cleanup needs root
    #[serde(default = "default_elevation_command")]
    pub elevation_command: String,

    /// Default tracing filter when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_targets() -> Vec<PathBuf> {
    DEFAULT_TARGETS.iter().map(PathBuf::from).collect()
}

fn default_elevation_command() -> String {
    "sudo".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backup_root: None,
            targets: default_targets(),
            elevation_command: default_elevation_command(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &FedcarePaths) -> Result<Self, FedcareError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FedcareError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FedcareError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Targets must be absolute so they can be mirrored under a snapshot
    pub fn validate(&self) -> Result<(), FedcareError> {
        if let Some(target) = self.targets.iter().find(|t| !t.is_absolute()) {
            return Err(FedcareError::Config(format!(
                "Backup target must be an absolute path: {}",
                target.display()
            )));
        }
        if self.elevation_command.trim().is_empty() {
            return Err(FedcareError::Config(
                "elevation_command must not be empty".into(),
            ));
        }
        Ok(())
    }
}
