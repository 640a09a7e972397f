//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the backup and maintenance layers.

pub mod backup;
pub mod clean;
pub mod restore;

use std::path::PathBuf;

use crate::config::Settings;
use crate::elevate::Elevator;

pub use backup::{handle_backup_command, BackupArgs};
pub use clean::{handle_clean_command, CleanArgs};
pub use restore::{handle_restore_command, RestoreArgs};

/// State every command handler needs, derived fresh per invocation
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Resolved backup root
    pub root: PathBuf,
    pub settings: Settings,
}

impl CommandContext {
    pub fn new(root: PathBuf, settings: Settings) -> Self {
        Self { root, settings }
    }

    /// Elevation wrapper configured in the settings
    pub fn elevator(&self) -> Elevator {
        Elevator::new(self.settings.elevation_command.clone())
    }
}
