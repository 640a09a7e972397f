//! fedcare - Fedora host maintenance
//!
//! This library provides the core of the `fedcare` command-line tool:
//! configuration snapshots, restores with privilege escalation, and
//! routine cleanup.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `backup`: Snapshot writing, listing, resolution and restore
//! - `elevate`: Running copies and commands through `sudo`
//! - `maintenance`: Cache and journal cleanup
//! - `display`: Table and JSON rendering
//! - `cli`: clap argument types and command handlers
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use fedcare::backup::list_snapshots;
//! use fedcare::config::{paths::FedcarePaths, settings::Settings};
//!
//! let paths = FedcarePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let root = paths.backup_root(None, &settings);
//! for snapshot in list_snapshots(&root)? {
//!     println!("{} ({} files)", snapshot.name, snapshot.files);
//! }
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod elevate;
pub mod error;
pub mod logging;
pub mod maintenance;

pub use error::FedcareError;
