//! Configuration module for fedcare
//!
//! This module provides configuration management including:
//! - Config directory and backup root resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FedcarePaths;
pub use settings::Settings;
