//! Configuration module for repasse-cli
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Backend connection settings persistence

pub mod paths;
pub mod settings;

pub use paths::RepassePaths;
pub use settings::Settings;
