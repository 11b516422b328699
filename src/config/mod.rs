//! Configuration module for VerziBiz
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::VerziPaths;
pub use settings::Settings;
