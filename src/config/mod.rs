//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Chat transport credentials

pub mod credentials;
pub mod paths;
pub mod settings;

pub use credentials::BotConfig;
pub use paths::TrackerPaths;
pub use settings::Settings;
