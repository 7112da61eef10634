//! Configuration Module
//!
//! Client configuration loaded from environment variables.

mod settings;

pub use settings::{ClientConfig, ConfigError};
