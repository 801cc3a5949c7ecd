//! Tandem configuration system.
//!
//! TOML-based configuration with validation. Every section uses serde
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tandem_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("sidebar is {}px wide", config.sidebar.width);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{TandemConfig, CONFIG_SCHEMA_VERSION};

use tandem_common::ConfigError;

/// Load config from the platform default path.
///
/// Creates a commented default `config.toml` if none exists, then validates
/// the result.
pub fn load_config() -> Result<TandemConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TandemConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
