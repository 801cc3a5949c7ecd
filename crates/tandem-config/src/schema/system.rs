//! Logging settings.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// The `tracing` directive for this level, scoped to Tandem crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "tandem=trace",
            LogLevel::Debug => "tandem=debug",
            LogLevel::Info => "tandem=info",
            LogLevel::Warning => "tandem=warn",
            LogLevel::Error => "tandem=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_uppercase() {
        let config: LoggingConfig = toml::from_str(r#"level = "DEBUG""#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.level.directive(), "tandem=debug");
    }

    #[test]
    fn warning_maps_to_warn_directive() {
        assert_eq!(LogLevel::Warning.directive(), "tandem=warn");
    }
}
