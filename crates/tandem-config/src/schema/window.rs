//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window startup mode.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StartupMode {
    #[default]
    Windowed,
    Maximized,
    Fullscreen,
}

/// Main window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Base window title. The active session is appended at runtime.
    pub title: String,
    /// Initial logical width (valid range: 400-7680).
    pub width: u32,
    /// Initial logical height (valid range: 300-4320).
    pub height: u32,
    pub startup_mode: StartupMode,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tandem".into(),
            width: 1200,
            height: 800,
            startup_mode: StartupMode::Windowed,
        }
    }
}
