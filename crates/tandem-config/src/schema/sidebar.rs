use serde::{Deserialize, Serialize};

/// Width reserved on the left edge for the account list.
pub const DEFAULT_SIDEBAR_WIDTH: u32 = 120;

/// Sidebar settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Logical pixels (valid range: 48-400).
    pub width: u32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIDEBAR_WIDTH,
        }
    }
}
