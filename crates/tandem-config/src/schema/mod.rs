//! Configuration schema types for Tandem.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod session;
mod sidebar;
mod system;
mod window;

pub use session::*;
pub use sidebar::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Tandem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TandemConfig {
    pub window: WindowConfig,
    pub sidebar: SidebarConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
