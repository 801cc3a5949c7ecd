//! Embedded session settings.

use serde::{Deserialize, Serialize};

/// Remote web client loaded into every session view.
pub const DEFAULT_SESSION_URL: &str = "https://web.whatsapp.com";

/// Desktop Chrome user agent. The web client refuses unknown embedders.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// How session views are built and restored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// URL every session view navigates to. Must be `https://`.
    pub url: String,
    pub user_agent: String,
    /// Recreate persisted sessions at startup and show the first one.
    pub restore_on_startup: bool,
    /// Enable webview devtools.
    pub devtools: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SESSION_URL.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            restore_on_startup: true,
            devtools: cfg!(debug_assertions),
        }
    }
}
