//! The account sidebar: an inline page talking to Rust over the IPC bridge.

use crate::manager::WebViewConfig;

/// Sidebar markup, script, and styles.
pub const SIDEBAR_HTML: &str = include_str!("../assets/sidebar.html");

/// WebView config for the sidebar.
pub fn sidebar_config(devtools: bool) -> WebViewConfig {
    let mut config = WebViewConfig::sidebar(SIDEBAR_HTML);
    config.devtools = devtools;
    config
}
