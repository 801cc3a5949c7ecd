use std::path::PathBuf;

use super::handlers::NavigationPolicy;

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    /// Storage partition directory. `None` shares the default context.
    pub data_directory: Option<PathBuf>,
    /// Whether the WebView starts attached.
    pub visible: bool,
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Install the `window.tandem.ipc` bridge.
    pub ipc_bridge: bool,
    pub navigation: NavigationPolicy,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            data_directory: None,
            visible: true,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            ipc_bridge: false,
            navigation: NavigationPolicy::HttpsOnly,
        }
    }
}

impl WebViewConfig {
    /// A session view: remote URL, own partition, created detached.
    pub fn session(url: impl Into<String>, data_directory: PathBuf) -> Self {
        Self {
            url: Some(url.into()),
            data_directory: Some(data_directory),
            visible: false,
            ..Default::default()
        }
    }

    /// The sidebar: inline HTML with the IPC bridge, no navigation away.
    pub fn sidebar(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ipc_bridge: true,
            navigation: NavigationPolicy::Pinned,
            ..Default::default()
        }
    }
}
