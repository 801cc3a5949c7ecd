//! TandemApp struct definition and constructor.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use winit::window::Window;

use tandem_common::SessionId;
use tandem_config::TandemConfig;
use tandem_session::SessionManager;
use tandem_webview::{WebViewHandle, WryBackend};

use super::geometry::ResizeBinder;

/// Startup choices resolved from the CLI, config, and platform paths.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Recreate the saved sessions on startup.
    pub restore: bool,
    /// Where the session registry lives.
    pub state_file: PathBuf,
    /// Parent of the per-session storage partitions.
    pub partitions_dir: PathBuf,
}

pub(super) type Sessions = SessionManager<WryBackend<Window>>;

/// Top-level application state.
pub struct TandemApp {
    pub(super) config: TandemConfig,
    pub(super) options: LaunchOptions,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Session views and the account list
    pub(super) sessions: Option<Sessions>,
    pub(super) sidebar: Option<WebViewHandle>,

    // Document titles reported by session views
    pub(super) session_titles: HashMap<SessionId, String>,

    // Maximize/fullscreen tracking and deferred refits
    pub(super) binder: ResizeBinder,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl TandemApp {
    pub fn new(config: TandemConfig, options: LaunchOptions) -> Self {
        Self {
            config,
            options,
            window: None,
            sessions: None,
            sidebar: None,
            session_titles: HashMap::new(),
            binder: ResizeBinder::default(),
            should_exit: false,
        }
    }
}

#[cfg(test)]
pub(super) fn test_app() -> TandemApp {
    TandemApp::new(
        TandemConfig::default(),
        LaunchOptions {
            restore: false,
            state_file: PathBuf::from("/nonexistent/sessions.json"),
            partitions_dir: PathBuf::from("/nonexistent/partitions"),
        },
    )
}
