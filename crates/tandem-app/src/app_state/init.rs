//! Window creation, session manager setup, and the sidebar WebView.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Window, WindowAttributes};

use tandem_config::schema::{StartupMode, WindowConfig};
use tandem_session::{SessionManager, SessionRegistry, SidebarLayout};
use tandem_webview::sidebar::sidebar_config;
use tandem_webview::{SessionTemplate, ViewKey, WebViewManager, WryBackend};

use super::core::{Sessions, TandemApp};
use super::geometry::{logical_viewport, ResizeBinder};

// =============================================================================
// INITIALIZATION
// =============================================================================

/// Window attributes for the configured size and startup mode.
fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let attrs = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.width as f64,
            config.height as f64,
        ));

    match config.startup_mode {
        StartupMode::Windowed => attrs,
        StartupMode::Maximized => attrs.with_maximized(true),
        StartupMode::Fullscreen => attrs.with_fullscreen(Some(Fullscreen::Borderless(None))),
    }
}

impl TandemApp {
    /// Create the window, the session manager, and the sidebar, then restore
    /// saved sessions. Returns `false` if initialization failed and the event
    /// loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window = match event_loop.create_window(window_attributes(&self.config.window)) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let mut sessions = self.build_session_manager(&window);
        let viewport = logical_viewport(&window);
        sessions.set_viewport(viewport);

        let sidebar_bounds = sessions.layout().sidebar_bounds(viewport);
        let sidebar = match sessions.backend().create_aux(
            ViewKey::Sidebar,
            sidebar_bounds,
            sidebar_config(self.config.session.devtools),
        ) {
            Ok(handle) => handle,
            Err(e) => {
                tracing::error!("Failed to create sidebar: {e}");
                return false;
            }
        };

        if self.options.restore {
            match sessions.restore() {
                Some(id) => tracing::info!(session_id = %id, "Restored saved sessions"),
                None => tracing::info!("No saved sessions to restore"),
            }
        } else {
            let count = sessions.defer_restore();
            tracing::info!(count, "Saved sessions will open on demand");
        }

        self.binder = ResizeBinder::new(window.is_maximized(), window.fullscreen().is_some());
        self.sidebar = Some(sidebar);
        self.sessions = Some(sessions);
        self.window = Some(window);

        tracing::info!(
            "Window created ({}x{} logical, sidebar {}px)",
            viewport.width,
            viewport.height,
            self.config.sidebar.width
        );
        true
    }

    fn build_session_manager(&self, window: &Arc<Window>) -> Sessions {
        let template = SessionTemplate {
            url: self.config.session.url.clone(),
            user_agent: self.config.session.user_agent.clone(),
            devtools: self.config.session.devtools,
            partitions_dir: self.options.partitions_dir.clone(),
        };
        let backend = WryBackend::new(Arc::clone(window), WebViewManager::new(), template);
        let registry = SessionRegistry::new(self.options.state_file.clone());
        let layout = SidebarLayout::new(self.config.sidebar.width as f64);

        SessionManager::new(backend, registry, layout)
    }
}

// =============================================================================
// TESTS
// =============================================================================
