//! Graceful shutdown: release session views, then the sidebar.

use super::core::TandemApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl TandemApp {
    /// Release every WebView. The session registry is left as last written,
    /// so the same accounts come back on the next launch.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(ref mut sessions) = self.sessions {
            sessions.release_all();
        }
        self.sidebar = None;
        self.sessions = None;
        self.session_titles.clear();

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app_state::core::test_app;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = test_app();
        app.shutdown();
        assert!(app.sessions.is_none());
        assert!(app.sidebar.is_none());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = test_app();
        app.shutdown();
        app.shutdown();
        assert!(app.session_titles.is_empty());
    }
}
