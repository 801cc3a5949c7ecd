//! Window title management: names the active session.

use tandem_common::SessionId;

use super::core::TandemApp;

// =============================================================================
// WINDOW TITLE
// =============================================================================

/// Format: "{base}", "{base} - Account {id}", or
/// "{base} - Account {id} - {page title}".
pub(super) fn format_title(base: &str, active: Option<SessionId>, page: Option<&str>) -> String {
    let Some(id) = active else {
        return base.to_string();
    };
    match page.map(str::trim).filter(|t| !t.is_empty()) {
        Some(page) => format!("{base} - Account {id} - {page}"),
        None => format!("{base} - Account {id}"),
    }
}

impl TandemApp {
    /// Update the window title to reflect the active session.
    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };

        let active = self.sessions.as_ref().and_then(|s| s.active());
        let page = active
            .and_then(|id| self.session_titles.get(&id))
            .map(String::as_str);

        window.set_title(&format_title(&self.config.window.title, active, page));
    }
}

// =============================================================================
// TESTS
// =============================================================================
