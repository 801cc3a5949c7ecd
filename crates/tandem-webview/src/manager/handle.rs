use wry::{WebContext, WebView};

use crate::events::ViewKey;

/// Handle to a managed WebView. Dropping it destroys the WebView.
pub struct WebViewHandle {
    /// The underlying wry WebView. Declared before `_context` so it is
    /// dropped first.
    pub(super) webview: WebView,
    /// Storage context backing the WebView's partition. Held only to keep
    /// it alive as long as the WebView.
    pub(super) _context: Option<WebContext>,
    pub(super) key: ViewKey,
}

impl WebViewHandle {
    pub fn key(&self) -> ViewKey {
        self.key
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Show or hide the WebView.
    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    /// Focus the WebView.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }
}

impl Drop for WebViewHandle {
    fn drop(&mut self) {
        tracing::debug!(view = %self.key, "WebView released");
    }
}
