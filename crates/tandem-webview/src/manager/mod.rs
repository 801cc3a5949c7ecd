//! WebView lifecycle management.
//!
//! `WebViewManager` creates `wry::WebView` children of the main window and
//! collects their events into one queue for the event loop to drain.

use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use handlers::NavigationPolicy;
pub use types::WebViewConfig;

/// Creates WebViews and owns the shared event sink.
pub struct WebViewManager {
    /// Event sink: handlers push here, the main event loop drains.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events, oldest first.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
