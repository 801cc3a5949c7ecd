//! `wry` implementation of the session view backend.

use std::path::PathBuf;
use std::sync::Arc;

use tandem_common::{Rect, SessionId};
use tandem_session::{SessionView, ViewBackend};
use wry::raw_window_handle;

use crate::events::{ViewKey, WebViewEvent};
use crate::manager::{WebViewConfig, WebViewHandle, WebViewManager};

/// Convert a logical `Rect` to a wry `Rect`.
pub fn to_wry_rect(rect: Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

/// What every session view is built from.
#[derive(Debug, Clone)]
pub struct SessionTemplate {
    pub url: String,
    pub user_agent: String,
    pub devtools: bool,
    /// Parent of the per-session partition directories.
    pub partitions_dir: PathBuf,
}

impl SessionTemplate {
    fn config_for(&self, id: SessionId) -> WebViewConfig {
        let mut config = WebViewConfig::session(
            self.url.clone(),
            self.partitions_dir.join(id.partition_name()),
        );
        config.user_agent = Some(self.user_agent.clone());
        config.devtools = self.devtools;
        config
    }
}

/// Builds session WebViews as children of one window.
pub struct WryBackend<W> {
    window: Arc<W>,
    manager: WebViewManager,
    template: SessionTemplate,
}

impl<W: raw_window_handle::HasWindowHandle> WryBackend<W> {
    pub fn new(window: Arc<W>, manager: WebViewManager, template: SessionTemplate) -> Self {
        Self {
            window,
            manager,
            template,
        }
    }

    /// Build a non-session WebView (the sidebar) on the same window and
    /// event queue.
    pub fn create_aux(
        &self,
        key: ViewKey,
        bounds: Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        self.manager
            .create(key, self.window.as_ref(), to_wry_rect(bounds), config)
    }

    /// Drain events from every WebView this backend built.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }
}

impl<W: raw_window_handle::HasWindowHandle> ViewBackend for WryBackend<W> {
    type View = WebViewHandle;
    type Error = wry::Error;

    fn create_view(&mut self, id: SessionId, bounds: Rect) -> Result<WebViewHandle, wry::Error> {
        let config = self.template.config_for(id);
        self.manager.create(
            ViewKey::Session(id),
            self.window.as_ref(),
            to_wry_rect(bounds),
            config,
        )
    }
}

impl SessionView for WebViewHandle {
    type Error = wry::Error;

    fn set_bounds(&self, bounds: Rect) -> Result<(), wry::Error> {
        WebViewHandle::set_bounds(self, to_wry_rect(bounds))
    }

    fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        WebViewHandle::set_visible(self, visible)?;
        if visible {
            self.focus()?;
        }
        Ok(())
    }
}
