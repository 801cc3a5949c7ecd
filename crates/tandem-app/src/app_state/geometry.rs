//! Window geometry: keeps the sidebar and the active session view fitted to
//! the window's content area.
//!
//! A plain resize refits at once. Maximize, fullscreen, un-minimize, and
//! scale-factor changes refit on the next event-loop tick, after the
//! platform has settled the new content size.

use tandem_common::Size;
use winit::dpi::LogicalSize;
use winit::window::Window;

use tandem_webview::to_wry_rect;

use super::core::TandemApp;

// =============================================================================
// RESIZE BINDER
// =============================================================================

/// Geometry-relevant window events, reduced to what the binder needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum GeometryEvent {
    /// Content size changed. Carries the window state after the change.
    Resized { maximized: bool, fullscreen: bool },
    /// Window became visible again.
    Shown,
    /// DPI changed.
    ScaleFactorChanged,
    /// Fullscreen was toggled from the keyboard.
    FullscreenToggled,
}

/// Tracks maximize/fullscreen state and queues deferred refits.
#[derive(Debug, Default)]
pub(super) struct ResizeBinder {
    maximized: bool,
    fullscreen: bool,
    pending: bool,
}

impl ResizeBinder {
    pub(super) fn new(maximized: bool, fullscreen: bool) -> Self {
        Self {
            maximized,
            fullscreen,
            pending: false,
        }
    }

    /// Feed an event. Returns `true` when the views should be refit now;
    /// a deferred refit is queued for [`take_pending`](Self::take_pending).
    pub(super) fn observe(&mut self, event: GeometryEvent) -> bool {
        match event {
            GeometryEvent::Resized {
                maximized,
                fullscreen,
            } => {
                if maximized != self.maximized || fullscreen != self.fullscreen {
                    self.maximized = maximized;
                    self.fullscreen = fullscreen;
                    self.pending = true;
                }
                true
            }
            GeometryEvent::Shown
            | GeometryEvent::ScaleFactorChanged
            | GeometryEvent::FullscreenToggled => {
                self.pending = true;
                false
            }
        }
    }

    /// Consume the deferred refit flag.
    pub(super) fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

/// The window's content area in logical units.
pub(super) fn logical_viewport(window: &Window) -> Size {
    let size: LogicalSize<f64> = window.inner_size().to_logical(window.scale_factor());
    Size::new(size.width, size.height)
}

// =============================================================================
// VIEW FITTING
// =============================================================================

impl TandemApp {
    /// Route a geometry event through the binder, refitting now if needed.
    pub(super) fn on_geometry_event(&mut self, event: GeometryEvent) {
        if self.binder.observe(event) {
            self.fit_views();
        }
    }

    /// Run a refit queued by an earlier geometry event.
    pub(super) fn flush_deferred_resize(&mut self) {
        if self.binder.take_pending() {
            tracing::debug!("Running deferred resize");
            self.fit_views();
        }
    }

    /// Recompute the viewport and move the sidebar and active view into place.
    pub(super) fn fit_views(&mut self) {
        let Some(ref window) = self.window else {
            return;
        };
        let viewport = logical_viewport(window);

        let Some(ref mut sessions) = self.sessions else {
            return;
        };
        sessions.set_viewport(viewport);

        if let Some(ref sidebar) = self.sidebar {
            let bounds = sessions.layout().sidebar_bounds(viewport);
            if let Err(e) = sidebar.set_bounds(to_wry_rect(bounds)) {
                tracing::warn!(error = %e, "Failed to set sidebar bounds");
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
