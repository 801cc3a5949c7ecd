//! Window geometry: a fixed-width sidebar on the left, the active session
//! filling the rest.

use tandem_common::{Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarLayout {
    sidebar_width: f64,
}

impl SidebarLayout {
    pub fn new(sidebar_width: f64) -> Self {
        Self {
            sidebar_width: sidebar_width.max(0.0),
        }
    }

    pub fn sidebar_width(&self) -> f64 {
        self.sidebar_width
    }

    /// Bounds of the sidebar view: full height, anchored at the left edge.
    pub fn sidebar_bounds(&self, content: Size) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.sidebar_width.min(content.width.max(0.0)),
            content.height.max(0.0),
        )
    }

    /// Bounds of the active session view: starts at the sidebar's right edge
    /// and takes the remaining width and full height.
    pub fn session_bounds(&self, content: Size) -> Rect {
        Rect::new(
            self.sidebar_width,
            0.0,
            (content.width - self.sidebar_width).max(0.0),
            content.height.max(0.0),
        )
    }
}
