//! The seam between session bookkeeping and the host windowing toolkit.

use std::fmt;

use tandem_common::{Rect, SessionId};

/// One embedded browser surface rendering a session.
///
/// Dropping the view releases its underlying resources.
pub trait SessionView {
    type Error: fmt::Display;

    /// Position the view inside the parent window (logical coordinates).
    fn set_bounds(&self, bounds: Rect) -> Result<(), Self::Error>;

    /// Attach (`true`) or detach (`false`) the view from the window.
    fn set_visible(&self, visible: bool) -> Result<(), Self::Error>;
}

/// Factory for isolated session views.
pub trait ViewBackend {
    type View: SessionView;
    type Error: fmt::Display;

    /// Build a detached view for `id`, bound to that session's storage
    /// partition and pointed at the session URL.
    fn create_view(&mut self, id: SessionId, bounds: Rect) -> Result<Self::View, Self::Error>;
}
