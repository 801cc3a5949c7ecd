//! Recording in-memory backend for lifecycle tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tandem_common::{Rect, SessionId};

use crate::backend::{SessionView, ViewBackend};

/// Ids of views dropped so far, shared between backend and views.
pub type ReleaseLog = Rc<RefCell<Vec<SessionId>>>;

pub struct FakeView {
    pub id: SessionId,
    pub visible: Cell<bool>,
    pub bounds: Cell<Rect>,
    released: ReleaseLog,
}

impl SessionView for FakeView {
    type Error = String;

    fn set_bounds(&self, bounds: Rect) -> Result<(), String> {
        self.bounds.set(bounds);
        Ok(())
    }

    fn set_visible(&self, visible: bool) -> Result<(), String> {
        self.visible.set(visible);
        Ok(())
    }
}

impl Drop for FakeView {
    fn drop(&mut self) {
        self.released.borrow_mut().push(self.id);
    }
}

#[derive(Default)]
pub struct FakeBackend {
    pub created: Vec<SessionId>,
    pub released: ReleaseLog,
    /// Creating a view for this id fails.
    pub fail_for: Option<SessionId>,
}

impl ViewBackend for FakeBackend {
    type View = FakeView;
    type Error = String;

    fn create_view(&mut self, id: SessionId, bounds: Rect) -> Result<FakeView, String> {
        if self.fail_for == Some(id) {
            return Err("display unavailable".into());
        }
        self.created.push(id);
        Ok(FakeView {
            id,
            visible: Cell::new(false),
            bounds: Cell::new(bounds),
            released: Rc::clone(&self.released),
        })
    }
}
