//! `SessionManager`: the single owner of the view pool, the active
//! selection, and the registry.
//!
//! Every mutation runs to completion on the caller's thread; the app calls it
//! from the window event loop only.

use tandem_common::{next_session_id, Rect, SessionError, SessionId, Size};
use tracing::{debug, error, info, warn};

use crate::backend::{SessionView, ViewBackend};
use crate::layout::SidebarLayout;
use crate::pool::ViewPool;
use crate::registry::SessionRegistry;

#[cfg(test)]
mod tests;

pub struct SessionManager<B: ViewBackend> {
    backend: B,
    pool: ViewPool<B::View>,
    registry: SessionRegistry,
    layout: SidebarLayout,
    viewport: Size,
    active: Option<SessionId>,
    /// Saved ids with no view yet, either because startup restore was
    /// skipped or because their view failed to build. They stay persisted
    /// and reserved until opened or removed.
    unbuilt: Vec<SessionId>,
}

impl<B: ViewBackend> SessionManager<B> {
    pub fn new(backend: B, registry: SessionRegistry, layout: SidebarLayout) -> Self {
        Self {
            backend,
            pool: ViewPool::new(),
            registry,
            layout,
            viewport: Size::default(),
            active: None,
            unbuilt: Vec::new(),
        }
    }

    // -- Queries --

    /// The attached session, if any.
    pub fn active(&self) -> Option<SessionId> {
        self.active
    }

    /// Live pool keys in creation order.
    pub fn ids(&self) -> Vec<SessionId> {
        self.pool.ids()
    }

    /// Identifiers from the persisted registry, in file order.
    pub fn list(&self) -> Vec<SessionId> {
        self.registry.list()
    }

    /// Saved ids still waiting for a view.
    pub fn unbuilt(&self) -> &[SessionId] {
        &self.unbuilt
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.pool.contains(id)
    }

    pub fn view(&self, id: SessionId) -> Option<&B::View> {
        self.pool.get(id)
    }

    pub fn views(&self) -> impl Iterator<Item = (SessionId, &B::View)> {
        self.pool.iter()
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn layout(&self) -> SidebarLayout {
        self.layout
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Where the active session view goes for the current viewport.
    pub fn session_bounds(&self) -> Rect {
        self.layout.session_bounds(self.viewport)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // -- View pool --

    /// Return the view for `id`, creating and persisting it on first use.
    pub fn get_or_create(&mut self, id: SessionId) -> Result<&B::View, SessionError> {
        self.ensure_view(id)?;
        self.pool.get(id).ok_or_else(|| SessionError::ViewOperation {
            id,
            reason: "view missing from pool after creation".into(),
        })
    }

    /// Create the view for `id` if the pool lacks one, persisting on
    /// creation. Returns whether a view was created.
    fn ensure_view(&mut self, id: SessionId) -> Result<bool, SessionError> {
        let created = self.build_view(id)?;
        if created {
            self.persist();
        }
        Ok(created)
    }

    /// Create the view for `id` if the pool lacks one, without persisting.
    fn build_view(&mut self, id: SessionId) -> Result<bool, SessionError> {
        if self.pool.contains(id) {
            return Ok(false);
        }

        let bounds = self.session_bounds();
        let view = self
            .backend
            .create_view(id, bounds)
            .map_err(|e| SessionError::ViewCreation {
                id,
                reason: e.to_string(),
            })?;
        self.pool.insert(id, view);
        self.unbuilt.retain(|pending| *pending != id);
        info!(session_id = %id, total = self.pool.len(), "session view created");
        Ok(true)
    }

    // -- Switching --

    /// Show `id`'s view (creating it if needed), hiding the previously
    /// active one, and fit it to the window.
    pub fn activate(&mut self, id: SessionId) -> Result<(), SessionError> {
        self.ensure_view(id)?;

        if let Some(previous) = self.active.filter(|prev| *prev != id) {
            if let Some(view) = self.pool.get(previous) {
                if let Err(e) = view.set_visible(false) {
                    warn!(session_id = %previous, error = %e, "failed to detach view");
                }
            }
        }

        if let Some(view) = self.pool.get(id) {
            if let Err(e) = view.set_visible(true) {
                warn!(session_id = %id, error = %e, "failed to attach view");
            }
        }

        self.active = Some(id);
        debug!(session_id = %id, "session activated");
        self.resize();
        Ok(())
    }

    /// Allocate `max(known ids) + 1` and activate it. Saved ids without a
    /// view count as known, so they are never handed out again.
    pub fn add(&mut self) -> Result<SessionId, SessionError> {
        let live = self.pool.ids();
        let id = next_session_id(live.iter().chain(&self.unbuilt))
            .ok_or(SessionError::IdsExhausted)?;
        self.activate(id)?;
        Ok(id)
    }

    // -- Geometry --

    /// Record the window's logical content size and refit the active view.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.resize();
    }

    /// Fit the active view to the area right of the sidebar. No-op when
    /// nothing is active.
    pub fn resize(&self) {
        let Some(id) = self.active else {
            return;
        };
        let Some(view) = self.pool.get(id) else {
            return;
        };

        let bounds = self.session_bounds();
        if let Err(e) = view.set_bounds(bounds) {
            warn!(session_id = %id, error = %e, "failed to set view bounds");
        }
    }

    // -- Removal --

    /// Detach, release, and forget `id`, then persist. Unknown ids are a
    /// no-op and leave the state file alone. Returns whether the session
    /// was known.
    pub fn remove(&mut self, id: SessionId) -> bool {
        let Some(view) = self.pool.remove(id) else {
            if self.unbuilt.contains(&id) {
                self.unbuilt.retain(|pending| *pending != id);
                info!(session_id = %id, "unopened session removed");
                self.persist();
                return true;
            }
            debug!(session_id = %id, "remove: no such session");
            return false;
        };

        if self.active == Some(id) {
            if let Err(e) = view.set_visible(false) {
                warn!(session_id = %id, error = %e, "failed to detach view");
            }
            self.active = None;
        }
        drop(view);
        info!(session_id = %id, total = self.pool.len(), "session view removed");

        self.persist();
        true
    }

    // -- Startup / shutdown --

    /// Recreate every persisted session (hidden) and activate the first.
    /// Sessions whose views fail to build are logged and kept as unbuilt, so
    /// the state file still lists them. Restoring never rewrites the file.
    pub fn restore(&mut self) -> Option<SessionId> {
        let saved = self.registry.list();
        if saved.is_empty() {
            return None;
        }

        self.unbuilt = saved.clone();
        for id in &saved {
            if let Err(e) = self.build_view(*id) {
                error!(session_id = %id, error = %e, "failed to restore session");
            }
        }
        self.unbuilt.retain(|id| !self.pool.contains(*id));

        let first = saved.into_iter().find(|id| self.pool.contains(*id))?;
        match self.activate(first) {
            Ok(()) => {
                info!(session_id = %first, total = self.pool.len(), "sessions restored");
                Some(first)
            }
            Err(e) => {
                error!(session_id = %first, error = %e, "failed to activate restored session");
                None
            }
        }
    }

    /// Adopt the saved sessions without building any view. Each one is
    /// created when first activated.
    pub fn defer_restore(&mut self) -> usize {
        let live = self.pool.ids();
        self.unbuilt = self
            .registry
            .list()
            .into_iter()
            .filter(|id| !live.contains(id))
            .collect();
        debug!(count = self.unbuilt.len(), "saved sessions deferred");
        self.unbuilt.len()
    }

    /// Drop every view without touching the registry, so the saved set
    /// survives quitting.
    pub fn release_all(&mut self) {
        self.active = None;
        let released = self.pool.drain();
        debug!(count = released.len(), "releasing all session views");
    }

    /// Live ids in pool order, then the unbuilt ones.
    fn known_ids(&self) -> Vec<SessionId> {
        let mut ids = self.pool.ids();
        ids.extend(self.unbuilt.iter().filter(|id| !self.pool.contains(**id)));
        ids
    }

    fn persist(&self) {
        if let Err(e) = self.registry.save(&self.known_ids()) {
            error!(error = %e, "failed to persist session registry");
        }
    }
}
