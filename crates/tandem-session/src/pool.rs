use tandem_common::SessionId;

/// Identifier-to-view mapping that remembers insertion order.
///
/// Insertion order is the order persisted to the registry and shown in the
/// sidebar.
pub struct ViewPool<V> {
    entries: Vec<(SessionId, V)>,
}

impl<V> ViewPool<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: SessionId) -> Option<&V> {
        self.position(id).map(|i| &self.entries[i].1)
    }

    /// Register a view. An existing entry for `id` keeps its position and
    /// gets the new view; the old one is returned.
    pub fn insert(&mut self, id: SessionId, view: V) -> Option<V> {
        match self.position(id) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, view)),
            None => {
                self.entries.push((id, view));
                None
            }
        }
    }

    pub fn remove(&mut self, id: SessionId) -> Option<V> {
        self.position(id).map(|i| self.entries.remove(i).1)
    }

    /// Keys in insertion order.
    pub fn ids(&self) -> Vec<SessionId> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SessionId, &V)> {
        self.entries.iter().map(|(id, v)| (*id, v))
    }

    /// Remove every entry, handing the views back in insertion order.
    pub fn drain(&mut self) -> Vec<(SessionId, V)> {
        std::mem::take(&mut self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: SessionId) -> Option<usize> {
        self.entries.iter().position(|(key, _)| *key == id)
    }
}

impl<V> Default for ViewPool<V> {
    fn default() -> Self {
        Self::new()
    }
}
