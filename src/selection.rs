use std::collections::BTreeSet;

/// The user's chosen course ids. Stored ordered so every read-out (and the
/// encoded link derived from it) is deterministic regardless of toggle order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<i64>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership for `id`; returns the new membership state. Toggling
    /// twice restores the set exactly.
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Wholesale replacement (link hydration). The previous contents are
    /// discarded, not merged.
    pub fn replace_all<I: IntoIterator<Item = i64>>(&mut self, ids: I) {
        self.ids = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ascending order.
    pub fn ids(&self) -> Vec<i64> {
        self.ids.iter().copied().collect()
    }
}
