//! Index-stable entity groups
//!
//! A `Group` is a slot map keyed by generational `Handle`s, so removing one
//! entity never invalidates the handle of another, and a stale handle never
//! aliases a newer occupant. Passes that remove while traversing iterate over
//! `handles()`, a snapshot of membership taken before the pass starts.

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Stable reference to an entity in a `Group`
    pub struct Handle;
}

#[derive(Debug, Clone)]
pub struct Group<T> {
    entities: SlotMap<Handle, T>,
}

impl<T> Default for Group<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Group<T> {
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn insert(&mut self, value: T) -> Handle {
        self.entities.insert(value)
    }

    /// Remove an entity. Returns None if the handle is stale.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        self.entities.remove(handle)
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.entities.get(handle)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.entities.get_mut(handle)
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.entities.contains_key(handle)
    }

    /// Snapshot of current membership (slot order)
    pub fn handles(&self) -> Vec<Handle> {
        self.entities.keys().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entities.values()
    }

    /// Remove every entity. Outstanding handles become stale.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}
