// Copyright 2025 the Tractile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed placement store: fold events for many independent elements.

use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Vec2;

use crate::placement::{Placement, ResizeDelta};

/// Placement store keyed by an application-chosen element handle.
///
/// One [`Placement`] per tracked element, with no shared state between
/// elements: folding an event for one key never observes or disturbs
/// another. Keys are opaque to the tracker; use whatever identifies elements
/// in the host (node ids, indices, interned names).
///
/// Elements do not need registration. The first event for an unknown key
/// folds from the zero-origin default, mirroring how absent stored position
/// attributes read as `0` rather than being an error.
///
/// All updates are synchronous on the caller's thread; events for one
/// element are serialized simply by the order the caller delivers them.
#[derive(Clone, Debug)]
pub struct Tracker<K> {
    placements: HashMap<K, Placement>,
}

impl<K> Default for Tracker<K> {
    fn default() -> Self {
        Self {
            placements: HashMap::new(),
        }
    }
}

impl<K> Tracker<K> {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements with stored placements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns `true` if no element has a stored placement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Drops all stored placements.
    pub fn clear(&mut self) {
        self.placements.clear();
    }
}

impl<K: Eq + Hash> Tracker<K> {
    /// Folds one move event into the placement stored under `key`.
    ///
    /// Missing entries start from the zero origin. Returns the new
    /// placement, which is also what remains stored.
    pub fn apply_move(&mut self, key: K, delta: Vec2) -> Placement {
        let slot = self.placements.entry(key).or_default();
        *slot = slot.moved_by(delta);
        *slot
    }

    /// Folds one resize event into the placement stored under `key`.
    ///
    /// Missing entries start from the zero origin. Returns the new
    /// placement.
    pub fn apply_resize(&mut self, key: K, resize: ResizeDelta) -> Placement {
        let slot = self.placements.entry(key).or_default();
        *slot = slot.resized(resize);
        *slot
    }

    /// The stored placement for `key`, or the zero-origin default when the
    /// element has never produced an event.
    #[must_use]
    pub fn placement(&self, key: &K) -> Placement {
        self.placements.get(key).copied().unwrap_or_default()
    }

    /// The stored placement for `key`, if any event has been folded for it.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&Placement> {
        self.placements.get(key)
    }

    /// Removes and returns the stored placement for `key`.
    pub fn remove(&mut self, key: &K) -> Option<Placement> {
        self.placements.remove(key)
    }
}
