// Copyright 2025 the Tractile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tractile Surface: a configurable drag/resize surface.
//!
//! A [`Surface`] tracks any number of elements, each with its own
//! [`ElementConfig`] describing what it can do (drag, resize from which
//! edges), which constraint policies apply, and which presentation extras it
//! carries (a drag-distance caption, a mirrored display coordinate for an
//! auxiliary widget). Variations of the same page that differ only in those
//! extras become different configurations of one surface instead of
//! divergent copies of the wiring.
//!
//! The surface is a pure callback target for an external interaction
//! library: the host forwards each [`PointerEvent`] for an element and
//! applies the returned [`Update`] to its visuals. The only ordering the
//! surface assumes is that an interaction's moves precede its terminal end
//! event; each event is otherwise folded independently, so there is no
//! interaction state machine to desynchronize. All processing is
//! synchronous on the calling thread.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use tractile_surface::{ElementConfig, PointerEvent, Surface};
//!
//! let mut surface = Surface::new();
//! surface.insert(
//!     "note",
//!     ElementConfig::at(Rect::new(0.0, 0.0, 100.0, 50.0)).with_caption(),
//! );
//!
//! let update = surface
//!     .handle(&"note", PointerEvent::Move(Vec2::new(3.0, 4.0)))
//!     .unwrap();
//! assert_eq!(update.placement.offset, Vec2::new(3.0, 4.0));
//!
//! let update = surface
//!     .handle(
//!         &"note",
//!         PointerEvent::End {
//!             start: Point::new(10.0, 10.0),
//!             end: Point::new(13.0, 14.0),
//!         },
//!     )
//!     .unwrap();
//! assert_eq!(update.caption.as_deref(), Some("moved a distance of 5.00px"));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod export;

use alloc::string::String;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Affine, Point, Rect, Size, Vec2};
use tractile_restrict::{Edges, RestrictionSet};
use tractile_track::{DragSummary, Placement, ResizeDelta, Tracker, label::size_label};

/// Per-element configuration: capabilities, constraints, and presentation
/// extras.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementConfig {
    /// The element's initial layout frame, before any translation.
    pub home: Rect,
    /// Whether the element responds to move events.
    pub draggable: bool,
    /// Which edges may resize the element; `None` means not resizable.
    pub resize_edges: Option<Edges>,
    /// Constraint policies, applied in insertion order.
    pub restrictions: RestrictionSet,
    /// Produce a drag-distance caption on the terminal event.
    pub caption: bool,
    /// Maintain a mirrored display coordinate for an auxiliary widget.
    pub mirror: bool,
}

impl ElementConfig {
    /// A draggable element with the given initial layout frame and no
    /// constraints or extras.
    #[must_use]
    pub fn at(home: Rect) -> Self {
        Self {
            home,
            draggable: true,
            ..Self::default()
        }
    }

    /// Makes the element resizable from the given edges.
    #[must_use]
    pub fn resizable(mut self, edges: Edges) -> Self {
        self.resize_edges = Some(edges);
        self
    }

    /// Attaches constraint policies.
    #[must_use]
    pub fn with_restrictions(mut self, restrictions: RestrictionSet) -> Self {
        self.restrictions = restrictions;
        self
    }

    /// Enables the drag-distance caption.
    #[must_use]
    pub fn with_caption(mut self) -> Self {
        self.caption = true;
        self
    }

    /// Enables the mirrored display coordinate.
    #[must_use]
    pub fn with_mirror(mut self) -> Self {
        self.mirror = true;
        self
    }
}

/// One event from the external interaction library, already scoped to an
/// element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Incremental pointer displacement during a drag.
    Move(Vec2),
    /// Requested size and origin correction during a resize.
    Resize(ResizeDelta),
    /// Terminal event of an interaction, carrying the pointer's page
    /// coordinates at start and end.
    End {
        /// Pointer position when the interaction began.
        start: Point,
        /// Pointer position when the interaction ended.
        end: Point,
    },
}

/// The state a host applies to its visuals after one event.
///
/// The surface never touches the host's rendering; it reports the new
/// placement, the translation transform, the size override if any, and the
/// presentation strings the element's configuration asked for. String fields
/// are `None` when the event or configuration does not produce them — a host
/// with no caption element simply has nothing to update.
#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    /// The element's placement after the event.
    pub placement: Placement,
    /// Translation to apply to the element's visual.
    pub transform: Affine,
    /// Size override to apply, once the element has been resized.
    pub size: Option<Size>,
    /// `"W×H"` caption, present on resize events.
    pub size_label: Option<String>,
    /// Drag-distance caption, present on the terminal event when configured.
    pub caption: Option<String>,
    /// Display coordinate for an auxiliary widget, when configured;
    /// recomputed on every event and never persisted.
    pub mirror: Option<Point>,
}

/// A set of tracked elements and their interaction wiring.
#[derive(Clone, Debug)]
pub struct Surface<K> {
    tracker: Tracker<K>,
    elements: HashMap<K, ElementConfig>,
}

impl<K> Default for Surface<K> {
    fn default() -> Self {
        Self {
            tracker: Tracker::new(),
            elements: HashMap::new(),
        }
    }
}

impl<K> Surface<K> {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when no element is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<K: Eq + Hash + Clone> Surface<K> {
    /// Registers an element. Re-registering a key replaces its configuration
    /// but keeps any placement already accumulated.
    pub fn insert(&mut self, key: K, config: ElementConfig) {
        self.elements.insert(key, config);
    }

    /// Unregisters an element and forgets its placement.
    pub fn remove(&mut self, key: &K) -> Option<ElementConfig> {
        self.tracker.remove(key);
        self.elements.remove(key)
    }

    /// The configuration registered for `key`.
    #[must_use]
    pub fn config(&self, key: &K) -> Option<&ElementConfig> {
        self.elements.get(key)
    }

    /// The accumulated placement for `key` (zero origin if untouched).
    #[must_use]
    pub fn placement(&self, key: &K) -> Placement {
        self.tracker.placement(key)
    }

    /// The current frame for `key`, if the element is registered.
    #[must_use]
    pub fn frame(&self, key: &K) -> Option<Rect> {
        let config = self.elements.get(key)?;
        Some(self.tracker.placement(key).frame(config.home))
    }

    /// Folds one event for `key` and returns the state to apply.
    ///
    /// Returns `None` for unknown keys and for events the element's
    /// configuration does not accept (moves on a non-draggable element,
    /// resizes on a non-resizable one).
    pub fn handle(&mut self, key: &K, event: PointerEvent) -> Option<Update> {
        let config = self.elements.get(key)?;
        match event {
            PointerEvent::Move(delta) => {
                if !config.draggable {
                    return None;
                }
                let mut placement = self.tracker.apply_move(key.clone(), delta);
                let correction = config.restrictions.move_correction(placement.frame(config.home));
                if correction != Vec2::ZERO {
                    placement = self.tracker.apply_move(key.clone(), correction);
                }
                Some(build_update(config, placement, None, None))
            }
            PointerEvent::Resize(resize) => {
                let edges = config.resize_edges?;
                // The interaction library should not report origin shifts
                // for edges the element does not resize from; drop any that
                // arrive anyway.
                let mut resize = resize;
                if !edges.contains(Edges::LEFT) {
                    resize.shift.x = 0.0;
                }
                if !edges.contains(Edges::TOP) {
                    resize.shift.y = 0.0;
                }

                let current = self.tracker.placement(key).frame(config.home);
                let clamped = config.restrictions.clamp_resize(current, resize);
                let placement = self.tracker.apply_resize(key.clone(), clamped);
                let label = size_label(clamped.size);
                Some(build_update(config, placement, Some(label), None))
            }
            PointerEvent::End { start, end } => {
                let mut placement = self.tracker.placement(key);
                let correction = config.restrictions.end_correction(placement.frame(config.home));
                if correction != Vec2::ZERO {
                    placement = self.tracker.apply_move(key.clone(), correction);
                }
                let caption = config
                    .caption
                    .then(|| DragSummary { start, end }.label());
                Some(build_update(config, placement, None, caption))
            }
        }
    }
}

fn build_update(
    config: &ElementConfig,
    placement: Placement,
    size_label: Option<String>,
    caption: Option<String>,
) -> Update {
    Update {
        transform: placement.transform(),
        size: placement.size,
        size_label,
        caption,
        mirror: config.mirror.then(|| config.home.origin() + placement.offset),
        placement,
    }
}
