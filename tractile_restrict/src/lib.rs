// Copyright 2025 the Tractile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tractile Restrict: declarative constraint policies for drag and resize.
//!
//! Interaction libraries let host pages declare constraints — "stay inside
//! the parent", "never smaller than 100×50", "keep every edge inside the
//! container" — and apply them to raw pointer geometry before the position
//! fold sees it. This crate expresses those policies as pure geometry over
//! [`kurbo`] types so the fold in `tractile_track` stays untouched:
//!
//! - [`RestrictRect`]: keep a dragged frame inside bounds, optionally
//!   checked only at drag end.
//! - [`RestrictSize`]: clamp a resize to minimum (and optionally maximum)
//!   dimensions, keeping the anchored edge in place when a top/left resize
//!   is clamped.
//! - [`RestrictEdges`]: keep every edge of a resizing frame inside an outer
//!   rectangle at all times.
//! - [`RestrictionSet`]: an ordered list of the above, applied in insertion
//!   order the way a host page stacks its modifier array.
//! - [`Edges`]: which edges of an element may be resized.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Rect, Size, Vec2};
//! use tractile_restrict::{RestrictSize, RestrictionSet};
//! use tractile_track::ResizeDelta;
//!
//! let restrictions = RestrictionSet::new().with(RestrictSize::at_least(Size::new(100.0, 50.0)));
//!
//! // A resize down to 30×40 clamps to exactly the minimum.
//! let frame = Rect::new(0.0, 0.0, 120.0, 60.0);
//! let clamped = restrictions.clamp_resize(frame, ResizeDelta::new(Size::new(30.0, 40.0)));
//! assert_eq!(clamped.size, Size::new(100.0, 50.0));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod edges;
pub mod outer;
pub mod rect;
pub mod size;

pub use edges::Edges;
pub use outer::RestrictEdges;
pub use rect::RestrictRect;
pub use size::RestrictSize;

use kurbo::{Rect, Vec2};
use smallvec::SmallVec;
use tractile_track::ResizeDelta;

/// One constraint policy, as a host page would list it in a modifier array.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Restriction {
    /// Containment of a dragged frame inside bounds.
    Rect(RestrictRect),
    /// Minimum/maximum size clamping.
    Size(RestrictSize),
    /// Per-edge containment during resize.
    Edges(RestrictEdges),
}

impl From<RestrictRect> for Restriction {
    fn from(r: RestrictRect) -> Self {
        Self::Rect(r)
    }
}

impl From<RestrictSize> for Restriction {
    fn from(r: RestrictSize) -> Self {
        Self::Size(r)
    }
}

impl From<RestrictEdges> for Restriction {
    fn from(r: RestrictEdges) -> Self {
        Self::Edges(r)
    }
}

/// Ordered set of constraint policies.
///
/// Policies apply in insertion order, mirroring how host pages stack their
/// modifier arrays. Resize events flow through [`RestrictionSet::clamp_resize`]
/// before they reach the position fold; drag positions are corrected by
/// [`RestrictionSet::move_correction`] during the drag and
/// [`RestrictionSet::end_correction`] once at the terminal event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RestrictionSet {
    items: SmallVec<[Restriction; 4]>,
}

impl RestrictionSet {
    /// Creates an empty set, which constrains nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    #[must_use]
    pub fn with(mut self, restriction: impl Into<Restriction>) -> Self {
        self.push(restriction);
        self
    }

    /// Appends a policy; it will apply after the ones already present.
    pub fn push(&mut self, restriction: impl Into<Restriction>) {
        self.items.push(restriction.into());
    }

    /// Number of policies in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the set constrains nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clamps one resize event before it is folded into the placement.
    ///
    /// `current` is the element's frame before this event. Size and edge
    /// policies apply in insertion order; rect containment policies concern
    /// dragging and are skipped here.
    #[must_use]
    pub fn clamp_resize(&self, current: Rect, resize: ResizeDelta) -> ResizeDelta {
        self.items.iter().fold(resize, |resize, item| match item {
            Restriction::Size(limit) => limit.clamp(resize),
            Restriction::Edges(outer) => outer.clamp(current, resize),
            Restriction::Rect(_) => resize,
        })
    }

    /// Corrective translation for a dragged frame while the drag is live.
    ///
    /// Only rect policies without the end-only flag contribute; end-only
    /// containment deliberately lets intermediate positions exit the bounds.
    #[must_use]
    pub fn move_correction(&self, frame: Rect) -> Vec2 {
        self.rect_correction(frame, false)
    }

    /// Corrective translation for a dragged frame at the terminal event.
    ///
    /// Every rect policy contributes, end-only or not.
    #[must_use]
    pub fn end_correction(&self, frame: Rect) -> Vec2 {
        self.rect_correction(frame, true)
    }

    fn rect_correction(&self, frame: Rect, at_end: bool) -> Vec2 {
        let mut frame = frame;
        let mut total = Vec2::ZERO;
        for item in &self.items {
            if let Restriction::Rect(bounds) = item
                && (at_end || !bounds.end_only)
            {
                let correction = bounds.correction(frame);
                frame = frame + correction;
                total += correction;
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    #[test]
    fn empty_set_constrains_nothing() {
        let set = RestrictionSet::new();
        let frame = Rect::new(-50.0, -50.0, 10.0, 10.0);
        let resize = ResizeDelta::new(Size::new(1.0, 1.0));

        assert!(set.is_empty());
        assert_eq!(set.clamp_resize(frame, resize), resize);
        assert_eq!(set.move_correction(frame), Vec2::ZERO);
        assert_eq!(set.end_correction(frame), Vec2::ZERO);
    }

    #[test]
    fn end_only_containment_skips_moves_and_corrects_at_end() {
        let parent = Rect::new(0.0, 0.0, 500.0, 300.0);
        let set = RestrictionSet::new().with(RestrictRect::end_only(parent));

        // Mid-drag the frame has transiently left the parent.
        let frame = Rect::new(-20.0, 10.0, 80.0, 60.0);
        assert_eq!(set.move_correction(frame), Vec2::ZERO);
        assert_eq!(set.end_correction(frame), Vec2::new(20.0, 0.0));
    }

    #[test]
    fn live_containment_corrects_during_moves() {
        let parent = Rect::new(0.0, 0.0, 500.0, 300.0);
        let set = RestrictionSet::new().with(RestrictRect::new(parent));

        let frame = Rect::new(450.0, 280.0, 550.0, 330.0);
        assert_eq!(set.move_correction(frame), Vec2::new(-50.0, -30.0));
    }

    #[test]
    fn policies_apply_in_insertion_order() {
        let outer = Rect::new(0.0, 0.0, 200.0, 200.0);
        let set = RestrictionSet::new()
            .with(RestrictEdges::new(outer))
            .with(RestrictSize::at_least(Size::new(50.0, 20.0)));

        // Proposal overshoots the outer rect; the edge clamp shrinks it, and
        // the size clamp still guarantees the minimum.
        let frame = Rect::new(150.0, 150.0, 190.0, 190.0);
        let clamped = set.clamp_resize(frame, ResizeDelta::new(Size::new(120.0, 10.0)));

        assert_eq!(clamped.size.width, 50.0);
        assert_eq!(clamped.size.height, 20.0);
    }

    #[test]
    fn stacked_rect_corrections_accumulate() {
        let wide = Rect::new(0.0, 0.0, 400.0, 400.0);
        let narrow = Rect::new(100.0, 0.0, 400.0, 400.0);
        let set = RestrictionSet::new()
            .with(RestrictRect::new(wide))
            .with(RestrictRect::new(narrow));

        let frame = Rect::new(-40.0, 10.0, 60.0, 110.0);
        // First policy moves the frame to x0 = 0, second to x0 = 100.
        assert_eq!(set.end_correction(frame), Vec2::new(140.0, 0.0));
    }
}
