// Copyright 2025 the Tractile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-edge containment for resizing frames.

use kurbo::{Rect, Size, Vec2};
use tractile_track::ResizeDelta;

/// Keep every edge of a resizing frame inside an outer rectangle.
///
/// Unlike drag containment, which translates the whole frame, this policy
/// clamps each edge of the *proposed* frame into `outer` independently, so a
/// resize can never place any edge outside the container — not even
/// transiently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RestrictEdges {
    /// The containing rectangle, typically the parent's frame.
    pub outer: Rect,
}

impl RestrictEdges {
    /// Containment within `outer`.
    #[must_use]
    pub fn new(outer: Rect) -> Self {
        Self { outer }
    }

    /// Clamps one resize event so the resulting frame stays inside `outer`.
    ///
    /// `current` is the element's frame before the event; the proposed frame
    /// is `current`'s origin translated by the event shift, at the requested
    /// size. Edges are clamped independently and the event is rebuilt from
    /// the clamped frame, so the returned size/shift always agree with it.
    #[must_use]
    pub fn clamp(&self, current: Rect, resize: ResizeDelta) -> ResizeDelta {
        let origin = current.origin() + resize.shift;
        let x0 = origin.x.max(self.outer.x0);
        let y0 = origin.y.max(self.outer.y0);
        let x1 = (origin.x + resize.size.width).min(self.outer.x1).max(x0);
        let y1 = (origin.y + resize.size.height).min(self.outer.y1).max(y0);

        ResizeDelta {
            size: Size::new(x1 - x0, y1 - y0),
            shift: resize.shift + Vec2::new(x0 - origin.x, y0 - origin.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTER: Rect = Rect::new(0.0, 0.0, 400.0, 200.0);

    #[test]
    fn contained_resize_passes_through() {
        let policy = RestrictEdges::new(OUTER);
        let current = Rect::new(50.0, 50.0, 150.0, 100.0);
        let resize = ResizeDelta::new(Size::new(120.0, 60.0));
        assert_eq!(policy.clamp(current, resize), resize);
    }

    #[test]
    fn right_edge_growth_stops_at_the_outer_bound() {
        let policy = RestrictEdges::new(OUTER);
        let current = Rect::new(300.0, 0.0, 380.0, 100.0);
        let clamped = policy.clamp(current, ResizeDelta::new(Size::new(150.0, 100.0)));

        assert_eq!(clamped.size.width, 100.0);
        assert_eq!(clamped.shift, Vec2::ZERO);
    }

    #[test]
    fn left_edge_growth_stops_at_the_outer_bound() {
        let policy = RestrictEdges::new(OUTER);
        let current = Rect::new(30.0, 20.0, 130.0, 70.0);
        // Pull the left edge 50 past the container's left side.
        let resize = ResizeDelta::new(Size::new(180.0, 50.0)).with_shift(Vec2::new(-80.0, 0.0));
        let clamped = policy.clamp(current, resize);

        assert_eq!(clamped.shift, Vec2::new(-30.0, 0.0));
        assert_eq!(clamped.size.width, 130.0);
        // Right edge unchanged at 130.
        assert_eq!(current.x0 + clamped.shift.x + clamped.size.width, 130.0);
    }

    #[test]
    fn clamped_frame_edges_never_leave_the_outer_rect() {
        let policy = RestrictEdges::new(OUTER);
        let current = Rect::new(10.0, 10.0, 110.0, 60.0);
        let resize =
            ResizeDelta::new(Size::new(1000.0, 1000.0)).with_shift(Vec2::new(-500.0, -500.0));
        let clamped = policy.clamp(current, resize);

        let origin = current.origin() + clamped.shift;
        let frame = Rect::from_origin_size(origin, clamped.size);
        assert!(frame.x0 >= OUTER.x0 && frame.y0 >= OUTER.y0, "min edges inside");
        assert!(frame.x1 <= OUTER.x1 && frame.y1 <= OUTER.y1, "max edges inside");
    }

    #[test]
    fn degenerate_proposal_collapses_instead_of_inverting() {
        let policy = RestrictEdges::new(OUTER);
        let current = Rect::new(390.0, 0.0, 400.0, 50.0);
        // Shift pushes the origin to the outer right bound.
        let resize = ResizeDelta::new(Size::new(5.0, 50.0)).with_shift(Vec2::new(20.0, 0.0));
        let clamped = policy.clamp(current, resize);

        assert!(clamped.size.width >= 0.0, "width must not invert");
    }
}
