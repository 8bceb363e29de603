// Copyright 2025 the Tractile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Containment of a dragged frame inside a bounding rectangle.

use kurbo::{Rect, Vec2};

/// Keep a dragged element's frame inside `bounds`.
///
/// With `end_only` set, the policy is checked only at the terminal event of
/// a drag: intermediate positions may transiently exit the bounds, and a
/// single corrective translation brings the frame back once the drag ends.
/// Without it, the correction applies on every move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RestrictRect {
    /// The containing rectangle, typically the parent's frame.
    pub bounds: Rect,
    /// Check only at drag end instead of on every move.
    pub end_only: bool,
}

impl RestrictRect {
    /// Containment checked on every move.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            end_only: false,
        }
    }

    /// Containment checked only at the terminal event of a drag.
    #[must_use]
    pub fn end_only(bounds: Rect) -> Self {
        Self {
            bounds,
            end_only: true,
        }
    }

    /// The minimal translation that brings `frame` fully inside the bounds.
    ///
    /// Zero when the frame is already contained. A frame larger than the
    /// bounds on an axis pins to the minimum edge of that axis.
    #[must_use]
    pub fn correction(&self, frame: Rect) -> Vec2 {
        Vec2::new(
            axis_correction(frame.x0, frame.x1, self.bounds.x0, self.bounds.x1),
            axis_correction(frame.y0, frame.y1, self.bounds.y0, self.bounds.y1),
        )
    }
}

fn axis_correction(lo: f64, hi: f64, bound_lo: f64, bound_hi: f64) -> f64 {
    if hi - lo > bound_hi - bound_lo || lo < bound_lo {
        bound_lo - lo
    } else if hi > bound_hi {
        bound_hi - hi
    } else {
        0.0
    }
}
