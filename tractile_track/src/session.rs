// Copyright 2025 the Tractile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-interaction pointer bookkeeping and the drag-distance summary.
//!
//! Interaction libraries usually hand the tracker ready-made `{dx, dy}`
//! deltas. When the host only has absolute pointer positions, a
//! [`DragSession`] derives the deltas: construct one at pointer-down, feed
//! it each position, and finish it at pointer-up to obtain a
//! [`DragSummary`] for the end-of-drag caption.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use tractile_track::DragSession;
//!
//! let mut session = DragSession::begin(Point::new(10.0, 20.0));
//!
//! let delta = session.move_to(Point::new(15.0, 25.0));
//! assert_eq!(delta, Vec2::new(5.0, 5.0));
//!
//! let summary = session.finish(Point::new(13.0, 24.0));
//! assert_eq!(summary.distance(), 5.0);
//! assert_eq!(summary.label(), "moved a distance of 5.00px");
//! ```

use alloc::string::String;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`
use kurbo::{Point, Vec2};

use crate::label::distance_label;

/// An in-flight drag, tracking the start and most recent pointer positions.
///
/// One session per interaction: construct at pointer-down, drop (via
/// [`DragSession::finish`]) at pointer-up. There is no idle state to reset,
/// so a session can never report a delta for an interaction that has not
/// started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    start: Point,
    last: Point,
}

impl DragSession {
    /// Starts a session at the pointer-down position.
    #[must_use]
    pub fn begin(start: Point) -> Self {
        Self { start, last: start }
    }

    /// The position where the session began.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Advances to a new pointer position, returning the delta since the
    /// previous one.
    ///
    /// A non-finite position yields a zero delta and does not advance the
    /// session.
    pub fn move_to(&mut self, pos: Point) -> Vec2 {
        if !pos.is_finite() {
            return Vec2::ZERO;
        }
        let delta = pos - self.last;
        self.last = pos;
        delta
    }

    /// Total displacement from the start position to the last one seen.
    #[must_use]
    pub fn travel(&self) -> Vec2 {
        self.last - self.start
    }

    /// Ends the session at the pointer-up position.
    #[must_use]
    pub fn finish(self, end: Point) -> DragSummary {
        DragSummary {
            start: self.start,
            end,
        }
    }
}

/// A completed drag: the pointer's page coordinates at start and end.
///
/// Interaction libraries that deliver start/end coordinates on their
/// terminal event can construct this directly, without a [`DragSession`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSummary {
    /// Pointer position at drag start.
    pub start: Point,
    /// Pointer position at drag end.
    pub end: Point,
}

impl DragSummary {
    /// Euclidean distance between the start and end positions.
    #[must_use]
    pub fn distance(&self) -> f64 {
        (self.end - self.start).hypot()
    }

    /// Distance with the squared-distance sum truncated to an integer before
    /// the square root. A NaN sum truncates to zero.
    ///
    /// Only for callers that must reproduce captions from hosts that apply
    /// integer truncation to the squared sum; prefer
    /// [`DragSummary::distance`], which keeps the fractional component.
    #[must_use]
    pub fn distance_truncated(&self) -> f64 {
        let d = self.end - self.start;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the integer truncation is the documented behavior"
        )]
        let squared = (d.x * d.x + d.y * d.y) as i64;
        (squared as f64).sqrt()
    }

    /// Caption text for the drag, e.g. `"moved a distance of 5.00px"`.
    #[must_use]
    pub fn label(&self) -> String {
        distance_label(self.distance())
    }
}
