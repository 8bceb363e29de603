// Copyright 2025 the Tractile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimum/maximum size clamping for resize events.

use kurbo::Size;
use tractile_track::ResizeDelta;

/// Clamp requested sizes to a minimum and an optional maximum.
///
/// A request below the minimum clamps to exactly the minimum, never below
/// it. When the clamped dimension was being driven from the top or left edge
/// (the event carries a non-zero shift on that axis), the shift is corrected
/// as well so the anchored opposite edge stays in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RestrictSize {
    /// Smallest allowed size.
    pub min: Size,
    /// Largest allowed size, if bounded.
    pub max: Option<Size>,
}

impl RestrictSize {
    /// Clamp to at least `min`, with no upper bound.
    #[must_use]
    pub fn at_least(min: Size) -> Self {
        Self { min, max: None }
    }

    /// Builder-style upper bound.
    #[must_use]
    pub fn with_max(mut self, max: Size) -> Self {
        self.max = Some(max);
        self
    }

    /// Clamps one resize event to the configured limits.
    #[must_use]
    pub fn clamp(&self, resize: ResizeDelta) -> ResizeDelta {
        let max = self.max.unwrap_or(Size::new(f64::INFINITY, f64::INFINITY));
        let width = resize.size.width.clamp(self.min.width, max.width);
        let height = resize.size.height.clamp(self.min.height, max.height);

        // A non-zero shift on an axis means the top/left edge is the mover
        // there; absorbing the clamped-off growth into the shift keeps the
        // anchored right/bottom edge where it was.
        let mut shift = resize.shift;
        if shift.x != 0.0 {
            shift.x += resize.size.width - width;
        }
        if shift.y != 0.0 {
            shift.y += resize.size.height - height;
        }

        ResizeDelta {
            size: Size::new(width, height),
            shift,
        }
    }
}
