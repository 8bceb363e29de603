// Copyright 2025 the Tractile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisted element placement and the pure fold steps that advance it.

use kurbo::{Affine, Rect, Size, Vec2};

/// Accumulated placement of one tracked element.
///
/// `offset` is the signed translation, in pixels, from the element's initial
/// layout position. `size` is present only once the element has been
/// resized; `None` means the element keeps its initial layout size.
///
/// ## Semantics
///
/// - The offset advances by accumulation only: each move event adds its
///   delta to the stored value ([`Placement::moved_by`]).
/// - The offset is never re-derived from a layout query. Layout reports the
///   untransformed position, so re-reading it after a translation has been
///   applied would double-count that translation.
/// - A missing placement is not an error; [`Placement::default`] is the
///   well-defined zero origin every fold starts from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    /// Accumulated translation from the initial layout position.
    pub offset: Vec2,
    /// Size override, set once the element has been resized.
    pub size: Option<Size>,
}

impl Placement {
    /// Placement of an element that has never been moved or resized.
    pub const ZERO: Self = Self {
        offset: Vec2::ZERO,
        size: None,
    };

    /// Folds one move event into the placement.
    ///
    /// Returns the placement translated by `delta`. A non-finite delta is
    /// ignored and the placement is returned unchanged.
    #[must_use]
    pub fn moved_by(self, delta: Vec2) -> Self {
        if !delta.is_finite() {
            return self;
        }
        Self {
            offset: self.offset + delta,
            size: self.size,
        }
    }

    /// Folds one resize event into the placement.
    ///
    /// The requested size replaces any previous override, and the origin
    /// shift is accumulated into the offset. The shift is non-zero only when
    /// the resize moved the top or left edge; resizing from the right or
    /// bottom leaves the offset untouched, so repeating an identical
    /// zero-shift resize is idempotent. Non-finite input is ignored.
    #[must_use]
    pub fn resized(self, resize: ResizeDelta) -> Self {
        if !resize.is_finite() {
            return self;
        }
        Self {
            offset: self.offset + resize.shift,
            size: Some(resize.size),
        }
    }

    /// The visual transform the host should apply: a pure translation by the
    /// accumulated offset.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset)
    }

    /// Current bounding box, given the element's initial layout frame.
    ///
    /// The frame origin is `home`'s origin translated by the accumulated
    /// offset; the size is the override if one is set, otherwise `home`'s.
    #[must_use]
    pub fn frame(&self, home: Rect) -> Rect {
        let size = self.size.unwrap_or_else(|| home.size());
        Rect::from_origin_size(home.origin() + self.offset, size)
    }
}

/// One resize event: the requested size plus the origin correction needed
/// when the top or left edge is the moving one.
///
/// Resizing from the right or bottom edge grows the element in place, so the
/// shift is zero. Pulling the left edge outward must simultaneously
/// translate the element left by the growth, which is what `shift` carries
/// (the interaction library's `deltaRect.left`/`deltaRect.top` pair).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResizeDelta {
    /// Requested element size.
    pub size: Size,
    /// Origin correction for top/left edge resizes.
    pub shift: Vec2,
}

impl ResizeDelta {
    /// A resize to `size` anchored at the origin (no edge correction).
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            shift: Vec2::ZERO,
        }
    }

    /// Builder-style origin correction for top/left edge resizes.
    #[must_use]
    pub fn with_shift(mut self, shift: Vec2) -> Self {
        self.shift = shift;
        self
    }

    /// Returns `true` when every field is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.size.is_finite() && self.shift.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn default_is_zero_origin_without_size() {
        let placement = Placement::default();
        assert_eq!(placement, Placement::ZERO);
        assert_eq!(placement.offset, Vec2::ZERO);
        assert_eq!(placement.size, None);
    }

    #[test]
    fn first_move_starts_from_zero_origin() {
        let placement = Placement::default().moved_by(Vec2::new(10.0, -5.0));
        assert_eq!(placement.offset, Vec2::new(10.0, -5.0));
    }

    #[test]
    fn moves_accumulate_as_vector_sum() {
        let deltas = vec![
            Vec2::new(3.0, 1.0),
            Vec2::new(-1.5, 2.5),
            Vec2::new(0.0, -4.0),
            Vec2::new(7.5, 0.5),
        ];
        let placement = deltas
            .iter()
            .fold(Placement::default(), |p, &d| p.moved_by(d));

        let sum: Vec2 = deltas.iter().copied().sum();
        assert_eq!(placement.offset, sum);
    }

    #[test]
    fn non_finite_move_is_ignored() {
        let placement = Placement::default().moved_by(Vec2::new(5.0, 5.0));
        assert_eq!(placement.moved_by(Vec2::new(f64::NAN, 0.0)), placement);
        assert_eq!(
            placement.moved_by(Vec2::new(0.0, f64::INFINITY)),
            placement
        );
    }

    #[test]
    fn zero_shift_resize_keeps_offset_and_sets_size_exactly() {
        let placement = Placement::default().moved_by(Vec2::new(4.0, 9.0));
        let resized = placement.resized(ResizeDelta::new(Size::new(120.0, 80.0)));

        assert_eq!(resized.offset, Vec2::new(4.0, 9.0));
        assert_eq!(resized.size, Some(Size::new(120.0, 80.0)));
    }

    #[test]
    fn identical_zero_shift_resizes_are_idempotent() {
        let resize = ResizeDelta::new(Size::new(200.0, 100.0));
        let once = Placement::default().resized(resize);
        let twice = once.resized(resize);
        assert_eq!(once, twice);
    }

    #[test]
    fn left_edge_resize_shifts_origin() {
        let resize = ResizeDelta::new(Size::new(110.0, 50.0)).with_shift(Vec2::new(-10.0, 0.0));
        let placement = Placement::default().resized(resize);

        assert_eq!(placement.offset, Vec2::new(-10.0, 0.0));
        assert_eq!(placement.size, Some(Size::new(110.0, 50.0)));
    }

    #[test]
    fn non_finite_resize_is_ignored() {
        let placement = Placement::default().resized(ResizeDelta::new(Size::new(100.0, 50.0)));
        let bad_size = ResizeDelta::new(Size::new(f64::NAN, 50.0));
        let bad_shift =
            ResizeDelta::new(Size::new(90.0, 40.0)).with_shift(Vec2::new(f64::INFINITY, 0.0));

        assert_eq!(placement.resized(bad_size), placement);
        assert_eq!(placement.resized(bad_shift), placement);
    }

    #[test]
    fn transform_is_translation_by_offset() {
        let placement = Placement::default().moved_by(Vec2::new(12.0, -3.0));
        assert_eq!(placement.transform(), Affine::translate((12.0, -3.0)));
    }

    #[test]
    fn frame_tracks_offset_and_size_override() {
        let home = Rect::new(10.0, 20.0, 110.0, 70.0);
        let placement = Placement::default()
            .moved_by(Vec2::new(5.0, 5.0))
            .resized(ResizeDelta::new(Size::new(200.0, 60.0)));

        assert_eq!(placement.frame(home), Rect::new(15.0, 25.0, 215.0, 85.0));
    }

    #[test]
    fn frame_without_override_uses_home_size() {
        let home = Rect::new(0.0, 0.0, 100.0, 50.0);
        let placement = Placement::default().moved_by(Vec2::new(-2.0, 3.0));
        assert_eq!(placement.frame(home), Rect::new(-2.0, 3.0, 98.0, 53.0));
    }
}
