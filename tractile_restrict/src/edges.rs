// Copyright 2025 the Tractile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which edges of an element take part in resizing.

bitflags::bitflags! {
    /// Edge mask for resizable elements.
    ///
    /// An element resizable from all edges and corners carries [`Edges::ALL`],
    /// which is also the default. Corners are the combination of their two
    /// edges; there are no separate corner bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        /// Left edge participates in resizing.
        const LEFT   = 0b0000_0001;
        /// Top edge participates in resizing.
        const TOP    = 0b0000_0010;
        /// Right edge participates in resizing.
        const RIGHT  = 0b0000_0100;
        /// Bottom edge participates in resizing.
        const BOTTOM = 0b0000_1000;

        /// All four edges (and therefore all corners).
        const ALL = Self::LEFT.bits() | Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits();
    }
}

impl Default for Edges {
    fn default() -> Self {
        Self::ALL
    }
}

impl Edges {
    /// Returns `true` when a resize from these edges moves the element
    /// origin, i.e. when the left or top edge participates.
    ///
    /// Such resizes need the origin-shift correction carried by
    /// [`tractile_track::ResizeDelta::shift`]; right/bottom resizes grow the
    /// element in place.
    #[must_use]
    pub fn moves_origin(self) -> bool {
        self.intersects(Self::LEFT | Self::TOP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_edges() {
        assert_eq!(Edges::default(), Edges::ALL);
    }

    #[test]
    fn origin_moves_only_with_left_or_top() {
        assert!(Edges::LEFT.moves_origin());
        assert!(Edges::TOP.moves_origin());
        assert!((Edges::LEFT | Edges::BOTTOM).moves_origin());
        assert!(!(Edges::RIGHT | Edges::BOTTOM).moves_origin());
        assert!(!Edges::empty().moves_origin());
    }
}
