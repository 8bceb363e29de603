// Copyright 2025 the Tractile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable captions for size and drag distance.
//!
//! These are presentation artifacts: recomputed on every event that needs
//! them and never part of persisted state. Whether a caption element exists
//! to receive the text is the host's concern; a missing caption simply means
//! the string goes unused.

use alloc::format;
use alloc::string::String;

use kurbo::Size;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

/// Size caption, e.g. `"100×50"`, with each dimension rounded to the nearest
/// integer.
#[must_use]
pub fn size_label(size: Size) -> String {
    format!("{}\u{d7}{}", size.width.round(), size.height.round())
}

/// Drag-end caption, e.g. `"moved a distance of 5.00px"`.
#[must_use]
pub fn distance_label(distance: f64) -> String {
    format!("moved a distance of {distance:.2}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_label_rounds_to_nearest_integer() {
        assert_eq!(size_label(Size::new(100.0, 50.0)), "100×50");
        assert_eq!(size_label(Size::new(99.6, 49.5)), "100×50");
        assert_eq!(size_label(Size::new(120.4, 80.7)), "120×81");
    }

    #[test]
    fn distance_label_keeps_two_decimal_places() {
        assert_eq!(distance_label(5.0), "moved a distance of 5.00px");
        assert_eq!(distance_label(12.3456), "moved a distance of 12.35px");
        assert_eq!(distance_label(0.0), "moved a distance of 0.00px");
    }
}
