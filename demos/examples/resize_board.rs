// Copyright 2025 the Tractile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize a board element against a minimum size and its parent's edges.
//!
//! Uses the small variant limits (50×20 minimum). The script shrinks the
//! element below the minimum, grows it past the parent, and pulls the left
//! edge, printing the size caption a host would render after each event.

use kurbo::{Rect, Size, Vec2};
use tractile_restrict::{Edges, RestrictEdges, RestrictSize, RestrictionSet};
use tractile_surface::{ElementConfig, PointerEvent, Surface};
use tractile_track::ResizeDelta;

fn main() {
    let parent = Rect::new(0.0, 0.0, 400.0, 200.0);
    let mut surface = Surface::new();
    surface.insert(
        "board",
        ElementConfig::at(Rect::new(50.0, 50.0, 150.0, 100.0))
            .resizable(Edges::ALL)
            .with_restrictions(
                RestrictionSet::new()
                    .with(RestrictEdges::new(parent))
                    .with(RestrictSize::at_least(Size::new(50.0, 20.0))),
            ),
    );

    let script = [
        // Shrink below the minimum; clamps to exactly 50×20.
        PointerEvent::Resize(ResizeDelta::new(Size::new(30.0, 10.0))),
        // Grow far past the parent; edges stay inside it.
        PointerEvent::Resize(ResizeDelta::new(Size::new(900.0, 900.0))),
        // Pull the left edge outward by 25.
        PointerEvent::Resize(
            ResizeDelta::new(Size::new(375.0, 150.0)).with_shift(Vec2::new(-25.0, 0.0)),
        ),
    ];

    for event in script {
        let Some(update) = surface.handle(&"board", event) else {
            continue;
        };
        println!(
            "{} at offset {:?}, frame {:?}",
            update.size_label.as_deref().unwrap_or("-"),
            update.placement.offset,
            surface.frame(&"board").unwrap()
        );
    }
}
