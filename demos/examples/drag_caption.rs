// Copyright 2025 the Tractile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag a captioned element around its parent.
//!
//! The element is clamped to the parent only at drag end, so the scripted
//! path is allowed to leave the parent mid-drag and gets snapped back by the
//! terminal event, which also produces the distance caption.

use kurbo::{Point, Rect};
use tractile_demos::drag_script;
use tractile_restrict::{RestrictRect, RestrictionSet};
use tractile_surface::{ElementConfig, Surface};

fn main() {
    let parent = Rect::new(0.0, 0.0, 500.0, 300.0);
    let mut surface = Surface::new();
    surface.insert(
        "card",
        ElementConfig::at(Rect::new(10.0, 10.0, 110.0, 60.0))
            .with_restrictions(RestrictionSet::new().with(RestrictRect::end_only(parent)))
            .with_caption(),
    );

    let path = [
        Point::new(60.0, 35.0),
        Point::new(30.0, 35.0),
        Point::new(-20.0, 40.0),
        Point::new(5.0, 55.0),
    ];

    for event in drag_script(&path) {
        let Some(update) = surface.handle(&"card", event) else {
            continue;
        };
        println!(
            "offset = {:?}, frame = {:?}",
            update.placement.offset,
            surface.frame(&"card").unwrap()
        );
        if let Some(caption) = update.caption {
            println!("caption: {caption}");
        }
    }
}
