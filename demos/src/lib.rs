// Copyright 2025 the Tractile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Tractile demos.
//!
//! The demos have no windowing layer; they stand in for the external
//! interaction library by scripting pointer paths and converting them into
//! the event stream a real library would deliver.

use kurbo::Point;
use tractile_surface::PointerEvent;
use tractile_track::DragSession;

/// Converts a scripted pointer path into a drag event stream: one move per
/// waypoint after the first, then the terminal end event.
pub fn drag_script(path: &[Point]) -> Vec<PointerEvent> {
    let Some((&start, rest)) = path.split_first() else {
        return Vec::new();
    };

    let mut session = DragSession::begin(start);
    let mut events: Vec<PointerEvent> = rest
        .iter()
        .map(|&pos| PointerEvent::Move(session.move_to(pos)))
        .collect();

    let end = rest.last().copied().unwrap_or(start);
    let summary = session.finish(end);
    events.push(PointerEvent::End {
        start: summary.start,
        end: summary.end,
    });
    events
}
