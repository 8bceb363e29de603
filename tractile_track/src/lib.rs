// Copyright 2025 the Tractile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tractile Track: fold pointer move/resize events into persisted placements.
//!
//! This crate is the state core of Tractile. It owns the rules for turning a
//! stream of raw pointer-movement events into an element's persisted
//! position and size, independent of which interaction library dispatches
//! the events:
//!
//! - [`placement`]: the per-element `(offset, size)` tuple and the pure fold
//!   steps that advance it ([`Placement::moved_by`], [`Placement::resized`]).
//! - [`tracker`]: a keyed store folding events for many independent elements.
//! - [`session`]: per-interaction pointer bookkeeping for hosts whose input
//!   source reports absolute positions rather than deltas, plus the
//!   drag-distance summary.
//! - [`label`]: the human-readable size and distance captions.
//!
//! ## Design
//!
//! Position is owned by the tracked state, never by layout. Each move event
//! carries an incremental delta which is *added* to the stored offset; the
//! offset is never re-derived from a layout query, because layout reports
//! the untransformed position and re-reading it would double-count the
//! translation already applied. There is no interaction state machine: each
//! event is processed independently given the previously persisted tuple, so
//! the whole model is a pure fold over the event stream.
//!
//! The fold returns new state instead of mutating any visual object. Hosts
//! read [`Placement::transform`] (and the size, if overridden) and apply
//! them however they render, which keeps the core testable with no
//! rendering environment in sight.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use tractile_track::Tracker;
//!
//! let mut tracker = Tracker::new();
//!
//! // Two move events for element 1: the offsets accumulate.
//! tracker.apply_move(1, Vec2::new(10.0, 0.0));
//! let placement = tracker.apply_move(1, Vec2::new(-3.0, 4.0));
//! assert_eq!(placement.offset, Vec2::new(7.0, 4.0));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod label;
pub mod placement;
pub mod session;
pub mod tracker;

pub use placement::{Placement, ResizeDelta};
pub use session::{DragSession, DragSummary};
pub use tracker::Tracker;
