// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sortable_state --heading-base-level=0

//! Sortable State: drag-to-reorder state for strips of items.
//!
//! This crate is the _bookkeeping_ of a drag-to-reorder gesture: which item
//! renders at which visual slot, where the dragged element currently sits,
//! and which slot its placeholder gap should occupy. It does **not** render
//! anything, subscribe to platform events, or know about any UI tree; the
//! host feeds it measured boxes and pointer positions and renders whatever
//! it reports back.
//!
//! The core type is [`SortState`], a per-strip state machine that tracks:
//!
//! - The authoritative visual order: an [`OrderTable`] mapping visual slots
//!   to items, always a permutation of the declaration order.
//! - Per-slot measurements and flags in a [`GeometryStore`], fed by the
//!   host after every layout pass.
//! - The live gesture: accumulated pointer offset ([`PointerTracker`]) and
//!   the placeholder slot, re-resolved on every move by [`resolve_target`]
//!   with a directional dead zone that keeps the index from flickering at
//!   slot boundaries.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use sortable_state::SortState;
//!
//! // Three items rendered in a 300px-wide horizontal strip.
//! let mut state = SortState::new(vec!["a", "b", "c"]);
//! state.set_container_width(300.0);
//! for slot in 0..3 {
//!     let left = 100.0 * slot as f64;
//!     state.report_slot(slot, Rect::new(left, 0.0, left + 100.0, 40.0));
//! }
//!
//! // Press item 0; the grab tells the host to bind global listeners.
//! let grab = state.on_press(0, Point::new(10.0, 10.0), Point::ZERO).unwrap();
//! assert_eq!(state.pointer_grab(), Some(grab));
//!
//! // Drag right, past the neighbor's midpoint: the order updates live.
//! let update = state.on_move(Point::new(85.0, 12.0)).unwrap();
//! assert!(update.reordered);
//! assert_eq!(state.order().as_slice(), &[1, 0, 2]);
//!
//! // Release: the reorder is final and the grab is withdrawn.
//! let sorted = state.on_release().unwrap();
//! assert_eq!(sorted, vec![&"b", &"a", &"c"]);
//! assert_eq!(state.pointer_grab(), None);
//! ```
//!
//! ## Integration
//!
//! A host wires the engine to its UI with a handful of calls:
//!
//! - After layout: [`SortState::report_slot`] for each child and
//!   [`SortState::set_container_width`] for the strip itself. Reports are
//!   keyed by visual slot and expected again after a reorder re-lays-out
//!   the strip.
//! - From the child's pointer-down handler: [`SortState::on_press`]. While
//!   the returned grab is live the host keeps document-level move/release
//!   listeners attached and forwards them to [`SortState::on_move`] and
//!   [`SortState::on_release`]; the grab is withdrawn on every exit path,
//!   including [`SortState::cancel`] and click-without-move releases.
//! - To render: [`SortState::render_slots`] for the strip in visual order
//!   and [`SortState::dragged_style`] for the drag overlay.
//!
//! The engine never mutates its payload storage; [`SortState::sort_data`]
//! (also the value published on release) materializes the current order on
//! demand.
//!
//! ## Features
//!
//! - `std` (enabled by default): use the Rust standard library.
//! - `libm`: required in `no_std` environments for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod geometry;
mod order;
mod resolve;
mod tracker;

pub use engine::{DragUpdate, GesturePhase, PointerGrab, RenderSlot, SortState};
pub use geometry::{GeometryStore, SlotFlags, SlotRecord};
pub use order::OrderTable;
pub use resolve::resolve_target;
pub use tracker::{Direction, PointerMove, PointerTracker};
