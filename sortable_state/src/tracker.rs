// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracker: accumulate page-space pointer movement into an element offset.
//!
//! ## Usage
//!
//! 1) Call [`PointerTracker::begin`] on press with the page position and the
//!    pressed element's initial offset.
//! 2) On each move event, call [`PointerTracker::update`] to get the new
//!    offset and the horizontal travel direction of that move.
//! 3) Call [`PointerTracker::end`] on release; all transient pointer state is
//!    cleared so nothing leaks into the next gesture.
//!
//! The offset accumulates the *negative* of the pointer delta: moving the
//! pointer right shifts the dragged element's offset right by the same
//! amount, starting from the element's own offset rather than the pointer
//! position.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use sortable_state::{Direction, PointerTracker};
//!
//! let mut tracker = PointerTracker::default();
//! tracker.begin(Point::new(10.0, 10.0), Point::new(100.0, 0.0));
//!
//! // Pointer moves 5px right, 2px down: the offset follows.
//! let mv = tracker.update(Point::new(15.0, 12.0)).unwrap();
//! assert_eq!(mv.offset, Point::new(105.0, 2.0));
//! assert_eq!(mv.direction, Direction::Right);
//! ```

use kurbo::Point;

/// Horizontal travel direction of a single pointer move.
///
/// A move is [`Direction::Left`] only when the new page x is strictly less
/// than the previous one; a horizontally stationary move reads as
/// [`Direction::Right`]. The strict comparison keeps index resolution stable
/// at slot boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The pointer moved toward smaller x.
    Left,
    /// The pointer moved toward larger x, or did not move horizontally.
    Right,
}

/// One processed move: the dragged element's new offset and the travel direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMove {
    /// The dragged element's accumulated page-space offset.
    pub offset: Point,
    /// Horizontal direction of this move.
    pub direction: Direction,
}

/// Tracks pointer state across the move events of one gesture.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    /// Page position of the previous press/move event.
    last_page: Option<Point>,
    /// Accumulated element offset, seeded from the initial offset on press.
    offset: Option<Point>,
}

impl PointerTracker {
    /// Starts tracking at `page`, seeding the offset with the pressed
    /// element's `initial_offset`.
    pub fn begin(&mut self, page: Point, initial_offset: Point) {
        self.last_page = Some(page);
        self.offset = Some(initial_offset);
    }

    /// Processes one move event, returning the new offset and direction.
    ///
    /// Returns `None` when no gesture is being tracked; a stray move event
    /// must not fabricate state. The page position is stored as the new
    /// "previous" for the next call.
    pub fn update(&mut self, page: Point) -> Option<PointerMove> {
        let last = self.last_page?;
        let prev_offset = self.offset?;

        let delta = last - page;
        let offset = prev_offset - delta;
        let direction = if page.x < last.x {
            Direction::Left
        } else {
            Direction::Right
        };

        self.last_page = Some(page);
        self.offset = Some(offset);
        Some(PointerMove { offset, direction })
    }

    /// Returns the accumulated offset, if a gesture is being tracked.
    #[must_use]
    pub fn offset(&self) -> Option<Point> {
        self.offset
    }

    /// Returns `true` while a gesture is being tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_page.is_some()
    }

    /// Stops tracking and clears all transient pointer state.
    pub fn end(&mut self) {
        self.last_page = None;
        self.offset = None;
    }
}
