// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target-slot resolution: map a dragged element's offset to the visual slot
//! it should now occupy.
//!
//! [`resolve_target`] is a pure function over the geometry store; it mutates
//! nothing and either produces a decision or `None`, in which case the caller
//! falls back to the gesture's current index. Keeping it pure makes the dead
//! zone — the interesting part — independently testable.
//!
//! ## The directional dead zone
//!
//! A slot only claims the drag when the offset sits in the half of its box
//! that agrees with the current travel direction: the left half while moving
//! left (take this slot), or the right half while moving right (take the next
//! slot). An offset in the "wrong" half for the direction produces no
//! decision, and the previous index stays in effect.
//!
//! Without this rule, two adjacent slots of different widths make the
//! resolved index oscillate on every move event near their shared boundary:
//! each swap re-positions the boundary under the pointer, which immediately
//! resolves back. The dead zone absorbs those crossings.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use sortable_state::{Direction, GeometryStore, resolve_target};
//!
//! let mut geometry = GeometryStore::new(3);
//! for slot in 0..3 {
//!     let left = 100.0 * slot as f64;
//!     geometry.report(slot, Rect::new(left, 0.0, left + 100.0, 40.0));
//! }
//!
//! // Right half of slot 0, moving right: the drag claims slot 1.
//! let hit = resolve_target(Point::new(75.0, 10.0), Direction::Right, &geometry, 300.0);
//! assert_eq!(hit, Some(1));
//!
//! // Left half of slot 1, still moving right: dead zone, no decision.
//! let hit = resolve_target(Point::new(125.0, 10.0), Direction::Right, &geometry, 300.0);
//! assert_eq!(hit, None);
//! ```

use kurbo::Point;

use crate::geometry::GeometryStore;
use crate::tracker::Direction;

/// Resolves the visual slot a dragged element should occupy, if any.
///
/// Rules, first match wins:
///
/// 1. `None` when either offset coordinate is non-finite; transient pointer
///    data must not move the placeholder.
/// 2. `Some(0)` when the offset is past the container's left edge
///    (`offset.x < 0`).
/// 3. `Some(last)` when the offset is past the container's right edge
///    (`offset.x > container_width`). Callers that have not measured the
///    container yet pass `f64::INFINITY`, which disables this rule.
/// 4. Otherwise slots are scanned in visual order. The first slot whose
///    reported box contains the offset (`rel.x < width && rel.y < height`)
///    and whose containing half agrees with `direction` decides: the slot
///    itself when moving left, the following slot (clamped to `last`) when
///    moving right. A containing slot whose half disagrees with the
///    direction decides nothing and the scan continues.
/// 5. `None` when no slot decides.
///
/// Unreported slots are skipped. An empty store resolves to `None`.
#[must_use]
pub fn resolve_target(
    offset: Point,
    direction: Direction,
    geometry: &GeometryStore,
    container_width: f64,
) -> Option<usize> {
    if !offset.x.is_finite() || !offset.y.is_finite() {
        return None;
    }
    if geometry.is_empty() {
        return None;
    }
    let last = geometry.len() - 1;
    if offset.x < 0.0 {
        return Some(0);
    }
    if offset.x > container_width {
        return Some(last);
    }

    for slot in 0..geometry.len() {
        let Some(rect) = geometry.rect(slot) else {
            continue;
        };
        let rel = offset - rect.origin();
        if rel.x < rect.width() && rel.y < rect.height() {
            let half = rect.width() / 2.0;
            if rel.x < half && direction == Direction::Left {
                return Some(slot);
            }
            if rel.x > half && direction == Direction::Right {
                return Some((slot + 1).min(last));
            }
            // Wrong half for this direction: dead zone, keep scanning.
        }
    }
    None
}
