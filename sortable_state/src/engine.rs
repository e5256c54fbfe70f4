// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reorder engine: a state machine over one drag-to-reorder gesture.
//!
//! [`SortState`] owns the item payloads, the [`OrderTable`], and the
//! [`GeometryStore`], and advances through three phases:
//!
//! - **Idle**: no pointer is held. Ready for [`SortState::on_press`].
//! - **Armed**: a pointer went down on a slot but has not moved. A release
//!   here is a click, not a sort.
//! - **Dragging**: the pointer has moved; one slot carries the placeholder
//!   gap and each further move may re-resolve it.
//!
//! Every transition is driven by a pointer event method, and every exit path
//! back to Idle withdraws the [`PointerGrab`] handed out at press, so hosts
//! can bind their global listeners to the grab's lifetime without leaking
//! them on a click or a cancelled gesture.

use alloc::vec::Vec;
use core::sync::atomic::{AtomicU64, Ordering};
use kurbo::{Point, Rect, Size};

use crate::geometry::{GeometryStore, SlotFlags};
use crate::order::OrderTable;
use crate::resolve::resolve_target;
use crate::tracker::PointerTracker;

/// Where a reorder gesture currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// No pointer is held.
    #[default]
    Idle,
    /// A pointer went down on a slot but has not moved yet.
    Armed,
    /// The pointer has moved; a placeholder gap occupies a slot.
    Dragging,
}

/// Token for the exclusive pointer subscription of one gesture.
///
/// Returned by [`SortState::on_press`]. The host attaches its global
/// move/release listeners when it receives a grab and detaches them when the
/// engine withdraws it ([`SortState::pointer_grab`] returns `None` again).
/// Tokens are unique per press across all engines in the process, so a host
/// multiplexing several sortable strips can key one listener table by grab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerGrab(u64);

static NEXT_GRAB: AtomicU64 = AtomicU64::new(1);

impl PointerGrab {
    fn acquire() -> Self {
        Self(NEXT_GRAB.fetch_add(1, Ordering::Relaxed))
    }

    /// The numeric identity of this grab.
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// What one accepted move event changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragUpdate {
    /// The dragged element's new accumulated offset, in page space.
    pub offset: Point,
    /// The visual slot the placeholder gap now occupies.
    pub placeholder: usize,
    /// `true` when this move shifted the order (and the placeholder with it).
    pub reordered: bool,
}

/// One visual slot as the host should render it, in visual order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSlot {
    /// Index of the item payload to render here, in declaration order.
    pub item: usize,
    /// Render this slot as the placeholder gap.
    pub placeholder: bool,
    /// The slot's item is deleted; it keeps its slot but leaves sort output.
    pub deleted: bool,
}

/// The ephemeral per-gesture state.
#[derive(Clone, Copy, Debug)]
struct Session {
    /// Visual slot the press landed on.
    pressed: usize,
    /// Visual slot currently holding the placeholder gap; `None` until the
    /// first move arms it.
    placeholder: Option<usize>,
    /// Dragged item's size, captured at press for the drag overlay.
    size: Size,
    /// The subscription token handed to the host at press.
    grab: PointerGrab,
}

impl Session {
    fn slot(&self) -> usize {
        self.placeholder.unwrap_or(self.pressed)
    }
}

#[derive(Clone, Copy, Debug, Default)]
enum Gesture {
    #[default]
    Idle,
    Armed(Session),
    Dragging(Session),
}

/// Drag-to-reorder state for one strip of items.
///
/// The engine owns the payloads handed to [`SortState::new`] and never
/// reorders that storage; the [`OrderTable`] says which payload renders at
/// which visual slot, and [`SortState::sort_data`] materializes the current
/// order. Hosts feed it measured boxes via [`SortState::report_slot`] and
/// pointer events via [`SortState::on_press`], [`SortState::on_move`], and
/// [`SortState::on_release`]; everything else is queries.
///
/// All methods are cheap and synchronous, and malformed input (out-of-range
/// slots, events in the wrong phase, non-finite coordinates) degrades to a
/// no-op rather than corrupting the order.
#[derive(Clone, Debug)]
pub struct SortState<T> {
    items: Vec<T>,
    order: OrderTable,
    geometry: GeometryStore,
    tracker: PointerTracker,
    gesture: Gesture,
    container_width: Option<f64>,
    revision: u64,
}

impl<T> SortState<T> {
    /// Creates an engine over `items`, in identity order, with no
    /// measurements yet.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        let len = items.len();
        Self {
            items,
            order: OrderTable::new(len),
            geometry: GeometryStore::new(len),
            tracker: PointerTracker::default(),
            gesture: Gesture::Idle,
            container_width: None,
            revision: 0,
        }
    }

    /// Merges a measured box for the given visual slot.
    ///
    /// Hosts call this when a child mounts and again after any layout pass,
    /// including the re-layout that follows a reorder. Out-of-range reports
    /// are dropped.
    pub fn report_slot(&mut self, slot: usize, rect: Rect) {
        self.geometry.report(slot, rect);
    }

    /// Sets the container's width, the right boundary for target resolution.
    ///
    /// Until a finite width is observed the container is treated as
    /// unbounded on the right; passing a non-finite value returns to that
    /// state.
    pub fn set_container_width(&mut self, width: f64) {
        self.container_width = width.is_finite().then_some(width);
    }

    /// Marks or unmarks the item at a visual slot as deleted.
    ///
    /// A deleted slot keeps participating in index arithmetic but is skipped
    /// by [`Self::sort_data`] and refuses presses. No-op out of range.
    pub fn set_deleted(&mut self, slot: usize, deleted: bool) {
        let before = self.geometry.flags(slot);
        self.geometry.set_flag(slot, SlotFlags::DELETED, deleted);
        if self.geometry.flags(slot) != before {
            self.bump_revision();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Starts a gesture: a pointer went down on the given visual slot.
    ///
    /// `page` is the pointer's page-space position and `initial_offset` the
    /// pressed element's current page-space origin; the drag overlay
    /// accumulates from the latter. On success the returned [`PointerGrab`]
    /// tells the host to attach its global move/release listeners.
    ///
    /// Returns `None` — and changes nothing — while another gesture is
    /// active, for out-of-range slots, and for deleted slots.
    #[must_use]
    pub fn on_press(
        &mut self,
        slot: usize,
        page: Point,
        initial_offset: Point,
    ) -> Option<PointerGrab> {
        if !matches!(self.gesture, Gesture::Idle) {
            return None;
        }
        if slot >= self.order.len() || self.geometry.flags(slot).contains(SlotFlags::DELETED) {
            return None;
        }

        let size = self.geometry.rect(slot).map_or(Size::ZERO, |rect| rect.size());
        let grab = PointerGrab::acquire();
        self.tracker.begin(page, initial_offset);
        self.gesture = Gesture::Armed(Session {
            pressed: slot,
            placeholder: None,
            size,
            grab,
        });
        self.bump_revision();
        Some(grab)
    }

    /// Advances the gesture with one pointer move event.
    ///
    /// The first accepted move arms the placeholder gap on the pressed slot.
    /// Every accepted move recomputes the drag offset, resolves the slot the
    /// gap should occupy, and applies a list-move to the order table and
    /// geometry store in lockstep when that slot differs from the current
    /// one. When resolution declines to decide (dead zone, non-finite
    /// coordinates, nothing measured yet) the gap stays where it is.
    ///
    /// Returns `None` when no gesture is active.
    pub fn on_move(&mut self, page: Point) -> Option<DragUpdate> {
        let (mut session, armed) = match self.gesture {
            Gesture::Idle => return None,
            Gesture::Armed(session) => (session, true),
            Gesture::Dragging(session) => (session, false),
        };
        let moved = self.tracker.update(page)?;

        if armed {
            self.geometry.set_flag(session.pressed, SlotFlags::PLACEHOLDER, true);
            session.placeholder = Some(session.pressed);
        }

        let current = session.slot();
        let container = self.container_width.unwrap_or(f64::INFINITY);
        let target = resolve_target(moved.offset, moved.direction, &self.geometry, container)
            .unwrap_or(current);

        let mut reordered = false;
        if target != current && self.order.apply_move(current, target) {
            self.geometry.apply_move(current, target);
            session.placeholder = Some(target);
            reordered = true;
        }

        let placeholder = session.slot();
        self.gesture = Gesture::Dragging(session);
        self.bump_revision();
        Some(DragUpdate {
            offset: moved.offset,
            placeholder,
            reordered,
        })
    }

    /// Ends the gesture: the pointer went up.
    ///
    /// A release after at least one move completes the reorder and returns
    /// the sorted payloads, exactly once per gesture; a release without any
    /// move is a click and returns `None`. Either way the grab is withdrawn
    /// and the tracker cleared, so no listener or pointer state outlives the
    /// gesture.
    pub fn on_release(&mut self) -> Option<Vec<&T>> {
        self.tracker.end();
        let gesture = self.gesture;
        self.gesture = Gesture::Idle;
        match gesture {
            Gesture::Idle => None,
            Gesture::Armed(_) => {
                self.bump_revision();
                None
            }
            Gesture::Dragging(session) => {
                self.geometry.set_flag(session.slot(), SlotFlags::PLACEHOLDER, false);
                self.bump_revision();
                Some(self.sort_data())
            }
        }
    }

    /// Tears down an in-flight gesture without completing it.
    ///
    /// Clears the session, the placeholder flag, and the tracker, and
    /// withdraws the grab. Moves already applied stay applied; nothing
    /// further is published. No-op when idle.
    pub fn cancel(&mut self) {
        self.tracker.end();
        let gesture = self.gesture;
        self.gesture = Gesture::Idle;
        match gesture {
            Gesture::Idle => {}
            Gesture::Armed(_) => {
                self.bump_revision();
            }
            Gesture::Dragging(session) => {
                self.geometry.set_flag(session.slot(), SlotFlags::PLACEHOLDER, false);
                self.bump_revision();
            }
        }
    }

    /// Returns the current gesture phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.gesture {
            Gesture::Idle => GesturePhase::Idle,
            Gesture::Armed(_) => GesturePhase::Armed,
            Gesture::Dragging(_) => GesturePhase::Dragging,
        }
    }

    /// Returns the live subscription token, if a gesture is active.
    #[must_use]
    pub fn pointer_grab(&self) -> Option<PointerGrab> {
        match self.gesture {
            Gesture::Idle => None,
            Gesture::Armed(session) | Gesture::Dragging(session) => Some(session.grab),
        }
    }

    /// Returns the visual slot holding the placeholder gap, while dragging.
    #[must_use]
    pub fn placeholder_slot(&self) -> Option<usize> {
        match self.gesture {
            Gesture::Dragging(session) => Some(session.slot()),
            _ => None,
        }
    }

    /// Returns the dragged element's accumulated page-space offset, while a
    /// gesture is active.
    #[must_use]
    pub fn drag_offset(&self) -> Option<Point> {
        self.tracker.offset()
    }

    /// Returns the box the drag overlay should occupy, while dragging.
    ///
    /// Origin is the live accumulated offset; size was captured from the
    /// pressed slot's measurement at press time.
    #[must_use]
    pub fn dragged_style(&self) -> Option<Rect> {
        match self.gesture {
            Gesture::Dragging(session) => self
                .tracker
                .offset()
                .map(|offset| Rect::from_origin_size(offset, session.size)),
            _ => None,
        }
    }

    /// Returns render directives for every visual slot, in visual order.
    pub fn render_slots(&self) -> impl Iterator<Item = RenderSlot> + '_ {
        self.order.iter().enumerate().map(|(slot, item)| {
            let flags = self.geometry.flags(slot);
            RenderSlot {
                item,
                placeholder: flags.contains(SlotFlags::PLACEHOLDER),
                deleted: flags.contains(SlotFlags::DELETED),
            }
        })
    }

    /// Returns the payloads in current visual order, skipping deleted slots.
    ///
    /// This is the value [`Self::on_release`] publishes when a drag
    /// completes; it can also be sampled at any time as a preview.
    #[must_use]
    pub fn sort_data(&self) -> Vec<&T> {
        self.order
            .iter()
            .enumerate()
            .filter(|&(slot, _)| !self.geometry.flags(slot).contains(SlotFlags::DELETED))
            .filter_map(|(_, item)| self.items.get(item))
            .collect()
    }

    /// Returns the payloads in declaration order, as handed to
    /// [`Self::new`].
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the engine tracks no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the authoritative visual order.
    #[must_use]
    pub fn order(&self) -> &OrderTable {
        &self.order
    }

    /// Returns the geometry store: measured boxes and per-slot flags.
    #[must_use]
    pub fn geometry(&self) -> &GeometryStore {
        &self.geometry
    }

    /// Returns a counter that increases whenever observable interaction
    /// state changes.
    ///
    /// Presses, accepted moves, releases, cancels of a live gesture, and
    /// deletion changes bump it; measurement reports and container-width
    /// updates do not. Hosts can compare revisions to skip redundant
    /// re-renders.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
