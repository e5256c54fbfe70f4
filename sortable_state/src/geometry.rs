// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry store: cached measurements and flags for each visual slot.
//!
//! Rendered children report their measured boxes here, keyed by visual slot.
//! The store also carries two per-record flags: `PLACEHOLDER` (the gap
//! reserved for the item currently being dragged) and `DELETED` (the item is
//! excluded from sort output but its slot still participates in index
//! arithmetic).
//!
//! Boxes and flags have different binding rules when the order changes:
//!
//! - **Flags travel.** A flag marks the record itself, so [`apply_move`]
//!   rotates flags with the same list-move the order table receives.
//! - **Boxes stay.** A cached box is the last measurement reported *for that
//!   visual position*. Moving records around does not move pixels on screen
//!   until the host re-lays-out and reports again, so the box cache is left
//!   bound to positions and refreshed by the next round of [`report`] calls.
//!   Until that happens the cache lags the order table by one layout pass;
//!   the order table is authoritative the moment a move applies.
//!
//! [`apply_move`]: GeometryStore::apply_move
//! [`report`]: GeometryStore::report

use alloc::vec::Vec;
use kurbo::Rect;

use crate::order::list_move;

bitflags::bitflags! {
    /// Per-record flags carried through reorders.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SlotFlags: u8 {
        /// The record is the gap reserved for the item being dragged.
        const PLACEHOLDER = 0b0000_0001;
        /// The record's item is excluded from sort output.
        const DELETED = 0b0000_0010;
    }
}

impl Default for SlotFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// A copyable view of one visual slot: its measured box and flags.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlotRecord {
    /// The most recently reported box, or `None` before the first report.
    pub rect: Option<Rect>,
    /// The record's flags.
    pub flags: SlotFlags,
}

impl SlotRecord {
    /// Returns `true` if this record is the placeholder gap.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.flags.contains(SlotFlags::PLACEHOLDER)
    }

    /// Returns `true` if this record's item is excluded from sort output.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.flags.contains(SlotFlags::DELETED)
    }
}

/// Cached measurements and flags for every visual slot of one sortable strip.
///
/// The store's length is fixed at construction and always matches the order
/// table it is permuted in lockstep with. All mutating operations treat
/// out-of-range indices as silent no-ops: pointer-event streams can deliver
/// stale indices and a dropped report must not corrupt the gesture.
#[derive(Clone, Debug, Default)]
pub struct GeometryStore {
    /// Measured boxes, bound to visual positions.
    rects: Vec<Option<Rect>>,
    /// Record flags, bound to identities; rotated by [`Self::apply_move`].
    flags: Vec<SlotFlags>,
}

impl GeometryStore {
    /// Creates a store for `len` slots with no measurements and empty flags.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            rects: alloc::vec![None; len],
            flags: alloc::vec![SlotFlags::empty(); len],
        }
    }

    /// Returns the number of visual slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Returns `true` if the store tracks no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Merges a measured box into the slot's record.
    ///
    /// Called whenever a rendered child mounts or its layout is recomputed,
    /// keyed by the child's visual slot. Out-of-range reports are dropped.
    pub fn report(&mut self, slot: usize, rect: Rect) {
        if let Some(entry) = self.rects.get_mut(slot) {
            *entry = Some(rect);
        }
    }

    /// Returns the slot's measured box, or `None` if unreported or out of range.
    #[must_use]
    pub fn rect(&self, slot: usize) -> Option<Rect> {
        self.rects.get(slot).copied().flatten()
    }

    /// Returns the slot's flags; out-of-range slots read as empty.
    #[must_use]
    pub fn flags(&self, slot: usize) -> SlotFlags {
        self.flags.get(slot).copied().unwrap_or_default()
    }

    /// Returns a combined view of the slot, or `None` if out of range.
    #[must_use]
    pub fn record(&self, slot: usize) -> Option<SlotRecord> {
        let flags = *self.flags.get(slot)?;
        Some(SlotRecord {
            rect: self.rects[slot],
            flags,
        })
    }

    /// Sets or clears one flag on the slot's record. No-op out of range.
    pub fn set_flag(&mut self, slot: usize, flag: SlotFlags, value: bool) {
        if let Some(flags) = self.flags.get_mut(slot) {
            flags.set(flag, value);
        }
    }

    /// Applies the same list-move the order table receives.
    ///
    /// Flags travel with their record; cached boxes stay bound to the visual
    /// position they were measured at (see the module docs for why). Returns
    /// `false` and changes nothing when either index is out of range.
    pub fn apply_move(&mut self, from: usize, to: usize) -> bool {
        if from >= self.flags.len() || to >= self.flags.len() {
            return false;
        }
        list_move(&mut self.flags, from, to);
        true
    }
}
