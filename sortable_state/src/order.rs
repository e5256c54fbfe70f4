// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Order table: the authoritative mapping from visual slots to item identities.
//!
//! The table is always a permutation of `0..len`. Reordering uses list-move
//! semantics: the entry at `from` is removed and reinserted at `to`, shifting
//! every entry between them by one position. This is deliberately not a
//! pairwise exchange — dragging an item past three siblings must shift each
//! of them by one slot, not swap the item with whichever sibling happens to
//! occupy the target slot.

use alloc::vec::Vec;

/// Moves `items[from]` to position `to`, shifting the entries between them.
///
/// Equivalent to removing the element at `from` and reinserting it at `to`.
/// Callers are responsible for bounds; both indices must be in range.
pub(crate) fn list_move<T>(items: &mut [T], from: usize, to: usize) {
    if from < to {
        items[from..=to].rotate_left(1);
    } else if to < from {
        items[to..=from].rotate_right(1);
    }
}

/// The visual order of items: a permutation of the original declaration order.
///
/// Position `v` in the table holds the identity (original index) of the item
/// currently rendered at visual slot `v`. The table is the single source of
/// truth for "what is rendered where"; cached geometry never is.
///
/// ## Minimal example
///
/// ```rust
/// use sortable_state::OrderTable;
///
/// let mut order = OrderTable::new(3);
/// assert_eq!(order.as_slice(), &[0, 1, 2]);
///
/// // Drag item 0 one slot to the right: 1 shifts left into the vacated slot.
/// assert!(order.apply_move(0, 1));
/// assert_eq!(order.as_slice(), &[1, 0, 2]);
///
/// // Out-of-range moves leave the table untouched.
/// assert!(!order.apply_move(0, 9));
/// assert_eq!(order.as_slice(), &[1, 0, 2]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderTable {
    slots: Vec<usize>,
}

impl OrderTable {
    /// Creates the identity order `[0, 1, .., len - 1]` for `len` items.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: (0..len).collect(),
        }
    }

    /// Returns the number of visual slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the table tracks no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the identity of the item at visual slot `visual`, if in range.
    #[must_use]
    pub fn get(&self, visual: usize) -> Option<usize> {
        self.slots.get(visual).copied()
    }

    /// Returns the full table in visual order.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.slots
    }

    /// Returns an iterator over item identities in visual order.
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, usize>> {
        self.slots.iter().copied()
    }

    /// Applies a list-move: the entry at `from` is reinserted at `to`.
    ///
    /// Entries between the two positions shift by one toward the vacated
    /// slot. Returns `false` — leaving the table unchanged — when either
    /// index is out of range. A move onto itself succeeds and changes
    /// nothing. The result is always a permutation of `0..len`: entries are
    /// rotated, never copied or dropped.
    pub fn apply_move(&mut self, from: usize, to: usize) -> bool {
        if from >= self.slots.len() || to >= self.slots.len() {
            return false;
        }
        list_move(&mut self.slots, from, to);
        true
    }
}
