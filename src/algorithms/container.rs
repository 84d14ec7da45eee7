//! Key-ordered interpolatable container and its positional cursor.
//!
//! ## Purpose
//!
//! This module provides `InterpolatedMap`, an ordered key→value store bound to
//! one `Interpolator`, and `AxisCursor`, the single-axis cursor that walks it.
//! Leaf mappings store scalars in it; multi-dimensional mappings store their
//! sub-mappings in it.
//!
//! ## Design notes
//!
//! * **Sorted `Vec`**: Entries are kept in a `Vec` sorted by key. Lookups are
//!   binary searches, sequential walks are index increments and appends in
//!   increasing key order are pushes.
//! * **Detached cursor**: `AxisCursor` holds no borrow. Every call takes the map
//!   it walks, so the same cursor drives read-only and mutable traversal.
//!
//! ## Key concepts
//!
//! * **Upper index**: The cursor tracks the index of the first entry whose key
//!   is strictly greater than its position. Everything else (exactness, bracket,
//!   next key) follows from it in O(1).
//! * **In range**: The cursor position lies within `[first key, last key]`.
//!
//! ## Invariants
//!
//! * Keys are strictly increasing.
//! * `upper` equals `entries.partition_point(|k| k <= position)` after every
//!   cursor operation.
//!
//! ## Non-goals
//!
//! * This module does not know about dimensions or arguments.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::interpolation::{Interpolator, Located, Selection};
use crate::primitives::float::MappingFloat;

// ============================================================================
// InterpolatedMap
// ============================================================================

/// Ordered key→value store with an interpolation policy.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedMap<T, V> {
    entries: Vec<(T, V)>,
    interpolator: Interpolator<T>,
}

impl<T: MappingFloat, V> InterpolatedMap<T, V> {
    /// Create an empty map.
    pub fn new(interpolator: Interpolator<T>) -> Self {
        Self {
            entries: Vec::new(),
            interpolator,
        }
    }

    /// The interpolation policy.
    #[inline]
    pub fn interpolator(&self) -> Interpolator<T> {
        self.interpolator
    }

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map stores no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries in key order.
    #[inline]
    pub fn entries(&self) -> &[(T, V)] {
        &self.entries
    }

    /// Stored keys in order.
    pub fn keys(&self) -> impl Iterator<Item = T> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Stored values in key order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Smallest key.
    #[inline]
    pub fn first_key(&self) -> Option<T> {
        self.entries.first().map(|(k, _)| *k)
    }

    /// Greatest key.
    #[inline]
    pub fn last_key(&self) -> Option<T> {
        self.entries.last().map(|(k, _)| *k)
    }

    /// Key at `idx`.
    #[inline]
    pub fn key_at(&self, idx: usize) -> T {
        self.entries[idx].0
    }

    /// Value at `idx`.
    #[inline]
    pub fn value_at(&self, idx: usize) -> &V {
        &self.entries[idx].1
    }

    /// Mutable value at `idx`.
    #[inline]
    pub fn value_at_mut(&mut self, idx: usize) -> &mut V {
        &mut self.entries[idx].1
    }

    /// Index of the first entry whose key is greater than `pos`. O(log n).
    #[inline]
    pub fn upper_bound(&self, pos: T) -> usize {
        self.entries.partition_point(|(k, _)| *k <= pos)
    }

    /// Index of the entry stored exactly at `key`.
    pub fn find(&self, key: T) -> Option<usize> {
        let upper = self.upper_bound(key);
        (upper > 0 && self.entries[upper - 1].0 == key).then(|| upper - 1)
    }

    /// Value stored exactly at `key`.
    pub fn get(&self, key: T) -> Option<&V> {
        self.find(key).map(|idx| &self.entries[idx].1)
    }

    /// Stored values contributing at `pos`. O(log n).
    #[inline]
    pub fn select(&self, pos: T) -> Selection<'_, T, V> {
        self.interpolator.select(&self.entries, pos)
    }

    /// Stored values contributing at `pos`, given its upper index. O(1).
    #[inline]
    pub fn select_at(&self, upper: usize, pos: T) -> Selection<'_, T, V> {
        self.interpolator.select_at(&self.entries, upper, pos)
    }

    /// Index form of `select_at`. O(1).
    #[inline]
    pub fn locate_at(&self, upper: usize, pos: T) -> Located<T> {
        self.interpolator.locate(&self.entries, upper, pos)
    }

    /// Store `value` at `key`, replacing an existing entry. Returns its index.
    pub fn insert(&mut self, key: T, value: V) -> usize {
        let upper = self.upper_bound(key);
        self.insert_at_upper(upper, key, value)
    }

    /// Store `value` at `key`, assuming keys arrive in increasing order.
    ///
    /// Pushes in O(1) when `key` is past the last key, otherwise falls back to
    /// `insert`.
    pub fn append(&mut self, key: T, value: V) -> usize {
        match self.last_key() {
            Some(last) if key <= last => self.insert(key, value),
            _ => {
                self.entries.push((key, value));
                self.entries.len() - 1
            }
        }
    }

    /// Index of the entry at `key`, creating it with `make` if absent.
    pub fn entry_or_insert_with(&mut self, key: T, make: impl FnOnce() -> V) -> usize {
        let upper = self.upper_bound(key);
        if upper > 0 && self.entries[upper - 1].0 == key {
            upper - 1
        } else {
            self.entries.insert(upper, (key, make()));
            upper
        }
    }

    /// Insert or replace at `key` given its upper index.
    fn insert_at_upper(&mut self, upper: usize, key: T, value: V) -> usize {
        debug_assert!(!key.is_nan(), "NaN keys cannot be ordered");
        if upper > 0 && self.entries[upper - 1].0 == key {
            self.entries[upper - 1].1 = value;
            upper - 1
        } else {
            self.entries.insert(upper, (key, value));
            upper
        }
    }
}

impl<T: MappingFloat> InterpolatedMap<T, T> {
    /// Interpolated value at `pos`. O(log n).
    #[inline]
    pub fn interpolated_value(&self, pos: T) -> T {
        self.select(pos).evaluate().0
    }
}

// ============================================================================
// AxisCursor
// ============================================================================

/// Position on one axis of an `InterpolatedMap`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisCursor<T> {
    position: T,
    upper: usize,
}

impl<T: MappingFloat> AxisCursor<T> {
    /// Cursor positioned at `pos` in `map`. O(log n).
    pub fn at<V>(map: &InterpolatedMap<T, V>, pos: T) -> Self {
        Self {
            position: pos,
            upper: map.upper_bound(pos),
        }
    }

    /// Cursor at the first entry of `map` (or at zero when it is empty).
    pub fn begin<V>(map: &InterpolatedMap<T, V>) -> Self {
        let mut cursor = Self {
            position: T::zero(),
            upper: 0,
        };
        cursor.jump_to_begin(map);
        cursor
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> T {
        self.position
    }

    /// Index of the first entry after the position.
    #[inline]
    pub fn upper(&self) -> usize {
        self.upper
    }

    /// Move to the first entry. An empty map leaves the position unchanged.
    pub fn jump_to_begin<V>(&mut self, map: &InterpolatedMap<T, V>) {
        match map.first_key() {
            Some(first) => {
                self.position = first;
                self.upper = 1;
            }
            None => self.upper = 0,
        }
    }

    /// Move forward to `pos`, walking past skipped entries. O(k).
    pub fn iterate_to<V>(&mut self, map: &InterpolatedMap<T, V>, pos: T) {
        debug_assert!(
            !(pos < self.position),
            "iterate_to target lies before the current position"
        );
        self.position = pos;
        let entries = map.entries();
        while self.upper < entries.len() && entries[self.upper].0 <= pos {
            self.upper += 1;
        }
    }

    /// Move to the next stored entry.
    ///
    /// # Panics
    ///
    /// Panics if there is no next entry.
    pub fn next<V>(&mut self, map: &InterpolatedMap<T, V>) {
        assert!(
            self.has_next(map),
            "next() called on a cursor without a next entry"
        );
        self.position = map.key_at(self.upper);
        self.upper += 1;
    }

    /// Whether a stored entry follows the position.
    #[inline]
    pub fn has_next<V>(&self, map: &InterpolatedMap<T, V>) -> bool {
        self.upper < map.len()
    }

    /// Key of the next stored entry.
    #[inline]
    pub fn next_key<V>(&self, map: &InterpolatedMap<T, V>) -> Option<T> {
        map.entries().get(self.upper).map(|(k, _)| *k)
    }

    /// Whether the position lies within `[first key, last key]`.
    pub fn in_range<V>(&self, map: &InterpolatedMap<T, V>) -> bool {
        match (map.first_key(), map.last_key()) {
            (Some(first), Some(last)) => first <= self.position && self.position <= last,
            _ => false,
        }
    }

    /// Index of the entry stored exactly at the position.
    #[inline]
    pub fn exact_index<V>(&self, map: &InterpolatedMap<T, V>) -> Option<usize> {
        (self.upper > 0 && map.key_at(self.upper - 1) == self.position).then(|| self.upper - 1)
    }

    /// Stored values contributing at the position. O(1).
    #[inline]
    pub fn select<'a, V>(&self, map: &'a InterpolatedMap<T, V>) -> Selection<'a, T, V> {
        map.select_at(self.upper, self.position)
    }

    /// Index form of `select`. O(1).
    #[inline]
    pub fn locate<V>(&self, map: &InterpolatedMap<T, V>) -> Located<T> {
        map.locate_at(self.upper, self.position)
    }

    /// Index of the entry at the position, creating it with `make` if absent.
    ///
    /// O(1) when the position is already stored or lies past the last key.
    pub fn entry_here<V>(
        &mut self,
        map: &mut InterpolatedMap<T, V>,
        make: impl FnOnce() -> V,
    ) -> usize {
        if let Some(idx) = self.exact_index(map) {
            return idx;
        }
        let idx = self.upper;
        map.entries.insert(idx, (self.position, make()));
        self.upper += 1;
        idx
    }
}
