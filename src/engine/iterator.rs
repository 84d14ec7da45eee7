//! Read-only and mutable mapping iterators.
//!
//! ## Purpose
//!
//! This module exposes the mapping iterator protocol to callers: positioned
//! traversal of key entries in increasing `Argument` order, interpolated reads
//! at arbitrary positions and, for concrete mappings, in-place writes.
//!
//! ## Design notes
//!
//! * **Protocol trait**: `MappingIterator` is implemented by both iterator
//!   types so algorithms can be written once.
//! * **Borrowing**: Iterators borrow the mapping they walk and never own it.
//!   Read-only iterators cannot mutate; only `MappingIterMut` has `set_value`.
//! * **Std interop**: `Entries` adapts a read-only iterator to
//!   `core::iter::Iterator`, yielding `(position, value)` per key entry.
//!
//! ## Key concepts
//!
//! * **Position**: Always a full `Argument`. Axes the walked view does not
//!   cover keep the coordinates of the last jump target.
//! * **Costs**: `jump_to` is O(log n) per axis, `next`/`has_next`/`value` are
//!   O(1) per axis, `iterate_to` is O(k) in the entries skipped.
//!
//! ## Invariants
//!
//! * Repeated `next()` from `jump_to_begin()` yields strictly increasing
//!   positions.
//! * `iterate_to` targets never lie before the current position.
//!
//! ## Non-goals
//!
//! * This module does not materialise combined mappings.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::algorithms::cursor::{Cursor, View};
use crate::algorithms::node::Node;
use crate::primitives::argument::Argument;
use crate::primitives::dimension::Dimension;
use crate::primitives::float::MappingFloat;

// ============================================================================
// Protocol
// ============================================================================

/// Positioned traversal of a mapping's key entries.
pub trait MappingIterator<T: MappingFloat> {
    /// Current position.
    fn position(&self) -> &Argument<T>;

    /// Position `next()` would move to, if any.
    fn next_position(&self) -> Option<Argument<T>>;

    /// Move to an arbitrary position.
    fn jump_to(&mut self, pos: &Argument<T>);

    /// Move to the smallest key entry (no-op on an empty mapping).
    fn jump_to_begin(&mut self);

    /// Move forward to `pos`, which must not lie before the current position.
    fn iterate_to(&mut self, pos: &Argument<T>);

    /// Move to the next key entry.
    ///
    /// # Panics
    ///
    /// Panics if `has_next()` is false.
    fn next(&mut self);

    /// Whether a key entry follows the current position.
    fn has_next(&self) -> bool;

    /// Whether the position lies within the stored key entries.
    fn in_range(&self) -> bool;

    /// Value at the current position.
    fn value(&self) -> T;
}

// ============================================================================
// Shared walker
// ============================================================================

/// Cursor plus the full position it denotes.
#[derive(Debug, Clone)]
struct Walker<T> {
    cursor: Cursor<T>,
    position: Argument<T>,
}

impl<T: MappingFloat> Walker<T> {
    fn begin(view: View<'_, T>, axes: &[Dimension]) -> Self {
        let mut position = Argument::default();
        for &axis in axes {
            position.set(axis, T::zero());
        }
        let mut walker = Self {
            cursor: Cursor::begin(view, axes),
            position,
        };
        walker.refresh(view, axes);
        walker
    }

    fn at(view: View<'_, T>, axes: &[Dimension], pos: &Argument<T>) -> Self {
        let mut walker = Self {
            cursor: Cursor::at(view, axes, pos),
            position: pos.clone(),
        };
        walker.refresh(view, axes);
        walker
    }

    #[inline]
    fn refresh(&mut self, view: View<'_, T>, axes: &[Dimension]) {
        self.cursor.write_position(view, axes, &mut self.position);
    }

    fn next_position(&self, view: View<'_, T>, axes: &[Dimension]) -> Option<Argument<T>> {
        let next = self.cursor.next_position(view, axes)?;
        let mut pos = self.position.clone();
        pos.assign_from(&next, axes);
        Some(pos)
    }

    fn jump_to(&mut self, view: View<'_, T>, axes: &[Dimension], pos: &Argument<T>) {
        self.cursor = Cursor::at(view, axes, pos);
        self.position = pos.clone();
        self.refresh(view, axes);
    }

    fn jump_to_begin(&mut self, view: View<'_, T>, axes: &[Dimension]) {
        self.cursor = Cursor::begin(view, axes);
        self.refresh(view, axes);
    }

    fn iterate_to(&mut self, view: View<'_, T>, axes: &[Dimension], pos: &Argument<T>) {
        debug_assert!(
            pos.compare_on(&self.position, axes) != Ordering::Less,
            "iterate_to target {} lies before the current position {}",
            pos,
            self.position
        );
        self.cursor.iterate_to(view, axes, pos);
        self.position = pos.clone();
        self.refresh(view, axes);
    }

    fn next(&mut self, view: View<'_, T>, axes: &[Dimension]) {
        assert!(
            self.cursor.has_next(view, axes),
            "next() called at {} without a next entry",
            self.position
        );
        self.cursor.next(view, axes);
        self.refresh(view, axes);
    }
}

// ============================================================================
// Read-only iterator
// ============================================================================

/// Read-only iterator over a mapping or a mapping view.
#[derive(Debug, Clone)]
pub struct MappingIter<'a, T> {
    view: View<'a, T>,
    axes: &'a [Dimension],
    walker: Walker<T>,
}

impl<'a, T: MappingFloat> MappingIter<'a, T> {
    pub(crate) fn begin(view: View<'a, T>, axes: &'a [Dimension]) -> Self {
        Self {
            view,
            axes,
            walker: Walker::begin(view, axes),
        }
    }

    pub(crate) fn at(view: View<'a, T>, axes: &'a [Dimension], pos: &Argument<T>) -> Self {
        Self {
            view,
            axes,
            walker: Walker::at(view, axes, pos),
        }
    }

    /// Adapt into a `core::iter::Iterator` over the remaining key entries,
    /// starting with the current position if it is in range.
    pub fn entries(self) -> Entries<'a, T> {
        Entries {
            iter: self,
            started: false,
        }
    }
}

impl<T: MappingFloat> MappingIterator<T> for MappingIter<'_, T> {
    #[inline]
    fn position(&self) -> &Argument<T> {
        &self.walker.position
    }

    fn next_position(&self) -> Option<Argument<T>> {
        self.walker.next_position(self.view, self.axes)
    }

    fn jump_to(&mut self, pos: &Argument<T>) {
        self.walker.jump_to(self.view, self.axes, pos);
    }

    fn jump_to_begin(&mut self) {
        self.walker.jump_to_begin(self.view, self.axes);
    }

    fn iterate_to(&mut self, pos: &Argument<T>) {
        self.walker.iterate_to(self.view, self.axes, pos);
    }

    fn next(&mut self) {
        self.walker.next(self.view, self.axes);
    }

    #[inline]
    fn has_next(&self) -> bool {
        self.walker.cursor.has_next(self.view, self.axes)
    }

    #[inline]
    fn in_range(&self) -> bool {
        self.walker.cursor.in_range(self.view, self.axes)
    }

    #[inline]
    fn value(&self) -> T {
        self.walker.cursor.value(self.view, self.axes)
    }
}

// ============================================================================
// Mutable iterator
// ============================================================================

/// Iterator over a concrete mapping that can write at its position.
#[derive(Debug)]
pub struct MappingIterMut<'a, T> {
    root: &'a mut Node<T>,
    axes: &'a [Dimension],
    walker: Walker<T>,
}

impl<'a, T: MappingFloat> MappingIterMut<'a, T> {
    pub(crate) fn begin(root: &'a mut Node<T>, axes: &'a [Dimension]) -> Self {
        let walker = Walker::begin(View::Node(&*root), axes);
        Self { root, axes, walker }
    }

    pub(crate) fn at(root: &'a mut Node<T>, axes: &'a [Dimension], pos: &Argument<T>) -> Self {
        let walker = Walker::at(View::Node(&*root), axes, pos);
        Self { root, axes, walker }
    }

    /// Store `value` at the current position, creating the key entry if absent.
    ///
    /// O(1) amortized when the position is already stored or lies past the
    /// last key entry; out-of-order positions shift later entries.
    pub fn set_value(&mut self, value: T) {
        self.walker
            .cursor
            .set_value(self.root, self.axes, &self.walker.position, value);
    }
}

impl<T: MappingFloat> MappingIterator<T> for MappingIterMut<'_, T> {
    #[inline]
    fn position(&self) -> &Argument<T> {
        &self.walker.position
    }

    fn next_position(&self) -> Option<Argument<T>> {
        self.walker.next_position(View::Node(&*self.root), self.axes)
    }

    fn jump_to(&mut self, pos: &Argument<T>) {
        self.walker.jump_to(View::Node(&*self.root), self.axes, pos);
    }

    fn jump_to_begin(&mut self) {
        self.walker.jump_to_begin(View::Node(&*self.root), self.axes);
    }

    fn iterate_to(&mut self, pos: &Argument<T>) {
        self.walker.iterate_to(View::Node(&*self.root), self.axes, pos);
    }

    fn next(&mut self) {
        self.walker.next(View::Node(&*self.root), self.axes);
    }

    #[inline]
    fn has_next(&self) -> bool {
        self.walker.cursor.has_next(View::Node(&*self.root), self.axes)
    }

    #[inline]
    fn in_range(&self) -> bool {
        self.walker.cursor.in_range(View::Node(&*self.root), self.axes)
    }

    #[inline]
    fn value(&self) -> T {
        self.walker.cursor.value(View::Node(&*self.root), self.axes)
    }
}

// ============================================================================
// Std adapter
// ============================================================================

/// `core::iter::Iterator` over key entries as `(position, value)` pairs.
#[derive(Debug, Clone)]
pub struct Entries<'a, T> {
    iter: MappingIter<'a, T>,
    started: bool,
}

impl<T: MappingFloat> Iterator for Entries<'_, T> {
    type Item = (Argument<T>, T);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            if self.iter.in_range() {
                return Some((self.iter.position().clone(), self.iter.value()));
            }
        }
        if !self.iter.has_next() {
            return None;
        }
        MappingIterator::next(&mut self.iter);
        Some((self.iter.position().clone(), self.iter.value()))
    }
}
