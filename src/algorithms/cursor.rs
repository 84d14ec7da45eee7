//! Recursive cursor over a mapping tree or a blend of two trees.
//!
//! ## Purpose
//!
//! This module implements the iterator protocol shared by every mapping
//! iterator: jump, iterate forward, step to the next key entry, read the value
//! and, for concrete trees, write a value at the current position.
//!
//! ## Design notes
//!
//! * **Detached state**: A `Cursor` stores positions and indices only. Every
//!   call receives the `View` it walks, so one state machine serves read-only
//!   iterators, mutable iterators and ephemeral blends alike.
//! * **Composition**: An `Inner` cursor owns a sub-cursor for the slice at its
//!   current outer coordinate and exhausts it before advancing the outer axis
//!   (innermost axis fastest).
//! * **Ephemeral blends**: Between two stored slices the sub-cursor is a
//!   `Blend` cursor walking both neighbours in lockstep. Nothing is stored.
//!
//! ## Key concepts
//!
//! * **View**: What a cursor walks: a stored node, a blend of two stored nodes,
//!   or a constant (beyond all slices with a fixed out-of-range value).
//! * **Slice location**: An `Inner` cursor remembers how its outer coordinate
//!   resolved (`Located`), from which the sub-view is rebuilt in O(1).
//!
//! ## Invariants
//!
//! * A cursor is always used with the same view (or an identical one after
//!   mutation through `set_value`).
//! * The two sides of a `Blend` cursor are always at the same position.
//!
//! ## Non-goals
//!
//! * This module does not own positions as `Argument`s (see `engine::iterator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::algorithms::container::{AxisCursor, InterpolatedMap};
use crate::algorithms::node::{split_axes, Node};
use crate::math::interpolation::{blend, Located};
use crate::primitives::argument::Argument;
use crate::primitives::dimension::Dimension;
use crate::primitives::float::MappingFloat;

// ============================================================================
// View
// ============================================================================

/// What a cursor walks.
#[derive(Debug, Clone, Copy)]
pub enum View<'a, T> {
    /// A stored node.
    Node(&'a Node<T>),

    /// Linear blend of two stored nodes over the same axes.
    Blend {
        /// Node weighted by `1 - factor`.
        low: &'a Node<T>,
        /// Node weighted by `factor`.
        high: &'a Node<T>,
        /// Blend factor in (0, 1).
        factor: T,
    },

    /// Constant value without key entries.
    Constant(T),
}

/// Sub-view an inner map presents at a resolved outer coordinate.
#[inline]
fn sub_view<T: MappingFloat>(map: &InterpolatedMap<T, Node<T>>, slice: Located<T>) -> View<'_, T> {
    match slice {
        Located::Exact(i) | Located::Single(i) => View::Node(map.value_at(i)),
        Located::Blend { low, high, factor } => View::Blend {
            low: map.value_at(low),
            high: map.value_at(high),
            factor,
        },
        Located::Fixed(v) => View::Constant(v),
        Located::Empty => View::Constant(T::zero()),
    }
}

fn protocol_violation() -> ! {
    panic!("cursor used with a view it was not created for")
}

// ============================================================================
// Cursor
// ============================================================================

/// Position state of an iterator over a `View`.
#[derive(Debug, Clone, PartialEq)]
pub enum Cursor<T> {
    /// Cursor over a leaf node.
    Leaf(AxisCursor<T>),

    /// Cursor over an inner node.
    Inner {
        /// Position on the outer axis.
        outer: AxisCursor<T>,
        /// How the outer position resolved to a slice.
        slice: Located<T>,
        /// Cursor over that slice.
        sub: Box<Cursor<T>>,
    },

    /// Lockstep cursors over both sides of a blend.
    Blend {
        /// Cursor over the low node.
        low: Box<Cursor<T>>,
        /// Cursor over the high node.
        high: Box<Cursor<T>>,
    },

    /// Cursor over a constant view.
    Constant,
}

impl<T: MappingFloat> Cursor<T> {
    /// Cursor positioned at `pos`. O(log n) per axis.
    pub fn at(view: View<'_, T>, axes: &[Dimension], pos: &Argument<T>) -> Self {
        let (axis, rest) = split_axes(axes);
        match view {
            View::Constant(_) => Cursor::Constant,
            View::Node(Node::Leaf(map)) => Cursor::Leaf(AxisCursor::at(map, pos.get(axis))),
            View::Node(Node::Inner(map)) => {
                let outer = AxisCursor::at(map, pos.get(axis));
                let slice = outer.locate(map);
                let sub = Cursor::at(sub_view(map, slice), rest, pos);
                Cursor::Inner {
                    outer,
                    slice,
                    sub: Box::new(sub),
                }
            }
            View::Blend { low, high, .. } => Cursor::Blend {
                low: Box::new(Cursor::at(View::Node(low), axes, pos)),
                high: Box::new(Cursor::at(View::Node(high), axes, pos)),
            },
        }
    }

    /// Cursor at the smallest key entry of the view.
    pub fn begin(view: View<'_, T>, axes: &[Dimension]) -> Self {
        let (_, rest) = split_axes(axes);
        match view {
            View::Constant(_) => Cursor::Constant,
            View::Node(Node::Leaf(map)) => Cursor::Leaf(AxisCursor::begin(map)),
            View::Node(Node::Inner(map)) => {
                let outer = AxisCursor::begin(map);
                let slice = outer.locate(map);
                let sub = Cursor::begin(sub_view(map, slice), rest);
                Cursor::Inner {
                    outer,
                    slice,
                    sub: Box::new(sub),
                }
            }
            View::Blend { low, high, .. } => {
                let first_low = first_position(low, axes);
                let first_high = first_position(high, axes);
                let start = match (first_low, first_high) {
                    (Some(a), Some(b)) => {
                        if a.compare_on(&b, axes) == Ordering::Greater {
                            b
                        } else {
                            a
                        }
                    }
                    (Some(a), None) => a,
                    (None, Some(b)) => b,
                    (None, None) => {
                        return Cursor::Blend {
                            low: Box::new(Cursor::begin(View::Node(low), axes)),
                            high: Box::new(Cursor::begin(View::Node(high), axes)),
                        }
                    }
                };
                Cursor::at(view, axes, &start)
            }
        }
    }

    /// Move forward to `pos`, which must not lie before the current position.
    pub fn iterate_to(&mut self, view: View<'_, T>, axes: &[Dimension], pos: &Argument<T>) {
        let (axis, rest) = split_axes(axes);
        match (self, view) {
            (Cursor::Constant, _) => {}
            (Cursor::Leaf(cursor), View::Node(Node::Leaf(map))) => {
                cursor.iterate_to(map, pos.get(axis));
            }
            (Cursor::Inner { outer, slice, sub }, View::Node(Node::Inner(map))) => {
                let x = pos.get(axis);
                if x != outer.position() && pos.has(axis) {
                    outer.iterate_to(map, x);
                    *slice = outer.locate(map);
                    **sub = Cursor::at(sub_view(map, *slice), rest, pos);
                } else {
                    sub.iterate_to(sub_view(map, *slice), rest, pos);
                }
            }
            (Cursor::Blend { low, high }, View::Blend { low: l, high: h, .. }) => {
                low.iterate_to(View::Node(l), axes, pos);
                high.iterate_to(View::Node(h), axes, pos);
            }
            _ => protocol_violation(),
        }
    }

    /// Move to the next key entry.
    ///
    /// # Panics
    ///
    /// Panics if there is no next entry.
    pub fn next(&mut self, view: View<'_, T>, axes: &[Dimension]) {
        let (_, rest) = split_axes(axes);
        match (self, view) {
            (Cursor::Leaf(cursor), View::Node(Node::Leaf(map))) => cursor.next(map),
            (Cursor::Inner { outer, slice, sub }, View::Node(Node::Inner(map))) => {
                let current = sub_view(map, *slice);
                if sub.has_next(current, rest) {
                    sub.next(current, rest);
                } else {
                    outer.next(map);
                    *slice = outer.locate(map);
                    **sub = Cursor::begin(sub_view(map, *slice), rest);
                }
            }
            (Cursor::Blend { low, high }, View::Blend { low: l, high: h, .. }) => {
                let (lv, hv) = (View::Node(l), View::Node(h));
                let advance_low = match (low.next_position(lv, axes), high.next_position(hv, axes)) {
                    (Some(a), Some(b)) => a.compare_on(&b, axes) != Ordering::Greater,
                    (Some(_), None) => true,
                    (None, Some(_)) => false,
                    (None, None) => panic!("next() called on an iterator without a next entry"),
                };
                if advance_low {
                    low.next(lv, axes);
                    let pos = low.position(lv, axes);
                    high.iterate_to(hv, axes, &pos);
                } else {
                    high.next(hv, axes);
                    let pos = high.position(hv, axes);
                    low.iterate_to(lv, axes, &pos);
                }
            }
            (Cursor::Constant, _) => panic!("next() called on an iterator without a next entry"),
            _ => protocol_violation(),
        }
    }

    /// Whether a key entry follows the current position.
    pub fn has_next(&self, view: View<'_, T>, axes: &[Dimension]) -> bool {
        let (_, rest) = split_axes(axes);
        match (self, view) {
            (Cursor::Constant, _) => false,
            (Cursor::Leaf(cursor), View::Node(Node::Leaf(map))) => cursor.has_next(map),
            (Cursor::Inner { outer, slice, sub }, View::Node(Node::Inner(map))) => {
                outer.has_next(map) || sub.has_next(sub_view(map, *slice), rest)
            }
            (Cursor::Blend { low, high }, View::Blend { low: l, high: h, .. }) => {
                low.has_next(View::Node(l), axes) || high.has_next(View::Node(h), axes)
            }
            _ => protocol_violation(),
        }
    }

    /// Whether the current position lies within the stored key entries.
    pub fn in_range(&self, view: View<'_, T>, axes: &[Dimension]) -> bool {
        let (_, rest) = split_axes(axes);
        match (self, view) {
            (Cursor::Constant, _) => false,
            (Cursor::Leaf(cursor), View::Node(Node::Leaf(map))) => cursor.in_range(map),
            (Cursor::Inner { outer, slice, sub }, View::Node(Node::Inner(map))) => {
                outer.in_range(map) && sub.in_range(sub_view(map, *slice), rest)
            }
            (Cursor::Blend { low, high }, View::Blend { low: l, high: h, .. }) => {
                low.in_range(View::Node(l), axes) || high.in_range(View::Node(h), axes)
            }
            _ => protocol_violation(),
        }
    }

    /// Value at the current position. O(1) per axis.
    pub fn value(&self, view: View<'_, T>, axes: &[Dimension]) -> T {
        let (_, rest) = split_axes(axes);
        match (self, view) {
            (_, View::Constant(v)) => v,
            (Cursor::Leaf(cursor), View::Node(Node::Leaf(map))) => {
                cursor.select(map).evaluate().0
            }
            (Cursor::Inner { slice, sub, .. }, View::Node(Node::Inner(map))) => {
                sub.value(sub_view(map, *slice), rest)
            }
            (Cursor::Blend { low, high }, View::Blend { low: l, high: h, factor }) => blend(
                low.value(View::Node(l), axes),
                high.value(View::Node(h), axes),
                factor,
            ),
            _ => protocol_violation(),
        }
    }

    /// Write the current coordinates on the walked axes into `out`.
    pub fn write_position(&self, view: View<'_, T>, axes: &[Dimension], out: &mut Argument<T>) {
        let (axis, rest) = split_axes(axes);
        match (self, view) {
            (Cursor::Constant, _) => {}
            (Cursor::Leaf(cursor), View::Node(Node::Leaf(_))) => out.set(axis, cursor.position()),
            (Cursor::Inner { outer, slice, sub }, View::Node(Node::Inner(map))) => {
                out.set(axis, outer.position());
                sub.write_position(sub_view(map, *slice), rest, out);
            }
            (Cursor::Blend { low, .. }, View::Blend { low: l, .. }) => {
                low.write_position(View::Node(l), axes, out);
            }
            _ => protocol_violation(),
        }
    }

    /// Current coordinates on the walked axes.
    pub fn position(&self, view: View<'_, T>, axes: &[Dimension]) -> Argument<T> {
        let mut pos = Argument::default();
        self.write_position(view, axes, &mut pos);
        pos
    }

    /// Coordinates `next` would move to, if there is a next entry.
    pub fn next_position(&self, view: View<'_, T>, axes: &[Dimension]) -> Option<Argument<T>> {
        let (axis, rest) = split_axes(axes);
        match (self, view) {
            (Cursor::Constant, _) => None,
            (Cursor::Leaf(cursor), View::Node(Node::Leaf(map))) => cursor.next_key(map).map(|k| {
                let mut pos = Argument::default();
                pos.set(axis, k);
                pos
            }),
            (Cursor::Inner { outer, slice, sub }, View::Node(Node::Inner(map))) => {
                let current = sub_view(map, *slice);
                if sub.has_next(current, rest) {
                    let mut pos = sub.next_position(current, rest)?;
                    pos.set(axis, outer.position());
                    Some(pos)
                } else {
                    let key = outer.next_key(map)?;
                    let next_slice = View::Node(map.value_at(outer.upper()));
                    let mut pos = Cursor::begin(next_slice, rest).position(next_slice, rest);
                    pos.set(axis, key);
                    Some(pos)
                }
            }
            (Cursor::Blend { low, high }, View::Blend { low: l, high: h, .. }) => {
                match (
                    low.next_position(View::Node(l), axes),
                    high.next_position(View::Node(h), axes),
                ) {
                    (Some(a), Some(b)) => {
                        if a.compare_on(&b, axes) == Ordering::Greater {
                            Some(b)
                        } else {
                            Some(a)
                        }
                    }
                    (a, b) => a.or(b),
                }
            }
            _ => protocol_violation(),
        }
    }

    /// Store `value` at the current position of a cursor over `node`.
    ///
    /// Creates the key entry (and any missing slice) if absent. O(1) amortized
    /// when the position is stored or lies past the last key on every axis.
    /// `pos` is the full current position.
    pub fn set_value(&mut self, node: &mut Node<T>, axes: &[Dimension], pos: &Argument<T>, value: T) {
        let (_, rest) = split_axes(axes);
        match (self, node) {
            (Cursor::Leaf(cursor), Node::Leaf(map)) => {
                let idx = cursor.entry_here(map, || value);
                *map.value_at_mut(idx) = value;
            }
            (Cursor::Inner { outer, slice, sub }, Node::Inner(map)) => {
                let stored = matches!(slice, Located::Exact(_));
                let interpolator = map.interpolator();
                let idx = outer.entry_here(map, || Node::empty(rest, interpolator));
                if !stored {
                    tracing::trace!(slice = idx, "created slice on write");
                    *slice = Located::Exact(idx);
                    **sub = Cursor::at(View::Node(map.value_at(idx)), rest, pos);
                }
                sub.set_value(map.value_at_mut(idx), rest, pos, value);
            }
            _ => protocol_violation(),
        }
    }
}

/// Coordinates of the smallest key entry of `node`, if it has any.
pub fn first_position<T: MappingFloat>(node: &Node<T>, axes: &[Dimension]) -> Option<Argument<T>> {
    if node.is_empty() {
        return None;
    }
    let view = View::Node(node);
    Some(Cursor::begin(view, axes).position(view, axes))
}
