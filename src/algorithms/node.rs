//! Recursive storage tree behind every concrete mapping.
//!
//! ## Purpose
//!
//! A mapping over N axes is stored as a tree: the outermost axis maps to
//! sub-mappings over the remaining N-1 axes, bottoming out in a leaf that maps
//! the innermost axis to scalar values. This module implements that tree and
//! its point operations (evaluate, set, append).
//!
//! ## Design notes
//!
//! * **Tagged node**: `Node` is either a `Leaf` (scalar values) or an `Inner`
//!   node (owned child nodes). No run-time type inspection is needed.
//! * **Axes passed down**: Nodes do not store their axis. Callers pass the
//!   domain's axes (least significant first); a node walks the last one and
//!   hands the rest to its children.
//! * **Exclusive ownership**: Children are owned by value, so cloning a node is
//!   a full deep copy.
//!
//! ## Key concepts
//!
//! * **Slice**: The child stored at one outer-axis coordinate.
//! * **Blended slices**: Between two slices a linear interpolator evaluates both
//!   neighbours and blends the results instead of materialising a new child.
//!
//! ## Invariants
//!
//! * A node walked with one axis is a `Leaf`; with more axes it is `Inner`.
//! * Every node in one tree shares the same `Interpolator`.
//!
//! ## Non-goals
//!
//! * This module does not track positions (see `algorithms::cursor`).

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::algorithms::container::InterpolatedMap;
use crate::math::interpolation::{blend, Interpolator, Selection};
use crate::primitives::argument::Argument;
use crate::primitives::dimension::Dimension;
use crate::primitives::errors::MappingError;
use crate::primitives::float::MappingFloat;

/// One level of the mapping tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<T> {
    /// Innermost axis to scalar values.
    Leaf(InterpolatedMap<T, T>),

    /// Outer axis to child nodes over the remaining axes.
    Inner(InterpolatedMap<T, Node<T>>),
}

/// Split axes (least significant first) into this level's axis and the rest.
#[inline]
pub(crate) fn split_axes(axes: &[Dimension]) -> (Dimension, &[Dimension]) {
    match axes.split_last() {
        Some((&axis, rest)) => (axis, rest),
        None => (Dimension::TIME, &[]),
    }
}

impl<T: MappingFloat> Node<T> {
    /// An empty node for the given axes.
    pub fn empty(axes: &[Dimension], interpolator: Interpolator<T>) -> Self {
        if axes.len() > 1 {
            Node::Inner(InterpolatedMap::new(interpolator))
        } else {
            Node::Leaf(InterpolatedMap::new(interpolator))
        }
    }

    /// Interpolation policy of this node.
    pub fn interpolator(&self) -> Interpolator<T> {
        match self {
            Node::Leaf(map) => map.interpolator(),
            Node::Inner(map) => map.interpolator(),
        }
    }

    /// Whether the node stores nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Leaf(map) => map.is_empty(),
            Node::Inner(map) => map.is_empty(),
        }
    }

    /// Number of scalar key entries in the whole subtree.
    pub fn len(&self) -> usize {
        match self {
            Node::Leaf(map) => map.len(),
            Node::Inner(map) => map.values().map(Node::len).sum(),
        }
    }

    /// Value at `pos`.
    ///
    /// Inner nodes require `pos` to carry their axis; leaves read a missing
    /// axis as zero.
    pub fn value(&self, axes: &[Dimension], pos: &Argument<T>) -> Result<T, MappingError> {
        let (axis, rest) = split_axes(axes);
        match self {
            Node::Leaf(map) => Ok(map.interpolated_value(pos.get(axis))),
            Node::Inner(map) => {
                let x = pos
                    .try_get(axis)
                    .ok_or(MappingError::MissingDimension { dimension: axis })?;
                match map.select(x) {
                    Selection::Exact(child) | Selection::Single(child) => child.value(rest, pos),
                    Selection::Blend { low, high, factor } => Ok(blend(
                        low.value(rest, pos)?,
                        high.value(rest, pos)?,
                        factor,
                    )),
                    Selection::Fixed(v) => Ok(v),
                    Selection::Empty => Ok(T::zero()),
                }
            }
        }
    }

    /// Store `value` at `pos`, creating slices as needed.
    pub fn set_value(&mut self, axes: &[Dimension], pos: &Argument<T>, value: T) {
        let (axis, rest) = split_axes(axes);
        match self {
            Node::Leaf(map) => {
                map.insert(pos.get(axis), value);
            }
            Node::Inner(map) => {
                let interpolator = map.interpolator();
                let idx = map.entry_or_insert_with(pos.get(axis), || {
                    Node::empty(rest, interpolator)
                });
                map.value_at_mut(idx).set_value(rest, pos, value);
            }
        }
    }

    /// Store `value` at `pos`, assuming positions arrive in increasing order.
    ///
    /// Out-of-order positions fall back to `set_value`.
    pub fn append_value(&mut self, axes: &[Dimension], pos: &Argument<T>, value: T) {
        let (axis, rest) = split_axes(axes);
        match self {
            Node::Leaf(map) => {
                map.append(pos.get(axis), value);
            }
            Node::Inner(map) => {
                let x = pos.get(axis);
                let interpolator = map.interpolator();
                let ordering = map.last_key().and_then(|last| x.partial_cmp(&last));
                let idx = match ordering {
                    Some(Ordering::Equal) => map.len() - 1,
                    Some(Ordering::Less) => {
                        map.entry_or_insert_with(x, || Node::empty(rest, interpolator))
                    }
                    _ => map.append(x, Node::empty(rest, interpolator)),
                };
                map.value_at_mut(idx).append_value(rest, pos, value);
            }
        }
    }
}
