//! Concrete leaf and multi-dimensional mappings.
//!
//! ## Purpose
//!
//! This module provides `Mapping`, the owned sampled function over a domain of
//! axes, and `ConstMapping`, the read-only interface shared with lazily defined
//! mappings (ephemeral blends, concatenations).
//!
//! ## Design notes
//!
//! * **One type for both shapes**: A one-axis domain is stored as a leaf node,
//!   larger domains as nested inner nodes. Callers never distinguish the two.
//! * **Owned tree**: A mapping exclusively owns its sub-mappings; `clone()` is
//!   a full deep copy.
//! * **Checked and unchecked reads**: `try_value` reports a missing outer axis
//!   as an error; `value` treats it as a broken precondition and panics.
//!
//! ## Key concepts
//!
//! * **Domain**: The `DimensionSet` the mapping is defined over. The most
//!   significant axis is stored outermost.
//! * **Key entry**: A stored `(position, value)` sample.
//! * **Slice**: What a multi-dimensional mapping presents at one coordinate of
//!   its outer axis (see `engine::interpolated`).
//!
//! ## Invariants
//!
//! * The domain is non-empty and never changes after construction.
//! * Setting a value at a stored key and reading it back is exact.
//!
//! ## Non-goals
//!
//! * This module does not combine mappings (see `evaluation`).

// External dependencies
use core::fmt;

// Internal dependencies
use crate::algorithms::container::AxisCursor;
use crate::algorithms::cursor::View;
use crate::algorithms::node::Node;
use crate::engine::interpolated::{InterpolatedMapping, Slice, SubMapping};
use crate::engine::iterator::{Entries, MappingIter, MappingIterMut};
use crate::engine::validator::Validator;
use crate::math::interpolation::{Interpolator, Located};
use crate::primitives::argument::Argument;
use crate::primitives::dimension::DimensionSet;
use crate::primitives::errors::MappingError;
use crate::primitives::float::MappingFloat;

// ============================================================================
// ConstMapping
// ============================================================================

/// Read-only sampled function over a domain.
pub trait ConstMapping<T: MappingFloat> {
    /// Axes the mapping is defined over.
    fn domain(&self) -> &DimensionSet;

    /// Value at `pos`, failing if `pos` lacks a required outer axis.
    fn try_value(&self, pos: &Argument<T>) -> Result<T, MappingError>;

    /// Value at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lacks a required outer axis.
    fn value(&self, pos: &Argument<T>) -> T {
        match self.try_value(pos) {
            Ok(v) => v,
            Err(err) => panic!("{}", err),
        }
    }

    /// Owned concrete mapping with the same key entries and values.
    fn materialize(&self) -> Mapping<T>;
}

// ============================================================================
// Mapping
// ============================================================================

/// Owned sampled function over a domain of axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping<T> {
    domain: DimensionSet,
    root: Node<T>,
    interpolator: Interpolator<T>,
}

impl<T: MappingFloat> Mapping<T> {
    /// Create an empty mapping.
    pub fn new(domain: DimensionSet, interpolator: Interpolator<T>) -> Result<Self, MappingError> {
        Validator::validate_domain(&domain)?;
        Validator::validate_out_of_range(interpolator.out_of_range())?;
        Ok(Self::from_validated(domain, interpolator))
    }

    pub(crate) fn from_validated(domain: DimensionSet, interpolator: Interpolator<T>) -> Self {
        let root = Node::empty(domain.as_slice(), interpolator);
        Self {
            domain,
            root,
            interpolator,
        }
    }

    pub(crate) fn from_node(domain: DimensionSet, root: Node<T>) -> Self {
        let interpolator = root.interpolator();
        Self {
            domain,
            root,
            interpolator,
        }
    }

    /// Axes the mapping is defined over.
    #[inline]
    pub fn domain(&self) -> &DimensionSet {
        &self.domain
    }

    /// Interpolation policy shared by every level of the mapping.
    #[inline]
    pub fn interpolator(&self) -> Interpolator<T> {
        self.interpolator
    }

    /// Whether the mapping has more than one axis.
    #[inline]
    pub fn is_multi_dimensional(&self) -> bool {
        self.domain.len() > 1
    }

    /// Number of stored key entries.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether the mapping stores no key entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Value at `pos`, failing if `pos` lacks a required outer axis.
    pub fn try_value(&self, pos: &Argument<T>) -> Result<T, MappingError> {
        self.root.value(self.domain.as_slice(), pos)
    }

    /// Value at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lacks a required outer axis.
    pub fn value(&self, pos: &Argument<T>) -> T {
        match self.try_value(pos) {
            Ok(v) => v,
            Err(err) => panic!("{}", err),
        }
    }

    /// Store `value` at `pos`, creating the key entry (and slices) if absent.
    pub fn set_value(&mut self, pos: &Argument<T>, value: T) {
        self.root.set_value(self.domain.as_slice(), pos, value);
    }

    /// Store `value` at `pos`, assuming positions arrive in increasing order.
    ///
    /// O(1) amortized for in-order positions; otherwise behaves like `set_value`.
    pub fn append_value(&mut self, pos: &Argument<T>, value: T) {
        self.root.append_value(self.domain.as_slice(), pos, value);
    }

    /// Read-only iterator at the smallest key entry.
    pub fn iter(&self) -> MappingIter<'_, T> {
        MappingIter::begin(View::Node(&self.root), self.domain.as_slice())
    }

    /// Read-only iterator at `pos`.
    pub fn iter_at(&self, pos: &Argument<T>) -> MappingIter<'_, T> {
        MappingIter::at(View::Node(&self.root), self.domain.as_slice(), pos)
    }

    /// Mutable iterator at the smallest key entry.
    pub fn iter_mut(&mut self) -> MappingIterMut<'_, T> {
        MappingIterMut::begin(&mut self.root, self.domain.as_slice())
    }

    /// Mutable iterator at `pos`.
    pub fn iter_mut_at(&mut self, pos: &Argument<T>) -> MappingIterMut<'_, T> {
        MappingIterMut::at(&mut self.root, self.domain.as_slice(), pos)
    }

    /// All key entries as `(position, value)` in iteration order.
    pub fn entries(&self) -> Entries<'_, T> {
        self.iter().entries()
    }

    /// The sub-mapping presented at `coord` on the outer axis.
    ///
    /// Returns `None` for one-axis mappings. Between two stored slices the
    /// result is an ephemeral blend of both neighbours.
    pub fn slice(&self, coord: T) -> Option<Slice<'_, T>> {
        let Node::Inner(map) = &self.root else {
            return None;
        };
        let outer = self.domain.outermost()?;
        let inner = self.domain.iter().filter(|&d| d != outer).collect::<DimensionSet>();
        let located = AxisCursor::at(map, coord).locate(map);
        Some(match located {
            Located::Exact(i) | Located::Single(i) => {
                Slice::Stored(SubMapping::new(inner, map.value_at(i)))
            }
            Located::Blend { low, high, factor } => Slice::Interpolated(InterpolatedMapping::new(
                inner,
                map.value_at(low),
                map.value_at(high),
                factor,
            )),
            Located::Fixed(v) => Slice::Constant(v),
            Located::Empty => Slice::Constant(T::zero()),
        })
    }
}

impl<T: MappingFloat> ConstMapping<T> for Mapping<T> {
    fn domain(&self) -> &DimensionSet {
        &self.domain
    }

    fn try_value(&self, pos: &Argument<T>) -> Result<T, MappingError> {
        Mapping::try_value(self, pos)
    }

    fn materialize(&self) -> Mapping<T> {
        self.clone()
    }
}

impl<T: MappingFloat> fmt::Display for Mapping<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mapping over {}:", self.domain)?;
        for (pos, value) in self.entries() {
            writeln!(f, "  {} -> {}", pos, value)?;
        }
        Ok(())
    }
}
