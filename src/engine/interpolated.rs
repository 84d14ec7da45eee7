//! Borrowed sub-mapping views and the ephemeral interpolated mapping.
//!
//! ## Purpose
//!
//! A multi-dimensional mapping queried at one outer-axis coordinate presents a
//! mapping over the remaining axes. At a stored coordinate that is the stored
//! sub-mapping; strictly between two stored coordinates it is a linear blend of
//! both neighbours, computed on the fly and never stored.
//!
//! ## Design notes
//!
//! * **Borrowed views**: `SubMapping` and `InterpolatedMapping` borrow the
//!   nodes they present and cannot outlive the owning mapping.
//! * **Read-only**: Neither view offers mutation. `materialize()` produces an
//!   owned, mutable copy.
//! * **Recursive blend**: Blending applies at every inner level, so two
//!   multi-dimensional neighbours blend correctly.
//!
//! ## Key concepts
//!
//! * **Blend factor**: `f` in (0, 1); the value is `low * (1 - f) + high * f`.
//! * **Key entries of a blend**: The union of both neighbours' key entries.
//!
//! ## Non-goals
//!
//! * This module does not store blended results implicitly.

// Internal dependencies
use crate::algorithms::cursor::View;
use crate::algorithms::node::Node;
use crate::engine::iterator::MappingIter;
use crate::engine::mapping::{ConstMapping, Mapping};
use crate::math::interpolation::blend;
use crate::primitives::argument::Argument;
use crate::primitives::dimension::DimensionSet;
use crate::primitives::errors::MappingError;
use crate::primitives::float::MappingFloat;

// ============================================================================
// SubMapping
// ============================================================================

/// Stored sub-mapping borrowed from a multi-dimensional mapping.
#[derive(Debug, Clone)]
pub struct SubMapping<'a, T> {
    domain: DimensionSet,
    node: &'a Node<T>,
}

impl<'a, T: MappingFloat> SubMapping<'a, T> {
    pub(crate) fn new(domain: DimensionSet, node: &'a Node<T>) -> Self {
        Self { domain, node }
    }

    /// Number of stored key entries.
    pub fn len(&self) -> usize {
        self.node.len()
    }

    /// Whether the sub-mapping stores no key entries.
    pub fn is_empty(&self) -> bool {
        self.node.is_empty()
    }

    /// Read-only iterator at the smallest key entry.
    pub fn iter(&self) -> MappingIter<'_, T> {
        MappingIter::begin(View::Node(self.node), self.domain.as_slice())
    }
}

impl<T: MappingFloat> ConstMapping<T> for SubMapping<'_, T> {
    fn domain(&self) -> &DimensionSet {
        &self.domain
    }

    fn try_value(&self, pos: &Argument<T>) -> Result<T, MappingError> {
        self.node.value(self.domain.as_slice(), pos)
    }

    fn materialize(&self) -> Mapping<T> {
        Mapping::from_node(self.domain.clone(), self.node.clone())
    }
}

// ============================================================================
// InterpolatedMapping
// ============================================================================

/// Linear blend of two neighbouring sub-mappings.
#[derive(Debug, Clone)]
pub struct InterpolatedMapping<'a, T> {
    domain: DimensionSet,
    low: &'a Node<T>,
    high: &'a Node<T>,
    factor: T,
}

impl<'a, T: MappingFloat> InterpolatedMapping<'a, T> {
    pub(crate) fn new(domain: DimensionSet, low: &'a Node<T>, high: &'a Node<T>, factor: T) -> Self {
        Self {
            domain,
            low,
            high,
            factor,
        }
    }

    /// Weight of the upper neighbour.
    #[inline]
    pub fn factor(&self) -> T {
        self.factor
    }

    /// Read-only iterator over the union of both neighbours' key entries.
    pub fn iter(&self) -> MappingIter<'_, T> {
        MappingIter::begin(self.view(), self.domain.as_slice())
    }

    /// Read-only iterator at `pos`.
    pub fn iter_at(&self, pos: &Argument<T>) -> MappingIter<'_, T> {
        MappingIter::at(self.view(), self.domain.as_slice(), pos)
    }

    #[inline]
    fn view(&self) -> View<'a, T> {
        View::Blend {
            low: self.low,
            high: self.high,
            factor: self.factor,
        }
    }
}

impl<T: MappingFloat> ConstMapping<T> for InterpolatedMapping<'_, T> {
    fn domain(&self) -> &DimensionSet {
        &self.domain
    }

    fn try_value(&self, pos: &Argument<T>) -> Result<T, MappingError> {
        let axes = self.domain.as_slice();
        Ok(blend(
            self.low.value(axes, pos)?,
            self.high.value(axes, pos)?,
            self.factor,
        ))
    }

    fn materialize(&self) -> Mapping<T> {
        let mut result = Mapping::from_validated(self.domain.clone(), self.low.interpolator());
        for (pos, value) in self.iter().entries() {
            result.append_value(&pos, value);
        }
        tracing::debug!(entries = result.len(), "materialized interpolated mapping");
        result
    }
}

// ============================================================================
// Slice
// ============================================================================

/// What a multi-dimensional mapping presents at one outer-axis coordinate.
#[derive(Debug, Clone)]
pub enum Slice<'a, T> {
    /// A stored sub-mapping.
    Stored(SubMapping<'a, T>),

    /// A blend of the two neighbouring stored sub-mappings.
    Interpolated(InterpolatedMapping<'a, T>),

    /// A constant beyond all slices (or zero for an empty mapping).
    Constant(T),
}

impl<T: MappingFloat> Slice<'_, T> {
    /// Value at `pos` on the inner axes.
    pub fn try_value(&self, pos: &Argument<T>) -> Result<T, MappingError> {
        match self {
            Slice::Stored(sub) => sub.try_value(pos),
            Slice::Interpolated(blended) => blended.try_value(pos),
            Slice::Constant(v) => Ok(*v),
        }
    }

    /// Whether this slice is stored in the owning mapping.
    pub fn is_stored(&self) -> bool {
        matches!(self, Slice::Stored(_))
    }
}
