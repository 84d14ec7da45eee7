//! Lazy combination of a reference mapping with further mappings.
//!
//! ## Purpose
//!
//! `ConcatMapping` combines a reference mapping with any number of other
//! mappings through one binary operator without building a new mapping up
//! front. Point queries fold the operator per call; `materialize()` runs the
//! eager pairwise algorithm once and returns an owned result.
//!
//! ## Design notes
//!
//! * **Explicit materialisation**: Iteration requires calling `materialize()`
//!   first, so the cost of the eager algorithm is always visible at the call
//!   site.
//! * **Borrowed operands**: The combinator borrows every operand and owns only
//!   the operator.
//!
//! ## Invariants
//!
//! * Every added mapping's domain is a subset of the reference domain.
//!
//! ## Non-goals
//!
//! * This module does not cache materialised results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::mapping::{ConstMapping, Mapping};
use crate::engine::validator::Validator;
use crate::evaluation::operators::apply_element_wise_operator;
use crate::math::interpolation::OutOfRange;
use crate::primitives::argument::Argument;
use crate::primitives::dimension::DimensionSet;
use crate::primitives::errors::MappingError;
use crate::primitives::float::MappingFloat;

/// A reference mapping combined with further mappings by `op`, left to right.
#[derive(Debug, Clone)]
pub struct ConcatMapping<'a, T, F> {
    reference: &'a Mapping<T>,
    others: Vec<&'a Mapping<T>>,
    op: F,
    out_of_range: OutOfRange<T>,
}

impl<'a, T, F> ConcatMapping<'a, T, F>
where
    T: MappingFloat,
    F: Fn(T, T) -> T,
{
    /// Combinator over `reference` alone.
    pub fn new(reference: &'a Mapping<T>, op: F) -> Self {
        Self {
            reference,
            others: Vec::new(),
            op,
            out_of_range: OutOfRange::Continue,
        }
    }

    /// Fixed value the materialised result returns beyond its key entries.
    pub fn with_out_of_range(mut self, value: T) -> Self {
        self.out_of_range = OutOfRange::Value(value);
        self
    }

    /// Add an operand. Its domain must be a subset of the reference domain.
    pub fn add_mapping(&mut self, mapping: &'a Mapping<T>) -> Result<(), MappingError> {
        Validator::validate_subdomain(mapping.domain(), self.reference.domain(), "concatenation")?;
        self.others.push(mapping);
        Ok(())
    }

    /// Number of operands besides the reference.
    pub fn len(&self) -> usize {
        self.others.len()
    }

    /// Whether only the reference mapping is present.
    pub fn is_empty(&self) -> bool {
        self.others.is_empty()
    }
}

impl<T, F> ConstMapping<T> for ConcatMapping<'_, T, F>
where
    T: MappingFloat,
    F: Fn(T, T) -> T,
{
    fn domain(&self) -> &DimensionSet {
        self.reference.domain()
    }

    fn try_value(&self, pos: &Argument<T>) -> Result<T, MappingError> {
        let mut acc = self.reference.try_value(pos)?;
        for other in &self.others {
            acc = (self.op)(acc, other.try_value(pos)?);
        }
        Ok(acc)
    }

    fn materialize(&self) -> Mapping<T> {
        tracing::debug!(operands = self.others.len() + 1, "materializing concatenation");
        let mut others = self.others.iter();
        let Some(first) = others.next() else {
            return self.reference.clone();
        };
        let mut acc = apply_element_wise_operator(self.reference, first, &self.op, self.out_of_range);
        for other in others {
            acc = apply_element_wise_operator(&acc, other, &self.op, self.out_of_range);
        }
        acc
    }
}
