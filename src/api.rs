//! High-level API for building and combining mappings.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent builder
//! for empty mappings, the `create_mapping` factory and re-exports of every
//! public type and algorithm.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (linear
//!   interpolation, flat extrapolation).
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `MappingFloat` types for flexible precision.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MappingBuilder`] via `Mapping::builder()`.
//! 2. Chain configuration methods (`.domain()`, `.interpolation()`, etc.).
//! 3. Call `.build()` to validate and obtain an empty [`Mapping`].

// Publicly re-exported types
pub use crate::engine::interpolated::{InterpolatedMapping, Slice, SubMapping};
pub use crate::engine::iterator::{Entries, MappingIter, MappingIterMut, MappingIterator};
pub use crate::engine::mapping::{ConstMapping, Mapping};
pub use crate::evaluation::concat::ConcatMapping;
pub use crate::evaluation::discontinuity::add_discontinuity;
pub use crate::evaluation::extremes::{
    find_max, find_max_in, find_max_in_or, find_max_or, find_min, find_min_in, find_min_in_or,
    find_min_or,
};
pub use crate::evaluation::filled_up::filled_up;
pub use crate::evaluation::operators::{
    add, add_with_out_of_range, apply_element_wise_operator, divide, divide_with_out_of_range,
    multiply, multiply_with_out_of_range, subtract, subtract_with_out_of_range,
};
pub use crate::math::interpolation::{InterpolationMethod, Interpolator, OutOfRange};
pub use crate::math::time::{inc_next_position, post, pre};
pub use crate::primitives::argument::Argument;
pub use crate::primitives::dimension::{Dimension, DimensionRegistry, DimensionSet};
pub use crate::primitives::errors::MappingError;
pub use crate::primitives::float::MappingFloat;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for empty mappings.
#[derive(Debug, Clone)]
pub struct MappingBuilder<T> {
    /// Axes of the mapping.
    pub domain: DimensionSet,

    /// Interpolation method (default: Linear).
    pub interpolation: Option<InterpolationMethod>,

    /// Out-of-range policy (default: Continue).
    pub out_of_range: Option<OutOfRange<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: MappingFloat> Default for MappingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MappingFloat> MappingBuilder<T> {
    /// Create a new builder with default settings and an empty domain.
    pub fn new() -> Self {
        Self {
            domain: DimensionSet::new(),
            interpolation: None,
            out_of_range: None,
            duplicate_param: None,
        }
    }

    /// Add every axis of `domain`.
    pub fn domain(mut self, domain: DimensionSet) -> Self {
        self.domain = self.domain.union(&domain);
        self
    }

    /// Add one axis.
    pub fn dimension(mut self, dim: Dimension) -> Self {
        self.domain.insert(dim);
        self
    }

    /// Set the interpolation method.
    pub fn interpolation(mut self, method: InterpolationMethod) -> Self {
        if self.interpolation.is_some() {
            self.duplicate_param = Some("interpolation");
        }
        self.interpolation = Some(method);
        self
    }

    /// Return `value` for queries beyond all key entries.
    pub fn out_of_range(mut self, value: T) -> Self {
        if self.out_of_range.is_some() {
            self.duplicate_param = Some("out_of_range");
        }
        self.out_of_range = Some(OutOfRange::Value(value));
        self
    }

    /// Hold the nearest edge value for queries beyond all key entries.
    pub fn continue_out_of_range(mut self) -> Self {
        if self.out_of_range.is_some() {
            self.duplicate_param = Some("out_of_range");
        }
        self.out_of_range = Some(OutOfRange::Continue);
        self
    }

    /// Validate the configuration and create an empty mapping.
    pub fn build(self) -> Result<Mapping<T>, MappingError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(MappingError::DuplicateParameter { parameter });
        }
        let interpolator = Interpolator::new(
            self.interpolation.unwrap_or_default(),
            self.out_of_range.unwrap_or_default(),
        );
        Mapping::new(self.domain, interpolator)
    }
}

impl<T: MappingFloat> Mapping<T> {
    /// Start configuring a new mapping.
    pub fn builder() -> MappingBuilder<T> {
        MappingBuilder::new()
    }
}

// ============================================================================
// Factory
// ============================================================================

/// Create an empty mapping over `domain`.
///
/// `out_of_range` of `None` holds edge values constant beyond all key entries.
pub fn create_mapping<T: MappingFloat>(
    domain: DimensionSet,
    method: InterpolationMethod,
    out_of_range: Option<T>,
) -> Result<Mapping<T>, MappingError> {
    let policy = out_of_range.map_or(OutOfRange::Continue, OutOfRange::Value);
    Mapping::new(domain, Interpolator::new(method, policy))
}
