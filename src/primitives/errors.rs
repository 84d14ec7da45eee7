//! Error types for mapping construction and access.
//!
//! ## Purpose
//!
//! This module defines `MappingError`, the single error type returned by every
//! fallible operation in the crate.
//!
//! ## Design notes
//!
//! * **Recoverable only**: Errors describe invalid configuration or input the
//!   caller can react to. Broken iterator protocol (e.g. `next()` past the end)
//!   is a programming error and panics instead.
//! * **no_std**: `Display` is implemented on `core::fmt`; `std::error::Error`
//!   only with the `std` feature.
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself (see `engine::validator`).

// External dependencies
use core::fmt;

// Internal dependencies
use crate::primitives::dimension::Dimension;

/// Errors reported by mapping construction, access and algorithms.
#[derive(Debug, Clone, PartialEq)]
pub enum MappingError {
    /// A mapping needs at least one dimension.
    EmptyDomain,

    /// A multi-dimensional mapping was queried without a value for its outer axis.
    MissingDimension {
        /// Axis the query did not provide.
        dimension: Dimension,
    },

    /// Operand domains cannot be combined.
    IncompatibleDomain {
        /// Which operation rejected the operands.
        operation: &'static str,
    },

    /// Fixed out-of-range value is NaN.
    InvalidOutOfRangeValue(f64),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },

    /// A discontinuity limit must lie at a different time than the jump itself.
    DegenerateDiscontinuity {
        /// Time shared by the jump and its limit.
        time: f64,
    },
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingError::EmptyDomain => write!(f, "Domain has no dimensions"),
            MappingError::MissingDimension { dimension } => write!(
                f,
                "Missing dimension: position has no value for axis '{}'",
                dimension
            ),
            MappingError::IncompatibleDomain { operation } => {
                write!(f, "Incompatible domains for {}", operation)
            }
            MappingError::InvalidOutOfRangeValue(v) => {
                write!(f, "Invalid out-of-range value: {} (must not be NaN)", v)
            }
            MappingError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
            MappingError::DegenerateDiscontinuity { time } => write!(
                f,
                "Degenerate discontinuity at t={} (limit time must differ from jump time)",
                time
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MappingError {}
