//! Validation of mapping configuration.
//!
//! ## Purpose
//!
//! This module checks the parameters a mapping is built from before any
//! storage is allocated: the domain and the out-of-range policy.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `MappingFloat` types.
//!
//! ## Key concepts
//!
//! * **Domain**: Must name at least one axis.
//! * **Out-of-range value**: May be infinite (a common "no signal" marker) but
//!   never NaN.
//!
//! ## Non-goals
//!
//! * This module does not validate coordinates or sample values.

// Internal dependencies
use crate::math::interpolation::OutOfRange;
use crate::primitives::dimension::DimensionSet;
use crate::primitives::errors::MappingError;
use crate::primitives::float::MappingFloat;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for mapping configuration.
pub struct Validator;

impl Validator {
    /// Validate a mapping domain.
    pub fn validate_domain(domain: &DimensionSet) -> Result<(), MappingError> {
        if domain.is_empty() {
            return Err(MappingError::EmptyDomain);
        }
        Ok(())
    }

    /// Validate an out-of-range policy.
    pub fn validate_out_of_range<T: MappingFloat>(
        out_of_range: OutOfRange<T>,
    ) -> Result<(), MappingError> {
        match out_of_range {
            OutOfRange::Value(v) if v.is_nan() => {
                Err(MappingError::InvalidOutOfRangeValue(v.to_f64_lossy()))
            }
            _ => Ok(()),
        }
    }

    /// Validate that `part` can be combined into a mapping over `whole`.
    pub fn validate_subdomain(
        part: &DimensionSet,
        whole: &DimensionSet,
        operation: &'static str,
    ) -> Result<(), MappingError> {
        if !part.is_subset(whole) {
            return Err(MappingError::IncompatibleDomain { operation });
        }
        Ok(())
    }
}
