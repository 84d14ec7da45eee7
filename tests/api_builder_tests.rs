//! Tests for the mapping builder and factory.
//!
//! ## Test Organization
//!
//! 1. **Defaults** - Linear interpolation, continued edges
//! 2. **Validation** - Empty domains, NaN, duplicate parameters
//! 3. **Factory** - `create_mapping`

use mapping_rs::prelude::*;
use mapping_rs::Interpolator;

// ============================================================================
// Default Tests
// ============================================================================

/// An unconfigured builder yields linear interpolation and flat edges.
#[test]
fn test_builder_defaults() {
    let m = Mapping::<f64>::builder()
        .dimension(Dimension::TIME)
        .build()
        .unwrap();

    assert_eq!(m.domain(), &DimensionSet::time());
    assert_eq!(
        m.interpolator(),
        Interpolator::new(InterpolationMethod::Linear, OutOfRange::Continue)
    );
    assert!(m.is_empty());
}

/// Domains accumulate across `domain()` and `dimension()` calls.
#[test]
fn test_builder_domain_accumulates() {
    let mut registry = DimensionRegistry::new();
    let space = registry.dimension("space");

    let m = MappingBuilder::<f64>::new()
        .domain(DimensionSet::time())
        .dimension(space)
        .domain(DimensionSet::time_frequency())
        .build()
        .unwrap();

    assert_eq!(m.domain(), &DimensionSet::time_frequency().with(space));
    assert!(m.is_multi_dimensional());
}

/// Configured settings reach the mapping.
#[test]
fn test_builder_configured() {
    let mut m = Mapping::builder()
        .domain(DimensionSet::time())
        .interpolation(Step)
        .out_of_range(-1.0)
        .build()
        .unwrap();
    m.set_value(&Argument::new(0.0), 1.0);
    m.set_value(&Argument::new(1.0), 2.0);

    assert_eq!(m.value(&Argument::new(0.5)), 1.0);
    assert_eq!(m.value(&Argument::new(3.0)), -1.0);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// A mapping needs at least one axis.
#[test]
fn test_builder_empty_domain() {
    let err = Mapping::<f64>::builder().build().unwrap_err();
    assert_eq!(err, MappingError::EmptyDomain);
}

/// NaN cannot serve as out-of-range value.
#[test]
fn test_builder_nan_out_of_range() {
    let err = Mapping::builder()
        .domain(DimensionSet::time())
        .out_of_range(f64::NAN)
        .build()
        .unwrap_err();
    assert!(matches!(err, MappingError::InvalidOutOfRangeValue(v) if v.is_nan()));
}

/// Parameters may only be set once.
#[test]
fn test_builder_duplicate_parameter() {
    let err = Mapping::<f64>::builder()
        .domain(DimensionSet::time())
        .interpolation(Linear)
        .interpolation(Nearest)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        MappingError::DuplicateParameter {
            parameter: "interpolation"
        }
    );

    let err = Mapping::builder()
        .domain(DimensionSet::time())
        .out_of_range(0.0)
        .continue_out_of_range()
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        MappingError::DuplicateParameter {
            parameter: "out_of_range"
        }
    );
}

// ============================================================================
// Factory Tests
// ============================================================================

/// The factory agrees with the builder.
#[test]
fn test_create_mapping() {
    let built = Mapping::builder()
        .domain(DimensionSet::time_frequency())
        .interpolation(Nearest)
        .out_of_range(2.0)
        .build()
        .unwrap();
    let created = create_mapping(DimensionSet::time_frequency(), Nearest, Some(2.0)).unwrap();

    assert_eq!(built, created);
}

/// The factory validates its inputs.
#[test]
fn test_create_mapping_errors() {
    assert_eq!(
        create_mapping::<f64>(DimensionSet::new(), Linear, None).unwrap_err(),
        MappingError::EmptyDomain
    );
    assert!(create_mapping(DimensionSet::time(), Linear, Some(f64::NAN)).is_err());
}
