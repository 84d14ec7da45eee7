#![cfg(feature = "dev")]

use mapping_rs::internals::primitives::dimension::Dimension;
use mapping_rs::internals::primitives::errors::MappingError;

#[test]
fn test_mapping_error_display() {
    // EmptyDomain
    let err = MappingError::EmptyDomain;
    assert_eq!(format!("{}", err), "Domain has no dimensions");

    // MissingDimension
    let err = MappingError::MissingDimension {
        dimension: Dimension::FREQUENCY,
    };
    assert_eq!(
        format!("{}", err),
        "Missing dimension: position has no value for axis 'frequency'"
    );

    // IncompatibleDomain
    let err = MappingError::IncompatibleDomain {
        operation: "concatenation",
    };
    assert_eq!(format!("{}", err), "Incompatible domains for concatenation");

    // InvalidOutOfRangeValue
    let err = MappingError::InvalidOutOfRangeValue(f64::NAN);
    assert_eq!(
        format!("{}", err),
        "Invalid out-of-range value: NaN (must not be NaN)"
    );

    // DuplicateParameter
    let err = MappingError::DuplicateParameter {
        parameter: "interpolation",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'interpolation' was set multiple times. Each parameter can only be configured once."
    );

    // DegenerateDiscontinuity
    let err = MappingError::DegenerateDiscontinuity { time: 5.0 };
    assert_eq!(
        format!("{}", err),
        "Degenerate discontinuity at t=5 (limit time must differ from jump time)"
    );
}

#[test]
fn test_mapping_error_properties() {
    let err1 = MappingError::EmptyDomain;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(
        err1,
        MappingError::MissingDimension {
            dimension: Dimension::TIME
        }
    );
}

#[cfg(feature = "std")]
#[test]
fn test_mapping_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<MappingError>();
}
