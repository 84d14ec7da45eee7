//! Tests for concrete leaf and multi-dimensional mappings.
//!
//! ## Test Organization
//!
//! 1. **Leaf mappings** - Round-trip, interpolation, extrapolation
//! 2. **Multi-dimensional mappings** - Slices, blending, missing axes
//! 3. **Cloning** - Deep-copy independence
//! 4. **Slices** - Stored, interpolated and constant views

use approx::assert_relative_eq;
use mapping_rs::prelude::*;
use mapping_rs::Slice;

fn time_mapping(method: InterpolationMethod, keys: &[(f64, f64)]) -> Mapping<f64> {
    let mut m = create_mapping(DimensionSet::time(), method, None).unwrap();
    for &(t, v) in keys {
        m.set_value(&Argument::new(t), v);
    }
    m
}

fn at(t: f64, f: f64) -> Argument<f64> {
    Argument::new(t).with(Dimension::FREQUENCY, f)
}

fn grid() -> Mapping<f64> {
    let mut m = create_mapping(DimensionSet::time_frequency(), Linear, None).unwrap();
    m.set_value(&at(0.0, 100.0), 1.0);
    m.set_value(&at(10.0, 100.0), 3.0);
    m.set_value(&at(0.0, 200.0), 5.0);
    m.set_value(&at(10.0, 200.0), 7.0);
    m
}

// ============================================================================
// Leaf Mapping Tests
// ============================================================================

/// A value set at a key reads back exactly.
#[test]
fn test_set_then_get_round_trip() {
    let mut m = time_mapping(Linear, &[]);
    for &(t, v) in &[(0.3, 1.7), (-2.0, 0.1), (1e6, -4.0)] {
        m.set_value(&Argument::new(t), v);
        assert_eq!(m.value(&Argument::new(t)), v);
    }
    assert_eq!(m.len(), 3);
}

/// Linear interpolation between two keys.
#[test]
fn test_linear_exactness() {
    let m = time_mapping(Linear, &[(2.0, 10.0), (6.0, 30.0)]);

    for &t in &[2.5, 3.0, 4.0, 5.99] {
        let f = (t - 2.0) / (6.0 - 2.0);
        assert_relative_eq!(
            m.value(&Argument::new(t)),
            10.0 * (1.0 - f) + 30.0 * f,
            epsilon = 1e-12
        );
    }
}

/// Flat extrapolation on both sides.
#[test]
fn test_flat_extrapolation() {
    let m = time_mapping(Linear, &[(0.0, 1.0), (1.0, 2.0)]);

    assert_eq!(m.value(&Argument::new(-100.0)), 1.0);
    assert_eq!(m.value(&Argument::new(100.0)), 2.0);
}

/// Step mappings are right-continuous.
#[test]
fn test_step_right_continuity() {
    let m = time_mapping(Step, &[(0.0, 1.0), (1.0, 2.0)]);

    assert_eq!(m.value(&Argument::new(0.0)), 1.0);
    assert_eq!(m.value(&Argument::new(0.999)), 1.0);
    assert_eq!(m.value(&Argument::new(1.0)), 2.0);
}

/// A fixed out-of-range value applies beyond the keys.
#[test]
fn test_out_of_range_value() {
    let mut m = create_mapping(DimensionSet::time(), Linear, Some(-1.0)).unwrap();
    m.set_value(&Argument::new(0.0), 1.0);
    m.set_value(&Argument::new(1.0), 2.0);

    assert_eq!(m.value(&Argument::new(-0.1)), -1.0);
    assert_eq!(m.value(&Argument::new(1.1)), -1.0);
    assert_eq!(m.value(&Argument::new(0.5)), 1.5);
}

/// An empty mapping reads zero, or its fixed out-of-range value.
#[test]
fn test_empty_mapping_value() {
    let flat = time_mapping(Linear, &[]);
    let fixed = create_mapping(DimensionSet::time(), Linear, Some(9.0)).unwrap();

    assert!(flat.is_empty());
    assert_eq!(flat.value(&Argument::new(3.0)), 0.0);
    assert_eq!(fixed.value(&Argument::new(3.0)), 9.0);
}

/// In-order appends and out-of-order appends agree with `set_value`.
#[test]
fn test_append_value() {
    let mut appended = time_mapping(Linear, &[]);
    for &(t, v) in &[(0.0, 1.0), (1.0, 2.0), (0.5, 9.0), (1.0, 3.0)] {
        appended.append_value(&Argument::new(t), v);
    }
    let set = time_mapping(Linear, &[(0.0, 1.0), (0.5, 9.0), (1.0, 3.0)]);

    assert_eq!(appended, set);
}

// ============================================================================
// Multi-dimensional Mapping Tests
// ============================================================================

/// Exact keys read back on both axes.
#[test]
fn test_multi_dimensional_round_trip() {
    let m = grid();

    assert!(m.is_multi_dimensional());
    assert_eq!(m.len(), 4);
    assert_eq!(m.value(&at(0.0, 100.0)), 1.0);
    assert_eq!(m.value(&at(10.0, 200.0)), 7.0);
}

/// Between slices both neighbours are evaluated, then blended.
#[test]
fn test_multi_dimensional_blend() {
    let m = grid();

    assert_relative_eq!(m.value(&at(5.0, 100.0)), 2.0);
    assert_relative_eq!(m.value(&at(5.0, 200.0)), 6.0);
    assert_relative_eq!(m.value(&at(5.0, 150.0)), 4.0);
    assert_relative_eq!(m.value(&at(0.0, 125.0)), 2.0);
}

/// Beyond all slices the edge slice is used.
#[test]
fn test_multi_dimensional_extrapolation() {
    let m = grid();

    assert_eq!(m.value(&at(5.0, 50.0)), 2.0);
    assert_eq!(m.value(&at(5.0, 500.0)), 6.0);
}

/// Blending applies recursively over three axes.
#[test]
fn test_three_axis_blend() {
    let mut registry = DimensionRegistry::new();
    let space = registry.dimension("space");
    let domain = DimensionSet::time_frequency().with(space);

    let mut m = create_mapping(domain, Linear, None).unwrap();
    for &(s, offset) in &[(0.0, 0.0), (2.0, 100.0)] {
        for &(f, scale) in &[(1.0, 1.0), (3.0, 3.0)] {
            m.set_value(&at(0.0, f).with(space, s), offset);
            m.set_value(&at(10.0, f).with(space, s), offset + 10.0 * scale);
        }
    }

    // space=1 blends 0 and 100; freq=2 blends scale 1 and 3; time=5 halfway.
    let expected = 50.0 + 5.0 * 2.0;
    assert_relative_eq!(m.value(&at(5.0, 2.0).with(space, 1.0)), expected, epsilon = 1e-12);
    assert_eq!(m.len(), 8);
}

/// Querying without the outer axis is an error.
#[test]
fn test_missing_outer_axis() {
    let m = grid();

    let err = m.try_value(&Argument::new(0.0)).unwrap_err();
    assert_eq!(
        err,
        MappingError::MissingDimension {
            dimension: Dimension::FREQUENCY
        }
    );
}

/// The unchecked lookup panics with the error message.
#[test]
#[should_panic(expected = "Missing dimension")]
fn test_missing_outer_axis_panics() {
    let m = grid();
    m.value(&Argument::new(0.0));
}

/// Setting a value at a new outer coordinate creates a new slice.
#[test]
fn test_set_value_creates_slice() {
    let mut m = grid();
    m.set_value(&at(3.0, 150.0), 42.0);

    assert_eq!(m.len(), 5);
    assert_eq!(m.value(&at(3.0, 150.0)), 42.0);
    // The new slice only knows its single key.
    assert_eq!(m.value(&at(10.0, 150.0)), 42.0);
}

/// Step and Nearest select whole slices on the outer axis.
#[test]
fn test_outer_axis_step_and_nearest() {
    for (method, expected) in [(Step, [1.0, 1.0, 2.0]), (Nearest, [1.0, 2.0, 2.0])] {
        let mut m = create_mapping(DimensionSet::time_frequency(), method, None).unwrap();
        m.set_value(&at(0.0, 100.0), 1.0);
        m.set_value(&at(0.0, 200.0), 2.0);

        let got: Vec<f64> = [120.0, 180.0, 250.0]
            .iter()
            .map(|&f| m.value(&at(0.0, f)))
            .collect();
        assert_eq!(got, expected, "{:?}", method);

        let mut it = m.iter_at(&at(0.0, 180.0));
        assert_eq!(it.value(), expected[1]);
        assert_eq!(it.next_position(), Some(at(0.0, 200.0)));
        it.next();
        assert_eq!(it.position(), &at(0.0, 200.0));
        assert_eq!(it.value(), 2.0);
        assert!(!it.has_next());
    }
}

// ============================================================================
// Clone Tests
// ============================================================================

/// Clones evaluate identically and are fully independent.
#[test]
fn test_clone_independence() {
    let original = grid();
    let mut copy = original.clone();

    for &(t, f) in &[(0.0, 100.0), (2.5, 175.0), (-1.0, 300.0)] {
        assert_eq!(copy.value(&at(t, f)), original.value(&at(t, f)));
    }

    copy.set_value(&at(0.0, 100.0), -50.0);
    copy.set_value(&at(0.0, 300.0), -50.0);

    assert_eq!(original.value(&at(0.0, 100.0)), 1.0);
    assert_eq!(original.len(), 4);
    assert_eq!(copy.len(), 5);
}

// ============================================================================
// Slice Tests
// ============================================================================

/// Slices at stored, intermediate and missing coordinates.
#[test]
fn test_slices() {
    let m = grid();
    let t5 = Argument::new(5.0);

    match m.slice(100.0) {
        Some(Slice::Stored(sub)) => {
            assert_eq!(sub.len(), 2);
            assert_eq!(sub.value(&t5), 2.0);
            assert_eq!(sub.domain(), &DimensionSet::time());
        }
        other => panic!("expected stored slice, got {:?}", other),
    }

    match m.slice(150.0) {
        Some(Slice::Interpolated(blended)) => {
            assert_relative_eq!(blended.factor(), 0.5);
            assert_relative_eq!(blended.value(&t5), 4.0);
        }
        other => panic!("expected interpolated slice, got {:?}", other),
    }

    let one_axis = time_mapping(Linear, &[(0.0, 1.0)]);
    assert!(one_axis.slice(0.0).is_none());
}

/// Materialising a slice yields an owned mapping over the inner axes.
#[test]
fn test_materialize_slice() {
    let m = grid();
    let Some(Slice::Interpolated(blended)) = m.slice(150.0) else {
        panic!("expected interpolated slice");
    };

    let owned = blended.materialize();
    assert_eq!(owned.domain(), &DimensionSet::time());
    assert_eq!(owned.len(), 2);
    assert_relative_eq!(owned.value(&Argument::new(0.0)), 3.0);
    assert_relative_eq!(owned.value(&Argument::new(10.0)), 5.0);
}

/// A blend of slices with different inner keys walks the union of both.
#[test]
fn test_interpolated_slice_iterates_key_union() {
    let mut m = create_mapping(DimensionSet::time_frequency(), Linear, None).unwrap();
    m.set_value(&at(0.0, 100.0), 1.0);
    m.set_value(&at(4.0, 100.0), 3.0);
    m.set_value(&at(2.0, 200.0), 5.0);
    m.set_value(&at(6.0, 200.0), 7.0);

    let Some(Slice::Interpolated(blended)) = m.slice(150.0) else {
        panic!("expected interpolated slice");
    };

    let entries: Vec<(Argument<f64>, f64)> = blended.iter().entries().collect();
    let times: Vec<f64> = entries.iter().map(|(p, _)| p.time()).collect();
    assert_eq!(times, vec![0.0, 2.0, 4.0, 6.0]);
    for (pos, value) in &entries {
        assert_relative_eq!(*value, blended.value(pos), epsilon = 1e-12);
    }

    let owned = blended.materialize();
    assert_eq!(owned.len(), 4);
    assert_relative_eq!(owned.value(&Argument::new(2.0)), blended.value(&Argument::new(2.0)));
}

/// Fixed out-of-range slices are constant.
#[test]
fn test_constant_slice() {
    let mut m = create_mapping(DimensionSet::time_frequency(), Linear, Some(-7.0)).unwrap();
    m.set_value(&at(0.0, 100.0), 1.0);

    let slice = m.slice(500.0).unwrap();
    assert!(!slice.is_stored());
    assert_eq!(slice.try_value(&Argument::new(0.0)), Ok(-7.0));
}

// ============================================================================
// Display Tests
// ============================================================================

#[test]
fn test_display_lists_entries() {
    let m = time_mapping(Linear, &[(0.0, 1.0), (1.0, 2.0)]);
    let text = format!("{}", m);

    assert!(text.starts_with("Mapping over {time}:"));
    assert!(text.contains("(t=0) -> 1"));
    assert!(text.contains("(t=1) -> 2"));
}
