#![cfg(feature = "dev")]
//! Tests for interpolation policies and time helpers.
//!
//! ## Test Organization
//!
//! 1. **Linear** - Exactness, blending, extrapolation
//! 2. **Step** - Right-continuity
//! 3. **Nearest** - Closer key, tie-break
//! 4. **Out-of-range** - Fixed values
//! 5. **Time helpers** - pre/post

use approx::assert_relative_eq;

use mapping_rs::internals::math::interpolation::{
    blend, InterpolationMethod, Interpolator, OutOfRange,
};
use mapping_rs::internals::math::time::{inc_next_position, post, pre};

const ENTRIES: [(f64, f64); 2] = [(0.0, 2.0), (10.0, 4.0)];

// ============================================================================
// Linear Tests
// ============================================================================

/// Exact keys return their stored value and report an exact match.
#[test]
fn test_linear_exact_match() {
    let interp = Interpolator::<f64>::linear();

    assert_eq!(interp.evaluate(&ENTRIES, 0.0), (2.0, true));
    assert_eq!(interp.evaluate(&ENTRIES, 10.0), (4.0, true));
}

/// Between keys the value is `v0 * (1 - f) + v1 * f`.
#[test]
fn test_linear_blend() {
    let interp = Interpolator::<f64>::linear();

    for &t in &[0.5, 2.5, 5.0, 7.25, 9.9] {
        let f = (t - 0.0) / (10.0 - 0.0);
        let (value, exact) = interp.evaluate(&ENTRIES, t);
        assert_relative_eq!(value, 2.0 * (1.0 - f) + 4.0 * f, epsilon = 1e-12);
        assert!(!exact);
    }
}

/// Beyond all keys the nearest edge value is held.
#[test]
fn test_linear_flat_extrapolation() {
    let interp = Interpolator::<f64>::linear();

    assert_eq!(interp.evaluate(&ENTRIES, -5.0), (2.0, false));
    assert_eq!(interp.evaluate(&ENTRIES, 15.0), (4.0, false));
}

/// Blending opposite infinities yields NaN, not zero.
#[test]
fn test_blend_opposite_infinities_is_nan() {
    assert!(blend(f64::INFINITY, f64::NEG_INFINITY, 0.5).is_nan());
    assert_eq!(blend(1.0f64, 3.0, 0.5), 2.0);
}

// ============================================================================
// Step Tests
// ============================================================================

/// Step interpolation takes the lower bracket value on [t0, t1).
#[test]
fn test_step_right_continuous() {
    let interp = Interpolator::<f64>::step();

    for &t in &[0.0, 0.1, 5.0, 9.999] {
        assert_eq!(interp.evaluate(&ENTRIES, t).0, 2.0);
    }
    assert_eq!(interp.evaluate(&ENTRIES, 10.0).0, 4.0);
    assert_eq!(interp.evaluate(&ENTRIES, -1.0), (2.0, false));
}

// ============================================================================
// Nearest Tests
// ============================================================================

/// Nearest interpolation takes the closer bracket value.
#[test]
fn test_nearest_closer_key() {
    let interp = Interpolator::<f64>::nearest();

    assert_eq!(interp.evaluate(&ENTRIES, 4.0).0, 2.0);
    assert_eq!(interp.evaluate(&ENTRIES, 6.0).0, 4.0);
}

/// Exact midpoints go to the lower key.
#[test]
fn test_nearest_tie_prefers_lower_key() {
    let interp = Interpolator::<f64>::nearest();
    assert_eq!(interp.evaluate(&ENTRIES, 5.0).0, 2.0);
}

// ============================================================================
// Out-of-range Tests
// ============================================================================

/// A fixed out-of-range value beats edge extrapolation on both sides.
#[test]
fn test_fixed_out_of_range_value() {
    let interp = Interpolator::new(InterpolationMethod::Linear, OutOfRange::Value(-1.0f64));

    assert_eq!(interp.evaluate(&ENTRIES, -0.5).0, -1.0);
    assert_eq!(interp.evaluate(&ENTRIES, 10.5).0, -1.0);
    assert_eq!(interp.evaluate(&ENTRIES, 5.0).0, 3.0);
    assert_eq!(interp.evaluate(&ENTRIES, 10.0).0, 4.0);
}

/// Without entries the fixed value (or zero) is returned.
#[test]
fn test_empty_entries() {
    let fixed = Interpolator::new(InterpolationMethod::Step, OutOfRange::Value(7.0f64));
    let flat = Interpolator::<f64>::step();

    assert_eq!(fixed.evaluate(&[], 1.0).0, 7.0);
    assert_eq!(flat.evaluate(&[], 1.0).0, 0.0);
    assert_eq!(fixed.empty_value(), 7.0);
    assert_eq!(flat.empty_value(), 0.0);
}

/// Defaults are linear with flat extrapolation.
#[test]
fn test_defaults() {
    let interp = Interpolator::<f64>::default();

    assert_eq!(interp.method(), InterpolationMethod::Linear);
    assert_eq!(interp.out_of_range(), OutOfRange::Continue);
    assert_eq!(OutOfRange::Value(1.0f64).value(), Some(1.0));
    assert_eq!(OutOfRange::<f64>::Continue.value(), None);
}

// ============================================================================
// Time Helper Tests
// ============================================================================

/// pre/post bracket a time with adjacent representable values.
#[test]
fn test_pre_post() {
    for &t in &[0.0f64, 1.0, -3.5, 1e9] {
        assert!(pre(t) < t);
        assert!(post(t) > t);
        assert_eq!(post(pre(t)), t);
        assert_eq!(inc_next_position(t), post(t));
    }
    assert!(pre(1.0f32) < 1.0f32);
}
