//! Element-wise binary operators on mappings.
//!
//! ## Purpose
//!
//! This module combines two mappings point by point into a new concrete mapping:
//! the generic `apply_element_wise_operator` and its arithmetic specialisations.
//!
//! ## Design notes
//!
//! * **Reconcile, then pair**: Both operands are first filled up to the union
//!   of their domains, then walked in lockstep. Each step writes `op(v1, v2)`
//!   at the current position and advances whichever operand has the smaller
//!   next key entry, catching the other one up with `iterate_to`.
//! * **Linear result**: The result interpolates linearly, with flat
//!   extrapolation or a fixed out-of-range value.
//! * **Operator overloading**: `&a + &b` and friends delegate to the plain
//!   arithmetic variants.
//!
//! ## Key concepts
//!
//! * **Pairing**: Every key entry of either reconciled operand becomes a key
//!   entry of the result.
//!
//! ## Invariants
//!
//! * The result domain is the union of both operand domains.
//! * Two empty operands produce an empty result.
//!
//! ## Non-goals
//!
//! * This module does not combine mappings lazily (see `evaluation::concat`).

// External dependencies
use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Sub};

// Internal dependencies
use crate::engine::iterator::MappingIterator;
use crate::engine::mapping::Mapping;
use crate::evaluation::filled_up::filled_up;
use crate::math::interpolation::{InterpolationMethod, Interpolator, OutOfRange};
use crate::primitives::argument::Argument;
use crate::primitives::float::MappingFloat;

// ============================================================================
// Generic Operator
// ============================================================================

/// Combine `f1` and `f2` point by point with `op`.
///
/// The result has a key entry at every key entry of either operand (after
/// domain reconciliation), interpolates linearly and answers queries beyond
/// its key entries according to `out_of_range`.
pub fn apply_element_wise_operator<T, F>(
    f1: &Mapping<T>,
    f2: &Mapping<T>,
    op: F,
    out_of_range: OutOfRange<T>,
) -> Mapping<T>
where
    T: MappingFloat,
    F: Fn(T, T) -> T,
{
    let domain = f1.domain().union(f2.domain());
    let a = filled_up(f1, &domain, f2);
    let b = filled_up(f2, &domain, f1);

    let interpolator = Interpolator::new(InterpolationMethod::Linear, out_of_range);
    let mut result = Mapping::from_validated(domain.clone(), interpolator);
    if a.is_empty() && b.is_empty() {
        return result;
    }

    tracing::debug!(
        domain = %domain,
        left = a.len(),
        right = b.len(),
        "applying element-wise operator"
    );

    let axes = domain.as_slice();
    let mut it1 = a.iter();
    let mut it2 = b.iter();

    let start = match (a.is_empty(), b.is_empty()) {
        (false, true) => it1.position().clone(),
        (true, false) => it2.position().clone(),
        _ => {
            if it1.position().compare_on(it2.position(), axes) == Ordering::Greater {
                it2.position().clone()
            } else {
                it1.position().clone()
            }
        }
    };
    it1.jump_to(&start);
    it2.jump_to(&start);

    let mut out = result.iter_mut_at(&start);
    loop {
        out.set_value(op(it1.value(), it2.value()));

        let advance_first = match (it1.next_position(), it2.next_position()) {
            (Some(p1), Some(p2)) => p1.compare_on(&p2, axes) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        let pos: Argument<T> = if advance_first {
            it1.next();
            let pos = it1.position().clone();
            it2.iterate_to(&pos);
            pos
        } else {
            it2.next();
            let pos = it2.position().clone();
            it1.iterate_to(&pos);
            pos
        };
        out.iterate_to(&pos);
    }
    drop(out);

    tracing::debug!(entries = result.len(), "element-wise operator done");
    result
}

// ============================================================================
// Arithmetic
// ============================================================================

/// `f1 + f2` with flat extrapolation.
pub fn add<T: MappingFloat>(f1: &Mapping<T>, f2: &Mapping<T>) -> Mapping<T> {
    apply_element_wise_operator(f1, f2, |a, b| a + b, OutOfRange::Continue)
}

/// `f1 + f2` returning `out_of_range` beyond all key entries.
pub fn add_with_out_of_range<T: MappingFloat>(
    f1: &Mapping<T>,
    f2: &Mapping<T>,
    out_of_range: T,
) -> Mapping<T> {
    apply_element_wise_operator(f1, f2, |a, b| a + b, OutOfRange::Value(out_of_range))
}

/// `f1 - f2` with flat extrapolation.
pub fn subtract<T: MappingFloat>(f1: &Mapping<T>, f2: &Mapping<T>) -> Mapping<T> {
    apply_element_wise_operator(f1, f2, |a, b| a - b, OutOfRange::Continue)
}

/// `f1 - f2` returning `out_of_range` beyond all key entries.
pub fn subtract_with_out_of_range<T: MappingFloat>(
    f1: &Mapping<T>,
    f2: &Mapping<T>,
    out_of_range: T,
) -> Mapping<T> {
    apply_element_wise_operator(f1, f2, |a, b| a - b, OutOfRange::Value(out_of_range))
}

/// `f1 * f2` with flat extrapolation.
pub fn multiply<T: MappingFloat>(f1: &Mapping<T>, f2: &Mapping<T>) -> Mapping<T> {
    apply_element_wise_operator(f1, f2, |a, b| a * b, OutOfRange::Continue)
}

/// `f1 * f2` returning `out_of_range` beyond all key entries.
pub fn multiply_with_out_of_range<T: MappingFloat>(
    f1: &Mapping<T>,
    f2: &Mapping<T>,
    out_of_range: T,
) -> Mapping<T> {
    apply_element_wise_operator(f1, f2, |a, b| a * b, OutOfRange::Value(out_of_range))
}

/// `f1 / f2` with flat extrapolation.
pub fn divide<T: MappingFloat>(f1: &Mapping<T>, f2: &Mapping<T>) -> Mapping<T> {
    apply_element_wise_operator(f1, f2, |a, b| a / b, OutOfRange::Continue)
}

/// `f1 / f2` returning `out_of_range` beyond all key entries.
pub fn divide_with_out_of_range<T: MappingFloat>(
    f1: &Mapping<T>,
    f2: &Mapping<T>,
    out_of_range: T,
) -> Mapping<T> {
    apply_element_wise_operator(f1, f2, |a, b| a / b, OutOfRange::Value(out_of_range))
}

// ============================================================================
// Operator Overloading
// ============================================================================

impl<T: MappingFloat> Add for &Mapping<T> {
    type Output = Mapping<T>;

    fn add(self, rhs: Self) -> Mapping<T> {
        add(self, rhs)
    }
}

impl<T: MappingFloat> Sub for &Mapping<T> {
    type Output = Mapping<T>;

    fn sub(self, rhs: Self) -> Mapping<T> {
        subtract(self, rhs)
    }
}

impl<T: MappingFloat> Mul for &Mapping<T> {
    type Output = Mapping<T>;

    fn mul(self, rhs: Self) -> Mapping<T> {
        multiply(self, rhs)
    }
}

impl<T: MappingFloat> Div for &Mapping<T> {
    type Output = Mapping<T>;

    fn div(self, rhs: Self) -> Mapping<T> {
        divide(self, rhs)
    }
}
