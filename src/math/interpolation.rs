//! Interpolation policies over a bracketing pair of samples.
//!
//! ## Purpose
//!
//! This module implements the three interpolation methods a mapping can use
//! between stored key entries (`Step`, `Nearest`, `Linear`) together with the
//! policy for queries beyond all key entries.
//!
//! ## Design notes
//!
//! * **Tagged policy**: `InterpolationMethod` is a plain enum; the out-of-range
//!   policy is data (`OutOfRange`) bundled with it in an `Interpolator`.
//! * **Value-agnostic selection**: `Interpolator::select` works for any stored
//!   value type and returns a `Selection` naming which stored values contribute.
//!   Scalars resolve a selection to a number; multi-dimensional mappings resolve
//!   it to a sub-mapping or an on-the-fly blend of two.
//! * **Generics**: Generic over `MappingFloat` coordinates.
//!
//! ## Key concepts
//!
//! * **Bracket**: The greatest key <= position and the smallest key > position.
//! * **Step**: Right-continuous, takes the lower bracket value.
//! * **Nearest**: Takes the numerically closer bracket value; ties go to the lower key.
//! * **Linear**: `v0 * (1 - f) + v1 * f` with `f = (pos - t0) / (t1 - t0)`.
//!
//! ## Invariants
//!
//! * Entries passed to `select` are sorted by strictly increasing key.
//! * A configured fixed out-of-range value always wins over edge extrapolation.
//! * Blending `+inf` with `-inf` yields NaN.
//!
//! ## Non-goals
//!
//! * This module does not provide higher-order (spline, cubic) interpolation.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::float::MappingFloat;

// ============================================================================
// Policy Types
// ============================================================================

/// How values between stored key entries are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMethod {
    /// Value of the greatest key not after the position.
    Step,

    /// Value of the closer bracket key.
    Nearest,

    /// Linear blend of both bracket values.
    #[default]
    Linear,
}

/// What a query beyond all stored key entries returns.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutOfRange<T> {
    /// Hold the nearest edge value constant.
    #[default]
    Continue,

    /// Return this fixed value.
    Value(T),
}

impl<T: Copy> OutOfRange<T> {
    /// The fixed value, if one is configured.
    #[inline]
    pub fn value(&self) -> Option<T> {
        match self {
            OutOfRange::Continue => None,
            OutOfRange::Value(v) => Some(*v),
        }
    }
}

/// Which stored values determine the value at a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'a, T, V> {
    /// The position is a stored key.
    Exact(&'a V),

    /// One stored value applies, but the position is not its key.
    Single(&'a V),

    /// Blend of two neighbouring stored values.
    Blend {
        /// Value at the lower key.
        low: &'a V,
        /// Value at the upper key.
        high: &'a V,
        /// Blend factor in (0, 1).
        factor: T,
    },

    /// Beyond all keys with a fixed out-of-range value.
    Fixed(T),

    /// No stored keys and no fixed out-of-range value.
    Empty,
}

impl<T: MappingFloat> Selection<'_, T, T> {
    /// Resolve a scalar selection to `(value, was_exact_match)`.
    ///
    /// An empty selection resolves to zero.
    pub fn evaluate(self) -> (T, bool) {
        match self {
            Selection::Exact(v) => (*v, true),
            Selection::Single(v) => (*v, false),
            Selection::Blend { low, high, factor } => (blend(*low, *high, factor), false),
            Selection::Fixed(v) => (v, false),
            Selection::Empty => (T::zero(), false),
        }
    }
}

/// Index form of a `Selection`, detached from the entries it points into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Located<T> {
    /// The position is the key at this index.
    Exact(usize),

    /// The entry at this index applies, but the position is not its key.
    Single(usize),

    /// Blend of the entries at two neighbouring indices.
    Blend {
        /// Index of the lower key.
        low: usize,
        /// Index of the upper key.
        high: usize,
        /// Blend factor in (0, 1).
        factor: T,
    },

    /// Beyond all keys with a fixed out-of-range value.
    Fixed(T),

    /// No stored keys and no fixed out-of-range value.
    Empty,
}

impl<T: Copy> Located<T> {
    /// Borrow the entries this location points at.
    pub fn resolve<V>(self, entries: &[(T, V)]) -> Selection<'_, T, V> {
        match self {
            Located::Exact(i) => Selection::Exact(&entries[i].1),
            Located::Single(i) => Selection::Single(&entries[i].1),
            Located::Blend { low, high, factor } => Selection::Blend {
                low: &entries[low].1,
                high: &entries[high].1,
                factor,
            },
            Located::Fixed(v) => Selection::Fixed(v),
            Located::Empty => Selection::Empty,
        }
    }
}

// ============================================================================
// Interpolator
// ============================================================================

/// An interpolation method bundled with its out-of-range policy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Interpolator<T> {
    method: InterpolationMethod,
    out_of_range: OutOfRange<T>,
}

impl<T: MappingFloat> Interpolator<T> {
    /// Create an interpolator.
    pub fn new(method: InterpolationMethod, out_of_range: OutOfRange<T>) -> Self {
        Self {
            method,
            out_of_range,
        }
    }

    /// Linear interpolation with flat extrapolation.
    pub fn linear() -> Self {
        Self::new(InterpolationMethod::Linear, OutOfRange::Continue)
    }

    /// Step interpolation with flat extrapolation.
    pub fn step() -> Self {
        Self::new(InterpolationMethod::Step, OutOfRange::Continue)
    }

    /// Nearest-key interpolation with flat extrapolation.
    pub fn nearest() -> Self {
        Self::new(InterpolationMethod::Nearest, OutOfRange::Continue)
    }

    /// The interpolation method.
    #[inline]
    pub fn method(&self) -> InterpolationMethod {
        self.method
    }

    /// The out-of-range policy.
    #[inline]
    pub fn out_of_range(&self) -> OutOfRange<T> {
        self.out_of_range
    }

    /// Value a query resolves to when there is nothing stored at all.
    #[inline]
    pub fn empty_value(&self) -> T {
        self.out_of_range.value().unwrap_or_else(T::zero)
    }

    /// Select the stored values contributing at `pos`.
    ///
    /// O(log n) bracket search followed by `select_at`.
    pub fn select<'a, V>(&self, entries: &'a [(T, V)], pos: T) -> Selection<'a, T, V> {
        let upper = entries.partition_point(|(k, _)| *k <= pos);
        self.select_at(entries, upper, pos)
    }

    /// Select the stored values contributing at `pos`, given `upper`, the index
    /// of the first entry whose key is greater than `pos`. O(1).
    #[inline]
    pub fn select_at<'a, V>(
        &self,
        entries: &'a [(T, V)],
        upper: usize,
        pos: T,
    ) -> Selection<'a, T, V> {
        self.locate(entries, upper, pos).resolve(entries)
    }

    /// Index form of `select_at`.
    pub fn locate<V>(&self, entries: &[(T, V)], upper: usize, pos: T) -> Located<T> {
        let n = entries.len();
        if n == 0 {
            return match self.out_of_range {
                OutOfRange::Value(v) => Located::Fixed(v),
                OutOfRange::Continue => Located::Empty,
            };
        }

        if upper > 0 && entries[upper - 1].0 == pos {
            return Located::Exact(upper - 1);
        }

        if upper == 0 || upper == n {
            let edge = if upper == 0 { 0 } else { n - 1 };
            return match self.out_of_range {
                OutOfRange::Value(v) => Located::Fixed(v),
                OutOfRange::Continue => Located::Single(edge),
            };
        }

        let (t0, t1) = (entries[upper - 1].0, entries[upper].0);
        match self.method {
            InterpolationMethod::Step => Located::Single(upper - 1),
            InterpolationMethod::Nearest => match (pos - t0).partial_cmp(&(t1 - pos)) {
                Some(Ordering::Greater) => Located::Single(upper),
                _ => Located::Single(upper - 1),
            },
            InterpolationMethod::Linear => Located::Blend {
                low: upper - 1,
                high: upper,
                factor: (pos - t0) / (t1 - t0),
            },
        }
    }

    /// Interpolated scalar value at `pos` as `(value, was_exact_match)`.
    pub fn evaluate(&self, entries: &[(T, T)], pos: T) -> (T, bool) {
        self.select(entries, pos).evaluate()
    }
}

// ============================================================================
// Blending
// ============================================================================

/// Linear blend `v0 * (1 - f) + v1 * f`. Opposite infinities yield NaN.
#[inline]
pub fn blend<T: MappingFloat>(v0: T, v1: T, factor: T) -> T {
    v0 * (T::one() - factor) + v1 * factor
}
