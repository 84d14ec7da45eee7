//! Coordinate points over a set of dimensions.
//!
//! ## Purpose
//!
//! An `Argument` is a position in a mapping's domain: a time value plus one
//! coordinate per non-time axis. Arguments carry the total order mapping
//! iterators visit key entries in.
//!
//! ## Design notes
//!
//! * **Time is separate**: Time is always present and never stored in the
//!   per-axis list, so every argument has a time even over domains without it.
//! * **Sorted storage**: Non-time coordinates live in a `Vec` sorted by
//!   dimension, so cloning and comparing are linear scans.
//! * **Robust reads**: Reading an axis the argument does not carry yields zero.
//!
//! ## Key concepts
//!
//! * **Ordering**: Axes are compared from most to least significant. An axis
//!   missing on either side is skipped; time is the final tiebreak.
//! * **Restriction**: Comparisons can be limited to a `DimensionSet`, which is
//!   how positions from differing full domains are compared.
//!
//! ## Invariants
//!
//! * `values` is strictly increasing by dimension and never contains time.
//! * Unrestricted comparison expects both sides to carry the same axes.
//!
//! ## Non-goals
//!
//! * This module does not validate coordinates (NaN compares as equal).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use core::fmt;

// Internal dependencies
use crate::primitives::dimension::{Dimension, DimensionSet};
use crate::primitives::float::MappingFloat;

/// A coordinate point: time plus one value per non-time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument<T> {
    time: T,
    values: Vec<(Dimension, T)>,
}

impl<T: MappingFloat> Argument<T> {
    /// Create an argument at `time` with no other axes.
    pub fn new(time: T) -> Self {
        Self {
            time,
            values: Vec::new(),
        }
    }

    /// Create an argument at `time` with every non-time axis of `domain` set to zero.
    pub fn from_domain(domain: &DimensionSet, time: T) -> Self {
        Self {
            time,
            values: domain
                .iter()
                .filter(|d| !d.is_time())
                .map(|d| (d, T::zero()))
                .collect(),
        }
    }

    /// Builder-style `set`.
    pub fn with(mut self, dim: Dimension, value: T) -> Self {
        self.set(dim, value);
        self
    }

    /// Time coordinate.
    #[inline]
    pub fn time(&self) -> T {
        self.time
    }

    /// Replace the time coordinate.
    #[inline]
    pub fn set_time(&mut self, time: T) {
        self.time = time;
    }

    /// Coordinate on `dim`, or zero if the argument has no value for it.
    #[inline]
    pub fn get(&self, dim: Dimension) -> T {
        self.try_get(dim).unwrap_or_else(T::zero)
    }

    /// Coordinate on `dim`, if present.
    pub fn try_get(&self, dim: Dimension) -> Option<T> {
        if dim.is_time() {
            return Some(self.time);
        }
        self.values
            .binary_search_by(|(d, _)| d.cmp(&dim))
            .ok()
            .map(|idx| self.values[idx].1)
    }

    /// Whether the argument carries a coordinate on `dim`. Time is always present.
    #[inline]
    pub fn has(&self, dim: Dimension) -> bool {
        self.try_get(dim).is_some()
    }

    /// Set the coordinate on `dim`, adding the axis if needed.
    pub fn set(&mut self, dim: Dimension, value: T) {
        if dim.is_time() {
            self.time = value;
            return;
        }
        match self.values.binary_search_by(|(d, _)| d.cmp(&dim)) {
            Ok(idx) => self.values[idx].1 = value,
            Err(idx) => self.values.insert(idx, (dim, value)),
        }
    }

    /// Copy every coordinate `other` carries on the axes in `dims`.
    pub(crate) fn assign_from(&mut self, other: &Argument<T>, dims: &[Dimension]) {
        for &dim in dims {
            if let Some(v) = other.try_get(dim) {
                self.set(dim, v);
            }
        }
    }

    /// All axes this argument carries, time included.
    pub fn dimensions(&self) -> DimensionSet {
        core::iter::once(Dimension::TIME)
            .chain(self.values.iter().map(|(d, _)| *d))
            .collect()
    }

    /// Non-time coordinates in increasing significance.
    pub fn values(&self) -> impl Iterator<Item = (Dimension, T)> + '_ {
        self.values.iter().copied()
    }

    /// Compare two positions.
    ///
    /// Without a restriction both arguments must carry the same axes. With a
    /// restriction only the axes in it are compared (time last, if included).
    pub fn compare(&self, other: &Argument<T>, restriction: Option<&DimensionSet>) -> Ordering {
        match restriction {
            Some(dims) => self.compare_on(other, dims.as_slice()),
            None => {
                debug_assert!(
                    self.values
                        .iter()
                        .map(|(d, _)| d)
                        .eq(other.values.iter().map(|(d, _)| d)),
                    "unrestricted comparison of arguments over different domains"
                );
                for &(dim, value) in self.values.iter().rev() {
                    if let Some(theirs) = other.try_get(dim) {
                        match cmp_float(value, theirs) {
                            Ordering::Equal => continue,
                            ord => return ord,
                        }
                    }
                }
                cmp_float(self.time, other.time)
            }
        }
    }

    /// Compare on the axes in `dims` (given least significant first).
    pub(crate) fn compare_on(&self, other: &Argument<T>, dims: &[Dimension]) -> Ordering {
        for &dim in dims.iter().rev() {
            if dim.is_time() {
                continue;
            }
            if let (Some(a), Some(b)) = (self.try_get(dim), other.try_get(dim)) {
                match cmp_float(a, b) {
                    Ordering::Equal => continue,
                    ord => return ord,
                }
            }
        }
        if dims.first().is_some_and(|d| d.is_time()) {
            cmp_float(self.time, other.time)
        } else {
            Ordering::Equal
        }
    }

    /// Whether both arguments denote the same position on the given axes.
    pub fn is_same_position(&self, other: &Argument<T>, restriction: &DimensionSet) -> bool {
        self.compare_on(other, restriction.as_slice()) == Ordering::Equal
    }
}

impl<T: MappingFloat> Default for Argument<T> {
    fn default() -> Self {
        Self::new(T::zero())
    }
}

impl<T: MappingFloat> fmt::Display for Argument<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(t={}", self.time)?;
        for (dim, value) in &self.values {
            write!(f, ", {}={}", dim, value)?;
        }
        write!(f, ")")
    }
}

#[inline]
pub(crate) fn cmp_float<T: MappingFloat>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
