//! Minimum and maximum search over a mapping.
//!
//! ## Purpose
//!
//! This module finds the largest or smallest value a mapping takes, either over
//! all of its key entries or within a box `[from, to]` of its domain.
//!
//! ## Design notes
//!
//! * **Unbounded search**: One linear scan over the key entries, O(n).
//! * **Bounded search**: Both box corners are evaluated by interpolated lookup,
//!   then the key entries from `from` up to `to` are scanned. An entry only
//!   counts if every coordinate lies inside the box, not just time.
//! * **Sentinels**: An empty mapping yields the caller's "not found" value
//!   (`-inf` for maxima and `+inf` for minima by default).
//!
//! ## Invariants
//!
//! * Searching never mutates the mapping.
//!
//! ## Non-goals
//!
//! * This module does not locate extremes between key entries; with linear
//!   interpolation they always lie on one.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::engine::iterator::MappingIterator;
use crate::engine::mapping::Mapping;
use crate::primitives::argument::Argument;
use crate::primitives::dimension::DimensionSet;
use crate::primitives::float::MappingFloat;

// ============================================================================
// Maximum
// ============================================================================

/// Largest key entry value, or `-inf` for an empty mapping.
pub fn find_max<T: MappingFloat>(mapping: &Mapping<T>) -> T {
    find_max_or(mapping, T::neg_infinity())
}

/// Largest key entry value, or `not_found` for an empty mapping.
pub fn find_max_or<T: MappingFloat>(mapping: &Mapping<T>, not_found: T) -> T {
    scan(mapping, not_found, |candidate, best| candidate > best)
}

/// Largest value within `[from, to]`, or `-inf` for an empty mapping.
pub fn find_max_in<T: MappingFloat>(mapping: &Mapping<T>, from: &Argument<T>, to: &Argument<T>) -> T {
    find_max_in_or(mapping, from, to, T::neg_infinity())
}

/// Largest value within `[from, to]`, or `not_found` for an empty mapping.
///
/// # Panics
///
/// Panics if `from` or `to` lacks the outer axis of a multi-dimensional mapping.
pub fn find_max_in_or<T: MappingFloat>(
    mapping: &Mapping<T>,
    from: &Argument<T>,
    to: &Argument<T>,
    not_found: T,
) -> T {
    scan_between(mapping, from, to, not_found, |candidate, best| candidate > best)
}

// ============================================================================
// Minimum
// ============================================================================

/// Smallest key entry value, or `+inf` for an empty mapping.
pub fn find_min<T: MappingFloat>(mapping: &Mapping<T>) -> T {
    find_min_or(mapping, T::infinity())
}

/// Smallest key entry value, or `not_found` for an empty mapping.
pub fn find_min_or<T: MappingFloat>(mapping: &Mapping<T>, not_found: T) -> T {
    scan(mapping, not_found, |candidate, best| candidate < best)
}

/// Smallest value within `[from, to]`, or `+inf` for an empty mapping.
pub fn find_min_in<T: MappingFloat>(mapping: &Mapping<T>, from: &Argument<T>, to: &Argument<T>) -> T {
    find_min_in_or(mapping, from, to, T::infinity())
}

/// Smallest value within `[from, to]`, or `not_found` for an empty mapping.
pub fn find_min_in_or<T: MappingFloat>(
    mapping: &Mapping<T>,
    from: &Argument<T>,
    to: &Argument<T>,
    not_found: T,
) -> T {
    scan_between(mapping, from, to, not_found, |candidate, best| candidate < best)
}

// ============================================================================
// Scans
// ============================================================================

fn scan<T: MappingFloat>(mapping: &Mapping<T>, not_found: T, better: impl Fn(T, T) -> bool) -> T {
    mapping
        .entries()
        .map(|(_, v)| v)
        .reduce(|best, v| if better(v, best) { v } else { best })
        .unwrap_or(not_found)
}

fn scan_between<T: MappingFloat>(
    mapping: &Mapping<T>,
    from: &Argument<T>,
    to: &Argument<T>,
    not_found: T,
    better: impl Fn(T, T) -> bool,
) -> T {
    if mapping.is_empty() {
        return not_found;
    }

    let domain = mapping.domain();
    let axes = domain.as_slice();
    let mut best = mapping.value(from);
    let at_to = mapping.value(to);
    if better(at_to, best) {
        best = at_to;
    }

    let mut it = mapping.iter_at(from);
    while let Some(next) = it.next_position() {
        if next.compare_on(to, axes) == Ordering::Greater {
            break;
        }
        it.next();
        if within(it.position(), from, to, domain) {
            let v = it.value();
            if better(v, best) {
                best = v;
            }
        }
    }
    best
}

/// Whether every coordinate of `pos` on `domain` lies in `[from, to]`.
fn within<T: MappingFloat>(
    pos: &Argument<T>,
    from: &Argument<T>,
    to: &Argument<T>,
    domain: &DimensionSet,
) -> bool {
    domain.iter().all(|dim| {
        let x = pos.get(dim);
        from.get(dim) <= x && x <= to.get(dim)
    })
}
