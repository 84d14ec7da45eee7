//! Domain reconciliation for element-wise operators.
//!
//! ## Purpose
//!
//! Before two mappings over different domains can be paired key entry by key
//! entry, each must have key entries on the axes only the other one uses. This
//! module produces that "filled-up" version of a source mapping.
//!
//! ## Design notes
//!
//! * **Copy on demand**: When the target domain adds no axis the source is
//!   returned borrowed (`Cow::Borrowed`); otherwise an owned mapping is built.
//! * **Constant along new axes**: The source does not depend on the added axes,
//!   so every replicated entry keeps the source value.
//!
//! ## Key concepts
//!
//! * **Added axes**: Axes of the target domain missing from the source domain.
//! * **Used coordinates**: The distinct coordinates a key mapping's entries
//!   carry on an added axis, collected by a full scan.
//!
//! ## Invariants
//!
//! * The result is defined over the target domain.
//! * The result evaluates to the source value at every position.
//!
//! ## Non-goals
//!
//! * This module does not remove axes from a mapping.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{borrow::Cow, vec::Vec};
#[cfg(feature = "std")]
use std::{borrow::Cow, vec::Vec};

// Internal dependencies
use crate::engine::mapping::Mapping;
use crate::primitives::argument::cmp_float;
use crate::primitives::dimension::{Dimension, DimensionSet};
use crate::primitives::float::MappingFloat;

/// `source` extended to `domain`, with key entries at every coordinate `keys`
/// uses on the axes `source` lacks.
///
/// Axes `keys` does not carry contribute the single coordinate zero.
pub fn filled_up<'a, T: MappingFloat>(
    source: &'a Mapping<T>,
    domain: &DimensionSet,
    keys: &Mapping<T>,
) -> Cow<'a, Mapping<T>> {
    let added = domain.difference(source.domain());
    if added.is_empty() {
        return Cow::Borrowed(source);
    }

    let coordinates: Vec<(Dimension, Vec<T>)> = added
        .iter()
        .map(|dim| (dim, used_coordinates(keys, dim)))
        .collect();

    let mut result = Mapping::from_validated(domain.union(source.domain()), source.interpolator());
    let combinations: usize = coordinates.iter().map(|(_, c)| c.len()).product();
    tracing::debug!(
        added = %added,
        entries = source.len(),
        combinations,
        "filling up mapping"
    );

    for (pos, value) in source.entries() {
        let mut odometer = vec![0usize; coordinates.len()];
        loop {
            let mut filled = pos.clone();
            for ((dim, coords), &i) in coordinates.iter().zip(odometer.iter()) {
                filled.set(*dim, coords[i]);
            }
            result.set_value(&filled, value);
            if !advance(&mut odometer, &coordinates) {
                break;
            }
        }
    }

    tracing::trace!(entries = result.len(), "filled-up mapping built");
    Cow::Owned(result)
}

/// Sorted distinct coordinates the key entries of `keys` carry on `dim`.
fn used_coordinates<T: MappingFloat>(keys: &Mapping<T>, dim: Dimension) -> Vec<T> {
    if !keys.domain().contains(dim) {
        return vec![T::zero()];
    }
    let mut coords: Vec<T> = keys.entries().map(|(pos, _)| pos.get(dim)).collect();
    coords.sort_by(|a, b| cmp_float(*a, *b));
    coords.dedup();
    if coords.is_empty() {
        return vec![T::zero()];
    }
    coords
}

/// Step the mixed-radix counter; false once every combination was visited.
fn advance<T>(odometer: &mut [usize], coordinates: &[(Dimension, Vec<T>)]) -> bool {
    for (digit, (_, coords)) in odometer.iter_mut().zip(coordinates) {
        *digit += 1;
        if *digit < coords.len() {
            return true;
        }
        *digit = 0;
    }
    false
}
