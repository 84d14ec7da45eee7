//! Axis identities and ordered axis sets.
//!
//! ## Purpose
//!
//! This module defines the named coordinate directions a mapping is defined
//! over (`Dimension`), ordered sets of them (`DimensionSet`), and the
//! session-scoped registry that hands out stable identities by name.
//!
//! ## Design notes
//!
//! * **Identity by id**: A `Dimension` is a small `Copy` id. Ordering and
//!   equality only look at the id, so sets and comparisons stay cheap.
//! * **Explicit registry**: Names are resolved through a `DimensionRegistry`
//!   owned by the caller's session instead of a process-wide table.
//! * **Sorted storage**: `DimensionSet` keeps a sorted, deduplicated `Vec`,
//!   so subset queries are a single merge walk.
//!
//! ## Key concepts
//!
//! * **Time**: id 0, always the least significant axis for ordering and the
//!   innermost axis of every mapping that contains it.
//! * **Frequency**: id 1, pre-registered in every registry.
//! * **Significance**: A higher id is a more significant (outer) axis.
//!
//! ## Invariants
//!
//! * Within one registry, the same name always yields the same `Dimension`.
//! * `DimensionSet` contents are strictly increasing by id.
//!
//! ## Non-goals
//!
//! * This module does not store coordinates (see `primitives::argument`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};
#[cfg(feature = "std")]
use std::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

// External dependencies
use core::fmt;

// ============================================================================
// Dimension
// ============================================================================

/// A named coordinate direction (time, frequency, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dimension {
    id: u32,
}

impl Dimension {
    /// The time axis.
    pub const TIME: Dimension = Dimension { id: 0 };

    /// The frequency axis.
    pub const FREQUENCY: Dimension = Dimension { id: 1 };

    /// Numeric identity of this axis.
    #[inline]
    pub const fn id(self) -> u32 {
        self.id
    }

    /// Whether this is the time axis.
    #[inline]
    pub const fn is_time(self) -> bool {
        self.id == Self::TIME.id
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Dimension::TIME => write!(f, "time"),
            Dimension::FREQUENCY => write!(f, "frequency"),
            Dimension { id } => write!(f, "dim#{}", id),
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Name-to-identity table for the dimensions used within one session.
#[derive(Debug, Clone)]
pub struct DimensionRegistry {
    names: Vec<String>,
    ids: BTreeMap<String, Dimension>,
}

impl DimensionRegistry {
    /// Create a registry seeded with `time` and `frequency`.
    pub fn new() -> Self {
        let mut registry = Self {
            names: Vec::new(),
            ids: BTreeMap::new(),
        };
        registry.dimension("time");
        registry.dimension("frequency");
        registry
    }

    /// Return the dimension registered under `name`, registering it on first use.
    pub fn dimension(&mut self, name: &str) -> Dimension {
        if let Some(&dim) = self.ids.get(name) {
            return dim;
        }

        let dim = Dimension {
            id: self.names.len() as u32,
        };
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), dim);
        dim
    }

    /// Look up a dimension without registering it.
    pub fn get(&self, name: &str) -> Option<Dimension> {
        self.ids.get(name).copied()
    }

    /// Name a dimension was registered under.
    pub fn name(&self, dim: Dimension) -> Option<&str> {
        self.names.get(dim.id as usize).map(String::as_str)
    }

    /// Number of registered dimensions.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: time and frequency are pre-registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for DimensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// DimensionSet
// ============================================================================

/// Ordered set of dimensions, least significant first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DimensionSet {
    dims: Vec<Dimension>,
}

impl DimensionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self { dims: Vec::new() }
    }

    /// The set containing only time.
    pub fn time() -> Self {
        Self {
            dims: vec![Dimension::TIME],
        }
    }

    /// The set containing time and frequency.
    pub fn time_frequency() -> Self {
        Self {
            dims: vec![Dimension::TIME, Dimension::FREQUENCY],
        }
    }

    /// Add a dimension. Returns false if it was already present.
    pub fn insert(&mut self, dim: Dimension) -> bool {
        match self.dims.binary_search(&dim) {
            Ok(_) => false,
            Err(idx) => {
                self.dims.insert(idx, dim);
                true
            }
        }
    }

    /// Builder-style `insert`.
    pub fn with(mut self, dim: Dimension) -> Self {
        self.insert(dim);
        self
    }

    /// Whether `dim` is part of the set.
    #[inline]
    pub fn contains(&self, dim: Dimension) -> bool {
        self.dims.binary_search(&dim).is_ok()
    }

    /// Number of dimensions.
    #[inline]
    pub fn len(&self) -> usize {
        self.dims.len()
    }

    /// Whether the set has no dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Dimensions in increasing significance.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Dimension> + '_ {
        self.dims.iter().copied()
    }

    /// Dimensions in increasing significance, as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Dimension] {
        &self.dims
    }

    /// The most significant dimension.
    #[inline]
    pub fn outermost(&self) -> Option<Dimension> {
        self.dims.last().copied()
    }

    /// Every element of `self` is in `other`. O(n + m).
    pub fn is_subset(&self, other: &DimensionSet) -> bool {
        if self.len() > other.len() {
            return false;
        }

        let mut theirs = other.dims.iter();
        'outer: for dim in &self.dims {
            for candidate in theirs.by_ref() {
                if candidate == dim {
                    continue 'outer;
                }
                if candidate > dim {
                    return false;
                }
            }
            return false;
        }
        true
    }

    /// `self` is a subset of `other` and strictly smaller.
    pub fn is_real_subset(&self, other: &DimensionSet) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Every element of `other` is in `self`.
    #[inline]
    pub fn is_superset(&self, other: &DimensionSet) -> bool {
        other.is_subset(self)
    }

    /// Dimensions present in either set.
    pub fn union(&self, other: &DimensionSet) -> DimensionSet {
        let mut dims = Vec::with_capacity(self.len() + other.len());
        dims.extend_from_slice(&self.dims);
        dims.extend_from_slice(&other.dims);
        dims.sort_unstable();
        dims.dedup();
        DimensionSet { dims }
    }

    /// Dimensions of `self` not present in `other`.
    pub fn difference(&self, other: &DimensionSet) -> DimensionSet {
        DimensionSet {
            dims: self
                .dims
                .iter()
                .copied()
                .filter(|d| !other.contains(*d))
                .collect(),
        }
    }
}

impl FromIterator<Dimension> for DimensionSet {
    fn from_iter<I: IntoIterator<Item = Dimension>>(iter: I) -> Self {
        let mut dims: Vec<Dimension> = iter.into_iter().collect();
        dims.sort_unstable();
        dims.dedup();
        DimensionSet { dims }
    }
}

impl<const N: usize> From<[Dimension; N]> for DimensionSet {
    fn from(dims: [Dimension; N]) -> Self {
        dims.into_iter().collect()
    }
}

impl fmt::Display for DimensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, dim) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", dim)?;
        }
        write!(f, "}}")
    }
}
