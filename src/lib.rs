//! # mapping-rs: Multi-dimensional sampled functions for Rust
//!
//! A library for representing continuously varying quantities (transmit power,
//! attenuation, noise, ...) over named axes such as time and frequency, without
//! storing dense samples everywhere.
//!
//! ## What is a mapping?
//!
//! A mapping is a function over a *domain* of axes that is known only at a set
//! of *key entries*. Between key entries values are interpolated (step, nearest
//! or linear); beyond them the nearest edge value is held or a fixed value is
//! returned.
//!
//! **Capabilities:**
//! - Point lookup with interpolation across any number of axes
//! - Ordered iteration over key entries, read-only or mutable
//! - Element-wise algebra (`+`, `-`, `*`, `/`, custom operators) between
//!   mappings over different domains
//! - Bounded and unbounded minimum/maximum search
//! - Jumps without interpolation smearing
//!
//! **How multi-dimensional mappings work:**
//!
//! The most significant axis is stored outermost. Each stored coordinate on it
//! owns a sub-mapping over the remaining axes, down to a single-axis leaf.
//! Between two stored sub-mappings, queries blend both neighbours on the fly.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use mapping_rs::prelude::*;
//!
//! let mut power = Mapping::<f64>::builder()
//!     .domain(DimensionSet::time())
//!     .interpolation(Linear)
//!     .build()?;
//!
//! power.set_value(&Argument::new(0.0), 2.0);
//! power.set_value(&Argument::new(10.0), 4.0);
//!
//! assert_eq!(power.value(&Argument::new(5.0)), 3.0);
//! assert_eq!(power.value(&Argument::new(-1.0)), 2.0);
//! # Result::<(), MappingError>::Ok(())
//! ```
//!
//! ### Time and frequency
//!
//! ```rust
//! use mapping_rs::prelude::*;
//!
//! let mut attenuation = create_mapping::<f64>(DimensionSet::time_frequency(), Linear, None)?;
//! let f = Dimension::FREQUENCY;
//!
//! attenuation.set_value(&Argument::new(0.0).with(f, 100.0), 1.0);
//! attenuation.set_value(&Argument::new(0.0).with(f, 200.0), 3.0);
//!
//! // Blended between the two stored frequency slices.
//! assert_eq!(attenuation.value(&Argument::new(0.0).with(f, 150.0)), 2.0);
//! # Result::<(), MappingError>::Ok(())
//! ```
//!
//! ### Combining mappings
//!
//! ```rust
//! use mapping_rs::prelude::*;
//!
//! let mut signal = create_mapping::<f64>(DimensionSet::time(), Linear, None)?;
//! signal.set_value(&Argument::new(0.0), 2.0);
//! signal.set_value(&Argument::new(10.0), 4.0);
//!
//! let mut noise = create_mapping::<f64>(DimensionSet::time(), Linear, None)?;
//! noise.set_value(&Argument::new(0.0), 1.0);
//! noise.set_value(&Argument::new(10.0), 1.0);
//!
//! let total = &signal + &noise;
//! assert_eq!(total.value(&Argument::new(5.0)), 4.0);
//! assert_eq!(find_max(&total), 5.0);
//! # Result::<(), MappingError>::Ok(())
//! ```
//!
//! ## Dimensions
//!
//! `Dimension::TIME` and `Dimension::FREQUENCY` are predefined. Further axes
//! are registered by name in a [`DimensionRegistry`](prelude::DimensionRegistry)
//! owned by the caller; the same name always yields the same dimension within
//! one registry. Axes registered later are more significant.
//!
//! ## Feature Flags
//!
//! - `std` (default): `std::error::Error` for `MappingError`.
//! - `dev`: internal modules for white-box testing.
//!
//! Without `std` the crate is `no_std` and needs `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains dimension identities and sets, coordinate arguments, the error
// type and the float bound.
mod primitives;

// Layer 2: Math - pure numeric functions.
//
// Contains interpolation policies and time-resolution helpers.
mod math;

// Layer 3: Algorithms - storage and traversal.
//
// Contains the interpolatable container, the recursive storage tree and the
// recursive cursor.
mod algorithms;

// Layer 4: Engine - mapping types.
//
// Contains concrete mappings, iterators, sub-mapping views and validation.
mod engine;

// Layer 5: Evaluation - algorithms over mappings.
//
// Contains domain reconciliation, element-wise operators, concatenation,
// extreme search and discontinuity insertion.
mod evaluation;

// High-level fluent API.
//
// Provides the `MappingBuilder`, the `create_mapping` factory and re-exports.
mod api;

pub use api::*;

// ============================================================================
// Prelude
// ============================================================================

/// Standard mapping prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use mapping_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        add, add_discontinuity, create_mapping, divide, find_max, find_max_in, find_min,
        find_min_in, multiply, post, pre, subtract, Argument, ConstMapping, Dimension,
        DimensionRegistry, DimensionSet, InterpolationMethod,
        InterpolationMethod::{Linear, Nearest, Step},
        Mapping, MappingBuilder, MappingError, MappingIterator, OutOfRange,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal storage and traversal algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal mapping engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation algorithms.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
