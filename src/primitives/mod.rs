//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data types every other layer builds on:
//! - Axis identities and ordered axis sets
//! - Coordinate points and their ordering
//! - The crate error type
//! - The float bound shared by coordinates and values
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Coordinate points over a set of dimensions.
pub mod argument;

/// Axis identities, ordered axis sets and the name registry.
pub mod dimension;

/// Error types.
pub mod errors;

/// Float bound for coordinates and sample values.
pub mod float;
