//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer provides the mapping types callers hold:
//! - Concrete leaf and multi-dimensional mappings
//! - Read-only and mutable iterators
//! - Borrowed sub-mapping views and ephemeral blends
//! - Configuration validation
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sub-mapping views and the ephemeral interpolated mapping.
pub mod interpolated;

/// Mapping iterators.
pub mod iterator;

/// Concrete mappings and the read-only mapping interface.
pub mod mapping;

/// Configuration validation.
pub mod validator;
