//! Layer 5: Evaluation
//!
//! # Purpose
//!
//! This layer provides the algorithms that consume and combine mappings:
//! - Domain reconciliation (filled-up mappings)
//! - Element-wise binary operators and lazy concatenation
//! - Minimum and maximum search
//! - Discontinuity insertion
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Lazy combination of a reference mapping with others.
pub mod concat;

/// Jumps without smearing.
pub mod discontinuity;

/// Minimum and maximum search.
pub mod extremes;

/// Domain reconciliation before element-wise operators.
pub mod filled_up;

/// Element-wise binary operators.
pub mod operators;
