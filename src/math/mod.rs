//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numeric building blocks:
//! - Interpolation policies over a bracketing pair of samples
//! - Representable-neighbour time helpers
//!
//! These functions know nothing about dimensions or mapping storage.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Step, nearest and linear interpolation with out-of-range policy.
pub mod interpolation;

/// Instants immediately before and after a time.
pub mod time;
