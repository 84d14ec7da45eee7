//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the storage and traversal machinery behind mappings:
//! - The key-ordered interpolatable container and its single-axis cursor
//! - The recursive storage tree
//! - The recursive cursor composing single-axis cursors across dimensions
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Key-ordered interpolatable container.
pub mod container;

/// Recursive cursor over stored trees and ephemeral blends.
pub mod cursor;

/// Recursive storage tree.
pub mod node;
