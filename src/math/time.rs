//! Time-resolution helpers for modelling jumps.
//!
//! ## Purpose
//!
//! A discontinuity is stored as two key entries at adjacent representable
//! instants. This module names those instants.
//!
//! ## Key concepts
//!
//! * **pre(t)**: Greatest representable instant before `t`.
//! * **post(t)**: Smallest representable instant after `t`.
//! * **inc_next_position(v)**: Smallest representable coordinate after `v` on
//!   any axis, used to open a half-open interval just past a key.
//!
//! ## Invariants
//!
//! * `pre(t) < t < post(t)` for every finite `t`.

// Internal dependencies
use crate::primitives::float::MappingFloat;

/// The representable instant immediately before `t`.
#[inline]
pub fn pre<T: MappingFloat>(t: T) -> T {
    t.step_down()
}

/// The representable instant immediately after `t`.
#[inline]
pub fn post<T: MappingFloat>(t: T) -> T {
    t.step_up()
}

/// The representable coordinate immediately after `value`.
#[inline]
pub fn inc_next_position<T: MappingFloat>(value: T) -> T {
    value.step_up()
}
