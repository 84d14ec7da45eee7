//! Discontinuities without interpolation smearing.
//!
//! ## Purpose
//!
//! A linearly interpolated mapping cannot jump: between two key entries it
//! blends. This module stores a jump as two key entries at adjacent instants,
//! typically `pre(t)`/`t` or `t`/`post(t)`.
//!
//! ## Invariants
//!
//! * Both key entries share every non-time coordinate.

// Internal dependencies
use crate::engine::mapping::Mapping;
use crate::primitives::argument::Argument;
use crate::primitives::errors::MappingError;
use crate::primitives::float::MappingFloat;

/// Store `value` at `pos` and `limit_value` at the same coordinates but at
/// `limit_time`.
///
/// `limit_time` is usually `pre(pos.time())` or `post(pos.time())`; it must
/// differ from `pos.time()`.
pub fn add_discontinuity<T: MappingFloat>(
    mapping: &mut Mapping<T>,
    pos: &Argument<T>,
    value: T,
    limit_time: T,
    limit_value: T,
) -> Result<(), MappingError> {
    if limit_time == pos.time() {
        return Err(MappingError::DegenerateDiscontinuity {
            time: pos.time().to_f64_lossy(),
        });
    }

    tracing::debug!(
        at = %pos,
        limit_time = %limit_time,
        "adding discontinuity"
    );

    mapping.set_value(pos, value);
    let mut limit = pos.clone();
    limit.set_time(limit_time);
    mapping.set_value(&limit, limit_value);
    Ok(())
}
