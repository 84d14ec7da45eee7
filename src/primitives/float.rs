//! Numeric trait shared by coordinates and sample values.
//!
//! ## Purpose
//!
//! Mappings store coordinates (time, frequency, ...) and sample values in one
//! float type. This module defines the bound every mapping is generic over.
//!
//! ## Design notes
//!
//! * **Generics**: Builds on `num_traits::Float` so `f32` and `f64` both work.
//! * **Neighbour stepping**: `step_up`/`step_down` name the representable value
//!   immediately above/below, used to model jumps without smearing.
//!
//! ## Non-goals
//!
//! * This module does not provide fixed-point or integer time types.

// External dependencies
use core::fmt::{Debug, Display};
use num_traits::Float;

/// Float type usable as a mapping coordinate and sample value.
pub trait MappingFloat: Float + Debug + Display + Default + 'static {
    /// Smallest representable value strictly greater than `self`.
    fn step_up(self) -> Self;

    /// Greatest representable value strictly smaller than `self`.
    fn step_down(self) -> Self;

    /// Lossy conversion used for diagnostics and error payloads.
    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl MappingFloat for f64 {
    #[inline]
    fn step_up(self) -> Self {
        self.next_up()
    }

    #[inline]
    fn step_down(self) -> Self {
        self.next_down()
    }
}

impl MappingFloat for f32 {
    #[inline]
    fn step_up(self) -> Self {
        self.next_up()
    }

    #[inline]
    fn step_down(self) -> Self {
        self.next_down()
    }
}
