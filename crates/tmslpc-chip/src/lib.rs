//! Chip profiles for the TI LPC speech synthesizers.
//!
//! A profile is pure data: the bit width of every frame field and the
//! quantization table that turns each field code into a physical value.
//! Profiles are compiled-in `'static` constants and never change at runtime.
//!
//! Two chips are supported:
//! - `tms5110`: 4-bit energy, 1-bit repeat, 5-bit pitch
//! - `tms5220`: 4-bit energy, 1-bit repeat, 6-bit pitch
//!
//! Both use ten reflection coefficients coded in 5,5,4,4,4,4,4,3,3,3 bits.

pub mod error;
pub mod profile;
pub mod tables;

pub use error::{ChipError, Result};
pub use profile::{
    lookup, Chip, ChipProfile, K_COUNT, SUPPORTED_CHIPS, TMS5110, TMS5220, UNVOICED_K_COUNT,
};
