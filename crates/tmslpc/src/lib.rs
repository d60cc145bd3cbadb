//! Encode and decode the LPC speech bitstreams of the TI TMS5110 and TMS5220.
//!
//! tmslpc turns typed speech frames (voiced, unvoiced, repeated, silent,
//! stop) into the packed bit format the chips read, and back again.
//!
//! # Crate Structure
//!
//! - [`chip`]: Per-chip field widths and quantization tables
//! - [`frame`]: Frame types, bit cursor, encoder and decoder
//!
//! ```
//! use tmslpc::frame::{decode, encode, Frame};
//!
//! let wire = encode(&[Frame::Silent, Frame::Stop], "tms5220").unwrap();
//! assert_eq!(wire.as_ref(), &[0xF0]);
//! assert_eq!(decode(&wire, "tms5220").unwrap(), vec![Frame::Silent, Frame::Stop]);
//! ```

/// Re-export chip profile types.
pub mod chip {
    pub use tmslpc_chip::*;
}

/// Re-export frame codec types.
pub mod frame {
    pub use tmslpc_frame::*;
}

pub use tmslpc_chip::{lookup, Chip, ChipError, ChipProfile};
pub use tmslpc_frame::{decode, encode, CodecError, Frame};
