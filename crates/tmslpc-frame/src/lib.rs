//! Bit-packed LPC speech frames for the TI TMS5110/TMS5220.
//!
//! This is the core of tmslpc. A speech stream is a run of variable-length
//! frames packed with no padding between them:
//! - A 4-bit energy code (0 = silent frame, all ones = stop)
//! - A 1-bit repeat flag and a 5- or 6-bit pitch code
//! - Up to ten reflection coefficient codes, fewer when unvoiced
//!
//! Every field is written most-significant bit first, filling each byte from
//! bit 0 upward. Only the last byte carries padding.

pub mod bits;
pub mod codec;
pub mod error;
pub mod frame;
pub mod quantize;
pub mod reader;
pub mod writer;

pub use bits::{BitReader, BitWriter};
pub use codec::{
    decode, decode_frame, decode_frames, encode, encode_frame, encode_frames, DecodeConfig,
    Decoded, TrailingData, DEFAULT_MAX_FRAMES,
};
pub use error::{CodecError, Result};
pub use frame::{Frame, FrameKind};
pub use quantize::{nearest_index, quantize_frame, quantize_frames};
pub use reader::FrameReader;
pub use writer::FrameWriter;
