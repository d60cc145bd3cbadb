use tmslpc_chip::ChipError;

/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The chip name could not be resolved to a profile.
    #[error(transparent)]
    Chip(#[from] ChipError),

    /// A frame field extends past the last bit of the buffer.
    #[error("bitstream truncated at bit {bit_offset} (field needs {needed} bits, {available} left)")]
    TruncatedStream {
        bit_offset: usize,
        needed: u32,
        available: usize,
    },

    /// Decoding produced more frames than the configured limit.
    #[error("too many frames (max {max})")]
    TooManyFrames { max: usize },

    /// Bytes remain after the logical end of the stream (strict decoding only).
    #[error("{count} trailing bytes after end of stream at offset {offset}")]
    TrailingData { offset: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;
