//! Bit cursor over a byte buffer.
//!
//! Field values travel most-significant bit first. Inside each byte the
//! first bit of the stream occupies bit 0, the next bit 1, and so on up to
//! bit 7, which is the order the TMS chips shift data in.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{CodecError, Result};

/// Appends fixed-width fields to a growing byte buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    buf: BytesMut,
    bit_len: usize,
}

impl BitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty writer with room for `bytes` bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(bytes),
            bit_len: 0,
        }
    }

    /// Append the low `width` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u32, width: u32) {
        debug_assert!(width <= 32);
        debug_assert!(width == 32 || value >> width == 0, "value wider than field");

        for shift in (0..width).rev() {
            let bit_in_byte = self.bit_len % 8;
            if bit_in_byte == 0 {
                self.buf.put_u8(0);
            }
            if (value >> shift) & 1 == 1 {
                let last = self.buf.len() - 1;
                self.buf[last] |= 1 << bit_in_byte;
            }
            self.bit_len += 1;
        }
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Bytes written so far, including a partially filled last byte.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Finish writing. Unused bits of the last byte are zero.
    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }
}

/// Reads fixed-width fields from a byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Start reading at the first bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Read a `width`-bit field, most significant bit first.
    ///
    /// Fails without consuming anything if fewer than `width` bits remain.
    pub fn read_bits(&mut self, width: u32) -> Result<u32> {
        debug_assert!(width <= 32);
        let available = self.remaining();
        if available < width as usize {
            return Err(CodecError::TruncatedStream {
                bit_offset: self.pos,
                needed: width,
                available,
            });
        }

        let mut value = 0u32;
        for _ in 0..width {
            let bit = (self.data[self.pos / 8] >> (self.pos % 8)) & 1;
            value = (value << 1) | u32::from(bit);
            self.pos += 1;
        }
        Ok(value)
    }

    /// Bits consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bits left in the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }

    /// Bytes touched so far, counting a partially read byte as consumed.
    pub fn byte_position(&self) -> usize {
        self.pos.div_ceil(8)
    }

    /// True when every unread bit is zero.
    ///
    /// Scans each unread bit; the frame reader only calls this once fewer
    /// than an energy field's worth of bits remain.
    pub fn rest_is_zero(&self) -> bool {
        (self.pos..self.data.len() * 8).all(|bit| (self.data[bit / 8] >> (bit % 8)) & 1 == 0)
    }

    /// The underlying buffer.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}
