use std::fmt::Write as _;

use bytes::Bytes;
use tmslpc_chip::{lookup, ChipProfile, K_COUNT, UNVOICED_K_COUNT};

use crate::bits::{BitReader, BitWriter};
use crate::error::{CodecError, Result};
use crate::frame::Frame;
use crate::quantize::{energy_code, k_code, pitch_code};
use crate::reader::FrameReader;
use crate::writer::FrameWriter;

/// Default cap on the number of frames a single decode may produce.
pub const DEFAULT_MAX_FRAMES: usize = 64 * 1024;

/// Append one frame to the bitstream.
///
/// Wire layout (widths from the profile):
/// ```text
/// Silent    energy=0
/// Stop      energy=all ones
/// Repeated  energy | repeat=1 | pitch
/// Unvoiced  energy | repeat=0 | pitch=0 | k1..k4
/// Voiced    energy | repeat=0 | pitch≠0 | k1..k10
/// ```
pub fn encode_frame(frame: &Frame, profile: &ChipProfile, dst: &mut BitWriter) {
    match *frame {
        Frame::Silent => dst.write_bits(0, profile.energy_bits),
        Frame::Stop => dst.write_bits(profile.stop_code(), profile.energy_bits),
        Frame::Repeated { energy, pitch } => {
            dst.write_bits(energy_code(profile, energy), profile.energy_bits);
            dst.write_bits(1, profile.repeat_bits);
            dst.write_bits(pitch_code(profile, pitch), profile.pitch_bits);
        }
        Frame::Unvoiced { energy, k } => {
            dst.write_bits(energy_code(profile, energy), profile.energy_bits);
            dst.write_bits(0, profile.repeat_bits);
            dst.write_bits(0, profile.pitch_bits);
            write_coefficients(&k, profile, dst);
        }
        Frame::Voiced { energy, pitch, k } => {
            dst.write_bits(energy_code(profile, energy), profile.energy_bits);
            dst.write_bits(0, profile.repeat_bits);
            dst.write_bits(pitch_code(profile, pitch), profile.pitch_bits);
            write_coefficients(&k, profile, dst);
        }
    }
}

fn write_coefficients(k: &[i32], profile: &ChipProfile, dst: &mut BitWriter) {
    for (slot, value) in k.iter().enumerate() {
        dst.write_bits(k_code(profile, slot, *value), profile.k_bits[slot]);
    }
}

/// Read one frame from the bitstream.
///
/// The field values read so far decide what comes next: energy 0 and the
/// stop code end the frame immediately, a set repeat flag ends it after the
/// pitch, and pitch 0 ends it after four coefficients.
pub fn decode_frame(src: &mut BitReader<'_>, profile: &ChipProfile) -> Result<Frame> {
    let energy = src.read_bits(profile.energy_bits)?;
    if energy == 0 {
        return Ok(Frame::Silent);
    }
    if energy == profile.stop_code() {
        return Ok(Frame::Stop);
    }

    let repeat = src.read_bits(profile.repeat_bits)?;
    let pitch = src.read_bits(profile.pitch_bits)?;
    let energy = profile.energy_table[energy as usize];
    if repeat != 0 {
        return Ok(Frame::Repeated {
            energy,
            pitch: profile.pitch_table[pitch as usize],
        });
    }

    let mut k = [0i32; K_COUNT];
    read_coefficients(&mut k[..UNVOICED_K_COUNT], 0, profile, src)?;
    if pitch == 0 {
        let mut unvoiced = [0i32; UNVOICED_K_COUNT];
        unvoiced.copy_from_slice(&k[..UNVOICED_K_COUNT]);
        return Ok(Frame::Unvoiced {
            energy,
            k: unvoiced,
        });
    }

    read_coefficients(&mut k[UNVOICED_K_COUNT..], UNVOICED_K_COUNT, profile, src)?;
    Ok(Frame::Voiced {
        energy,
        pitch: profile.pitch_table[pitch as usize],
        k,
    })
}

fn read_coefficients(
    out: &mut [i32],
    first_slot: usize,
    profile: &ChipProfile,
    src: &mut BitReader<'_>,
) -> Result<()> {
    for (offset, value) in out.iter_mut().enumerate() {
        let slot = first_slot + offset;
        let code = src.read_bits(profile.k_bits[slot])?;
        *value = profile.k_tables[slot][code as usize];
    }
    Ok(())
}

/// Encode a frame sequence into a packed, zero-padded byte buffer.
///
/// Encoding never fails: every value snaps to its nearest table entry.
pub fn encode_frames(frames: &[Frame], profile: &ChipProfile) -> Bytes {
    let mut writer = FrameWriter::new(profile);
    writer.write_all(frames);
    writer.finish()
}

/// Decode a packed buffer until a stop frame or the end of the data.
pub fn decode_frames(
    data: &[u8],
    profile: &ChipProfile,
    config: &DecodeConfig,
) -> Result<Decoded> {
    let mut reader = FrameReader::new(data, profile);
    let mut frames = Vec::new();

    while let Some(frame) = reader.read_frame()? {
        if frames.len() == config.max_frames {
            return Err(CodecError::TooManyFrames {
                max: config.max_frames,
            });
        }
        frames.push(frame);
    }

    let trailing = reader.trailing();
    if let Some(trailing) = &trailing {
        if config.fail_on_trailing_data {
            return Err(CodecError::TrailingData {
                offset: trailing.offset,
                count: trailing.len(),
            });
        }
        tracing::warn!(
            offset = trailing.offset,
            count = trailing.len(),
            "{} trailing bytes unused",
            trailing.len()
        );
    }

    tracing::debug!(
        chip = profile.name,
        frames = frames.len(),
        bits = reader.bits_consumed(),
        "decoded bitstream"
    );

    Ok(Decoded {
        frames,
        bits_consumed: reader.bits_consumed(),
        trailing,
    })
}

/// Encode frames for the chip named `chip`.
pub fn encode(frames: &[Frame], chip: &str) -> Result<Bytes> {
    let profile = lookup(chip)?;
    Ok(encode_frames(frames, profile))
}

/// Decode a bitstream for the chip named `chip` with default settings.
///
/// Trailing bytes after the stream are logged, not returned; use
/// [`decode_frames`] to inspect them.
pub fn decode(data: &[u8], chip: &str) -> Result<Vec<Frame>> {
    let profile = lookup(chip)?;
    decode_frames(data, profile, &DecodeConfig::default()).map(|decoded| decoded.frames)
}

/// Configuration for decoding.
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    /// Maximum number of frames to decode. Default: 65536.
    pub max_frames: usize,
    /// Turn trailing bytes after the stream into [`CodecError::TrailingData`].
    pub fail_on_trailing_data: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_frames: DEFAULT_MAX_FRAMES,
            fail_on_trailing_data: false,
        }
    }
}

/// Result of decoding a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Frames in playback order, ending with `Stop` if one was read.
    pub frames: Vec<Frame>,
    /// Bits read from the buffer.
    pub bits_consumed: usize,
    /// Bytes past the logical end of the stream.
    pub trailing: Option<TrailingData>,
}

/// Bytes left over after the last decoded frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingData {
    /// Byte offset of the first unused byte.
    pub offset: usize,
    /// The unused bytes.
    pub bytes: Bytes,
}

impl TrailingData {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Hex dump of the unused bytes, 16 per line, addressed from the start
    /// of the buffer.
    pub fn hexdump(&self) -> String {
        let mut out = String::new();
        for (row, chunk) in self.bytes.chunks(16).enumerate() {
            let _ = write!(out, "{:04x}:", self.offset + row * 16);
            for byte in chunk {
                let _ = write!(out, " {byte:02x}");
            }
            out.push('\n');
        }
        out
    }
}
