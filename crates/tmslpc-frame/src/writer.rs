use bytes::Bytes;
use tmslpc_chip::ChipProfile;

use crate::bits::BitWriter;
use crate::codec::encode_frame;
use crate::frame::Frame;

/// Bytes reserved up front: a few seconds of voiced speech.
const INITIAL_BUFFER_CAPACITY: usize = 1024;

/// Accumulates frames into a packed bitstream.
pub struct FrameWriter<'p> {
    bits: BitWriter,
    profile: &'p ChipProfile,
    frames_written: usize,
}

impl<'p> FrameWriter<'p> {
    pub fn new(profile: &'p ChipProfile) -> Self {
        Self {
            bits: BitWriter::with_capacity(INITIAL_BUFFER_CAPACITY),
            profile,
            frames_written: 0,
        }
    }

    /// Append one frame.
    pub fn write_frame(&mut self, frame: &Frame) {
        encode_frame(frame, self.profile, &mut self.bits);
        self.frames_written += 1;
    }

    /// Append every frame in order.
    pub fn write_all(&mut self, frames: &[Frame]) {
        for frame in frames {
            self.write_frame(frame);
        }
    }

    /// Frames written so far.
    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Bits written so far, before padding.
    pub fn bit_len(&self) -> usize {
        self.bits.bit_len()
    }

    /// The profile frames are written against.
    pub fn profile(&self) -> &'p ChipProfile {
        self.profile
    }

    /// Finish the stream, zero-padding the final byte.
    pub fn finish(self) -> Bytes {
        tracing::debug!(
            chip = self.profile.name,
            frames = self.frames_written,
            bits = self.bits.bit_len(),
            "encoded bitstream"
        );
        self.bits.finish()
    }
}

#[cfg(test)]
mod tests {
    use tmslpc_chip::{TMS5110, TMS5220};

    use super::*;
    use crate::codec::{decode_frames, DecodeConfig};

    #[test]
    fn write_single_frame() {
        let mut writer = FrameWriter::new(&TMS5110);
        writer.write_frame(&Frame::Stop);

        assert_eq!(writer.frames_written(), 1);
        assert_eq!(writer.bit_len(), 4);
        assert_eq!(writer.finish().as_ref(), &[0x0F]);
    }

    #[test]
    fn write_multiple_frames() {
        let frames = [
            Frame::Unvoiced {
                energy: 4,
                k: [-412, 64, 98, -50],
            },
            Frame::Repeated {
                energy: 6,
                pitch: 22,
            },
            Frame::Stop,
        ];
        let mut writer = FrameWriter::new(&TMS5220);
        writer.write_all(&frames);
        assert_eq!(writer.frames_written(), 3);
        assert_eq!(writer.bit_len(), 29 + 11 + 4);

        let wire = writer.finish();
        assert_eq!(wire.len(), 6);
        let decoded = decode_frames(&wire, &TMS5220, &DecodeConfig::default()).unwrap();
        assert_eq!(decoded.frames, frames.to_vec());
    }

    #[test]
    fn pending_bytes_include_partial_last_byte() {
        let mut writer = FrameWriter::new(&TMS5110);
        writer.write_frame(&Frame::Silent);
        assert_eq!(writer.bits.as_bytes(), &[0x00]);

        writer.write_frame(&Frame::Stop);
        assert_eq!(writer.bits.as_bytes(), &[0xF0]);
        assert_eq!(writer.finish().as_ref(), &[0xF0]);
    }

    #[test]
    fn empty_writer_produces_no_bytes() {
        let writer = FrameWriter::new(&TMS5110);
        assert_eq!(writer.profile().name, "tms5110");
        assert!(writer.finish().is_empty());
    }

    #[test]
    fn incremental_and_batch_writes_agree() {
        let frames = [Frame::Silent, Frame::Silent, Frame::Stop];

        let mut one_by_one = FrameWriter::new(&TMS5110);
        for frame in &frames {
            one_by_one.write_frame(frame);
        }

        let mut batch = FrameWriter::new(&TMS5110);
        batch.write_all(&frames);

        assert_eq!(one_by_one.finish(), batch.finish());
    }
}
