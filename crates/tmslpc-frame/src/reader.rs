use bytes::Bytes;
use tmslpc_chip::ChipProfile;

use crate::bits::BitReader;
use crate::codec::{decode_frame, TrailingData};
use crate::error::Result;
use crate::frame::Frame;

/// Reads frames one at a time from a packed bitstream.
///
/// Stops after a `Stop` frame, at the end of the buffer, or on the first
/// error. Zero bits too short to hold an energy field are treated as the
/// final byte's padding.
pub struct FrameReader<'a> {
    bits: BitReader<'a>,
    profile: &'a ChipProfile,
    finished: bool,
}

impl<'a> FrameReader<'a> {
    pub fn new(data: &'a [u8], profile: &'a ChipProfile) -> Self {
        Self {
            bits: BitReader::new(data),
            profile,
            finished: false,
        }
    }

    /// Read the next frame.
    ///
    /// Returns `Ok(None)` once the stream has ended.
    pub fn read_frame(&mut self) -> Result<Option<Frame>> {
        if self.finished || self.at_padding() {
            self.finished = true;
            return Ok(None);
        }

        let offset = self.bits.position();
        match decode_frame(&mut self.bits, self.profile) {
            Ok(frame) => {
                tracing::trace!(bit_offset = offset, kind = %frame.kind(), "decoded frame");
                if frame.is_stop() {
                    self.finished = true;
                }
                Ok(Some(frame))
            }
            Err(err) => {
                self.finished = true;
                Err(err)
            }
        }
    }

    fn at_padding(&self) -> bool {
        let remaining = self.bits.remaining();
        remaining == 0
            || (remaining < self.profile.energy_bits as usize && self.bits.rest_is_zero())
    }

    /// True once a stop frame, the end of data, or an error was reached.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Bits consumed so far.
    pub fn bits_consumed(&self) -> usize {
        self.bits.position()
    }

    /// Bytes beyond the current position, rounded up to whole bytes.
    ///
    /// Only meaningful once the reader is finished.
    pub fn trailing(&self) -> Option<TrailingData> {
        let data = self.bits.data();
        let offset = self.bits.byte_position();
        if offset >= data.len() {
            return None;
        }
        Some(TrailingData {
            offset,
            bytes: Bytes::copy_from_slice(&data[offset..]),
        })
    }

    /// The profile frames are read against.
    pub fn profile(&self) -> &'a ChipProfile {
        self.profile
    }
}

impl Iterator for FrameReader<'_> {
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_frame().transpose()
    }
}

#[cfg(test)]
mod tests {
    use tmslpc_chip::{TMS5110, TMS5220};

    use super::*;
    use crate::codec::encode_frames;
    use crate::error::CodecError;

    #[test]
    fn read_single_frame() {
        let wire = encode_frames(&[Frame::Stop], &TMS5110);
        let mut reader = FrameReader::new(&wire, &TMS5110);

        assert_eq!(reader.read_frame().unwrap(), Some(Frame::Stop));
        assert!(reader.is_finished());
        assert_eq!(reader.read_frame().unwrap(), None);
    }

    #[test]
    fn iterate_multiple_frames() {
        let frames = [
            Frame::Silent,
            Frame::Repeated {
                energy: 63,
                pitch: 101,
            },
            Frame::Silent,
            Frame::Stop,
        ];
        let wire = encode_frames(&frames, &TMS5220);

        let read: Vec<Frame> = FrameReader::new(&wire, &TMS5220)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(read, frames.to_vec());
    }

    #[test]
    fn frames_after_stop_are_ignored() {
        let wire = encode_frames(&[Frame::Stop, Frame::Silent, Frame::Stop], &TMS5110);
        let mut reader = FrameReader::new(&wire, &TMS5110);

        assert_eq!(reader.by_ref().count(), 1);
        assert_eq!(reader.bits_consumed(), 4);
        // The second nibble of byte 0 still counts as consumed.
        let trailing = reader.trailing().unwrap();
        assert_eq!(trailing.offset, 1);
        assert_eq!(trailing.len(), 1);
    }

    #[test]
    fn wide_zero_padding_reads_as_silence() {
        // 10-bit repeated frame leaves 6 padding bits: enough for one more
        // energy field, which reads as silence.
        let wire = encode_frames(
            &[Frame::Repeated {
                energy: 16,
                pitch: 50,
            }],
            &TMS5110,
        );
        let frames: Vec<Frame> = FrameReader::new(&wire, &TMS5110)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1], Frame::Silent);
    }

    #[test]
    fn error_ends_iteration() {
        let wire = [0x01];
        let mut reader = FrameReader::new(&wire, &TMS5110);

        // Energy 8, then the pitch field runs off the end.
        let err = reader.next().unwrap().unwrap_err();
        assert!(matches!(err, CodecError::TruncatedStream { .. }));
        assert!(reader.next().is_none());
    }

    #[test]
    fn empty_buffer_yields_nothing() {
        let mut reader = FrameReader::new(&[], &TMS5110);
        assert!(reader.next().is_none());
        assert!(reader.trailing().is_none());
        assert_eq!(reader.profile().name, "tms5110");
    }
}
