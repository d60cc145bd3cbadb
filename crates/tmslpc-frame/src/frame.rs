use std::fmt;

use tmslpc_chip::{ChipProfile, K_COUNT, UNVOICED_K_COUNT};

/// One 20-25 ms unit of LPC speech parameters.
///
/// Values are physical (table values), not codes. Encoding snaps each value
/// to the nearest entry of the chip's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum Frame {
    /// Full spectral frame driven by a pitch pulse train.
    Voiced {
        energy: i32,
        pitch: i32,
        k: [i32; K_COUNT],
    },
    /// Noise-excited frame carrying only k1..k4.
    Unvoiced {
        energy: i32,
        k: [i32; UNVOICED_K_COUNT],
    },
    /// New energy and pitch, coefficients carried over from the previous frame.
    Repeated { energy: i32, pitch: i32 },
    /// Zero energy.
    Silent,
    /// End of utterance.
    Stop,
}

/// The variant of a [`Frame`] without its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Voiced,
    Unvoiced,
    Repeated,
    Silent,
    Stop,
}

impl FrameKind {
    /// Lowercase name, matching the serialized `type` tag.
    pub fn name(self) -> &'static str {
        match self {
            FrameKind::Voiced => "voiced",
            FrameKind::Unvoiced => "unvoiced",
            FrameKind::Repeated => "repeated",
            FrameKind::Silent => "silent",
            FrameKind::Stop => "stop",
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl Frame {
    pub fn kind(&self) -> FrameKind {
        match self {
            Frame::Voiced { .. } => FrameKind::Voiced,
            Frame::Unvoiced { .. } => FrameKind::Unvoiced,
            Frame::Repeated { .. } => FrameKind::Repeated,
            Frame::Silent => FrameKind::Silent,
            Frame::Stop => FrameKind::Stop,
        }
    }

    /// Energy, if the frame carries one.
    pub fn energy(&self) -> Option<i32> {
        match *self {
            Frame::Voiced { energy, .. }
            | Frame::Unvoiced { energy, .. }
            | Frame::Repeated { energy, .. } => Some(energy),
            Frame::Silent | Frame::Stop => None,
        }
    }

    /// Pitch period, if the frame carries one.
    pub fn pitch(&self) -> Option<i32> {
        match *self {
            Frame::Voiced { pitch, .. } | Frame::Repeated { pitch, .. } => Some(pitch),
            Frame::Unvoiced { .. } | Frame::Silent | Frame::Stop => None,
        }
    }

    /// Reflection coefficients carried by the frame, k1 first.
    pub fn coefficients(&self) -> &[i32] {
        match self {
            Frame::Voiced { k, .. } => k.as_slice(),
            Frame::Unvoiced { k, .. } => k.as_slice(),
            Frame::Repeated { .. } | Frame::Silent | Frame::Stop => &[],
        }
    }

    /// Number of bits this frame occupies in `profile`'s bitstream.
    pub fn bit_len(&self, profile: &ChipProfile) -> u32 {
        match self {
            Frame::Silent | Frame::Stop => profile.energy_bits,
            Frame::Repeated { .. } => profile.header_bits(),
            Frame::Unvoiced { .. } => profile.header_bits() + profile.k_field_bits(UNVOICED_K_COUNT),
            Frame::Voiced { .. } => profile.header_bits() + profile.k_field_bits(K_COUNT),
        }
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, Frame::Stop)
    }
}

#[cfg(test)]
mod tests {
    use tmslpc_chip::{TMS5110, TMS5220};

    use super::*;

    #[test]
    fn accessors_follow_variant() {
        let voiced = Frame::Voiced {
            energy: 47,
            pitch: 80,
            k: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        };
        assert_eq!(voiced.kind(), FrameKind::Voiced);
        assert_eq!(voiced.energy(), Some(47));
        assert_eq!(voiced.pitch(), Some(80));
        assert_eq!(voiced.coefficients().len(), 10);

        let unvoiced = Frame::Unvoiced {
            energy: 8,
            k: [1, 2, 3, 4],
        };
        assert_eq!(unvoiced.pitch(), None);
        assert_eq!(unvoiced.coefficients(), &[1, 2, 3, 4]);

        assert_eq!(Frame::Silent.energy(), None);
        assert!(Frame::Stop.coefficients().is_empty());
        assert!(Frame::Stop.is_stop());
    }

    #[test]
    fn bit_lengths_per_chip() {
        let repeated = Frame::Repeated {
            energy: 1,
            pitch: 15,
        };
        let unvoiced = Frame::Unvoiced {
            energy: 1,
            k: [0; 4],
        };
        let voiced = Frame::Voiced {
            energy: 1,
            pitch: 15,
            k: [0; 10],
        };

        assert_eq!(Frame::Silent.bit_len(&TMS5110), 4);
        assert_eq!(Frame::Stop.bit_len(&TMS5220), 4);
        assert_eq!(repeated.bit_len(&TMS5110), 10);
        assert_eq!(repeated.bit_len(&TMS5220), 11);
        assert_eq!(unvoiced.bit_len(&TMS5110), 28);
        assert_eq!(voiced.bit_len(&TMS5110), 49);
        assert_eq!(voiced.bit_len(&TMS5220), 50);
    }

    #[test]
    fn kind_names() {
        assert_eq!(FrameKind::Unvoiced.to_string(), "unvoiced");
        assert_eq!(Frame::Repeated { energy: 0, pitch: 0 }.kind().name(), "repeated");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_type_tag() {
        let json = serde_json::to_string(&Frame::Silent).unwrap();
        assert_eq!(json, r#"{"type":"silent"}"#);

        let frame: Frame =
            serde_json::from_str(r#"{"type":"repeated","energy":16,"pitch":40}"#).unwrap();
        assert_eq!(
            frame,
            Frame::Repeated {
                energy: 16,
                pitch: 40
            }
        );

        let unvoiced: Frame =
            serde_json::from_str(r#"{"type":"unvoiced","energy":4,"k":[-1,24,45,5]}"#).unwrap();
        assert_eq!(unvoiced.coefficients(), &[-1, 24, 45, 5]);
    }
}
