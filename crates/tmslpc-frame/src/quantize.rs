//! Nearest-value quantization against chip tables.

use tmslpc_chip::ChipProfile;

use crate::frame::Frame;

/// Index of the table entry closest to `value`.
///
/// Ties resolve to the earliest position holding the winning value, so a
/// value exactly equal to an entry maps to that entry's first occurrence.
/// Values outside the table's range saturate to the nearest edge.
///
/// `table` must not be empty.
pub fn nearest_index(table: &[i32], value: i32) -> usize {
    let mut best = 0;
    let mut best_distance = u64::MAX;
    for (index, entry) in table.iter().enumerate() {
        let distance = (i64::from(*entry) - i64::from(value)).unsigned_abs();
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}

/// Energy code for a frame that carries an energy value.
///
/// Values at or below zero land on code 0, which reads back as silence.
pub(crate) fn energy_code(profile: &ChipProfile, energy: i32) -> u32 {
    nearest_index(profile.energy_table, energy) as u32
}

/// Pitch code for a repeated or voiced frame.
///
/// A voiced pitch that lands on code 0 reads back as unvoiced.
pub(crate) fn pitch_code(profile: &ChipProfile, pitch: i32) -> u32 {
    nearest_index(profile.pitch_table, pitch) as u32
}

/// Code for reflection coefficient slot `slot` (0-based).
pub(crate) fn k_code(profile: &ChipProfile, slot: usize, value: i32) -> u32 {
    nearest_index(profile.k_tables[slot], value) as u32
}

/// Replace every value in `frame` with the table value the encoder would
/// pick for it under `profile`.
pub fn quantize_frame(frame: &Frame, profile: &ChipProfile) -> Frame {
    let energy_of = |energy| profile.energy_table[energy_code(profile, energy) as usize];
    let k_of = |slot, value| profile.k_tables[slot][k_code(profile, slot, value) as usize];

    match *frame {
        Frame::Voiced { energy, pitch, k } => Frame::Voiced {
            energy: energy_of(energy),
            pitch: profile.pitch_table[pitch_code(profile, pitch) as usize],
            k: std::array::from_fn(|slot| k_of(slot, k[slot])),
        },
        Frame::Unvoiced { energy, k } => Frame::Unvoiced {
            energy: energy_of(energy),
            k: std::array::from_fn(|slot| k_of(slot, k[slot])),
        },
        Frame::Repeated { energy, pitch } => Frame::Repeated {
            energy: energy_of(energy),
            pitch: profile.pitch_table[pitch_code(profile, pitch) as usize],
        },
        Frame::Silent => Frame::Silent,
        Frame::Stop => Frame::Stop,
    }
}

/// [`quantize_frame`] over a sequence.
pub fn quantize_frames(frames: &[Frame], profile: &ChipProfile) -> Vec<Frame> {
    frames
        .iter()
        .map(|frame| quantize_frame(frame, profile))
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tmslpc_chip::{Chip, TMS5110, TMS5220};

    use super::*;

    #[test]
    fn exact_values_map_to_themselves() {
        for chip in Chip::ALL {
            let profile = chip.profile();
            for table in profile.k_tables.iter().chain([&profile.pitch_table]) {
                for (i, value) in table.iter().enumerate() {
                    assert_eq!(nearest_index(table, *value), i);
                }
            }
        }
    }

    #[test]
    fn duplicate_values_resolve_to_first_occurrence() {
        // Energy code 15 duplicates code 0.
        assert_eq!(nearest_index(&TMS5110.energy_table, 0), 0);
        assert_eq!(nearest_index(&[5, 9, 5, 1], 5), 0);
        assert_eq!(nearest_index(&[9, 3, 7, 3], 4), 1);
    }

    #[test]
    fn equidistant_picks_earlier_entry() {
        assert_eq!(nearest_index(&[10, 20], 15), 0);
        assert_eq!(nearest_index(&[20, 10], 15), 0);
        // 15 between 11 (code 7) and 16 (code 8) is closer to 16.
        assert_eq!(nearest_index(&TMS5110.energy_table, 15), 8);
    }

    #[test]
    fn out_of_range_saturates() {
        assert_eq!(nearest_index(&TMS5110.pitch_table, 159), 31);
        assert_eq!(nearest_index(&TMS5110.pitch_table, 10_000), 31);
        assert_eq!(nearest_index(&TMS5220.pitch_table, 159), 63);
        assert_eq!(nearest_index(&TMS5220.k_tables[0], i32::MIN), 0);
        assert_eq!(nearest_index(&TMS5220.k_tables[0], i32::MAX), 31);
    }

    #[test]
    fn energy_at_or_below_zero_maps_to_silence_code() {
        assert_eq!(energy_code(&TMS5110, 0), 0);
        assert_eq!(energy_code(&TMS5110, -40), 0);
        assert_eq!(energy_code(&TMS5110, 1), 1);
        assert_eq!(energy_code(&TMS5110, 114), 14);
        assert_eq!(energy_code(&TMS5110, 500), 14);
    }

    #[test]
    fn low_pitch_maps_to_code_zero() {
        assert_eq!(pitch_code(&TMS5110, 0), 0);
        assert_eq!(pitch_code(&TMS5220, 3), 0);
        assert_eq!(pitch_code(&TMS5220, 8), 1);
        assert_eq!(pitch_code(&TMS5220, 40), 26);
    }

    #[test]
    fn quantize_uses_plain_nearest_values() {
        let frame = Frame::Voiced {
            energy: -5,
            pitch: 3,
            k: [0; 10],
        };
        match quantize_frame(&frame, &TMS5220) {
            Frame::Voiced { energy, pitch, .. } => {
                assert_eq!(energy, 0);
                assert_eq!(pitch, 0);
            }
            other => panic!("unexpected frame: {other:?}"),
        }
    }

    #[test]
    fn quantize_snaps_every_field() {
        let frame = Frame::Voiced {
            energy: 30,
            pitch: 41,
            k: [-500, 0, 0, 0, 0, 0, 0, 0, 0, 300],
        };
        let snapped = quantize_frame(&frame, &TMS5110);
        assert_eq!(
            snapped,
            Frame::Voiced {
                energy: 33,
                pitch: 40,
                k: [-501, -18, -9, 5, -3, 10, -21, 29, -15, 307],
            }
        );
    }

    #[test]
    fn quantize_keeps_markers() {
        let frames = [Frame::Silent, Frame::Stop];
        assert_eq!(quantize_frames(&frames, &TMS5220), frames.to_vec());
    }

    proptest! {
        #[test]
        fn quantize_is_idempotent(energy in -200i32..300, pitch in -50i32..400, k in proptest::array::uniform10(-600i32..600)) {
            let frame = Frame::Voiced { energy, pitch, k };
            let once = quantize_frame(&frame, &TMS5220);
            prop_assert_eq!(quantize_frame(&once, &TMS5220), once);
        }

        #[test]
        fn nearest_is_never_beaten(value in -1000i32..1000) {
            for table in TMS5110.k_tables {
                let best = nearest_index(table, value);
                let best_distance = (table[best] - value).abs();
                prop_assert!(table.iter().all(|v| (v - value).abs() >= best_distance));
                prop_assert!(table[..best].iter().all(|v| (v - value).abs() > best_distance));
            }
        }
    }
}
