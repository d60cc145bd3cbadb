use std::fmt;
use std::str::FromStr;

use crate::error::{ChipError, Result};
use crate::tables;

/// Number of reflection coefficients carried by a voiced frame.
pub const K_COUNT: usize = 10;

/// Number of reflection coefficients carried by an unvoiced frame.
pub const UNVOICED_K_COUNT: usize = 4;

/// Names accepted by [`lookup`].
pub const SUPPORTED_CHIPS: [&str; 2] = ["tms5110", "tms5220"];

/// Field widths and quantization tables for one chip.
#[derive(Debug, PartialEq, Eq)]
pub struct ChipProfile {
    /// Canonical lowercase name.
    pub name: &'static str,
    /// Width of the energy field.
    pub energy_bits: u32,
    /// Width of the repeat flag.
    pub repeat_bits: u32,
    /// Width of the pitch field.
    pub pitch_bits: u32,
    /// Width of each reflection coefficient field, k1 first.
    pub k_bits: [u32; K_COUNT],
    /// Energy value for each energy code.
    pub energy_table: &'static [i32],
    /// Pitch period for each pitch code. Code 0 marks an unvoiced frame.
    pub pitch_table: &'static [i32],
    /// Coefficient value for each code, one table per slot.
    pub k_tables: [&'static [i32]; K_COUNT],
}

impl ChipProfile {
    /// Energy code reserved for the stop sentinel (all ones).
    pub fn stop_code(&self) -> u32 {
        (1 << self.energy_bits) - 1
    }

    /// Bits used by a frame header: energy, repeat flag and pitch.
    pub fn header_bits(&self) -> u32 {
        self.energy_bits + self.repeat_bits + self.pitch_bits
    }

    /// Bits used by the first `count` coefficient fields.
    pub fn k_field_bits(&self, count: usize) -> u32 {
        self.k_bits[..count].iter().sum()
    }

    /// Check that every table has exactly `2^bits` entries.
    pub fn validate(&self) -> Result<()> {
        check_table("energy", self.energy_bits, self.energy_table)?;
        check_table("pitch", self.pitch_bits, self.pitch_table)?;
        const K_NAMES: [&str; K_COUNT] =
            ["k1", "k2", "k3", "k4", "k5", "k6", "k7", "k8", "k9", "k10"];
        for ((name, bits), table) in K_NAMES.into_iter().zip(self.k_bits).zip(self.k_tables) {
            check_table(name, bits, table)?;
        }
        Ok(())
    }
}

fn check_table(field: &'static str, bits: u32, table: &[i32]) -> Result<()> {
    let expected = 1usize << bits;
    if table.len() != expected {
        return Err(ChipError::TableSize {
            field,
            expected,
            actual: table.len(),
        });
    }
    Ok(())
}

/// TMS5110: 4-bit energy, 1-bit repeat, 5-bit pitch.
pub static TMS5110: ChipProfile = ChipProfile {
    name: "tms5110",
    energy_bits: 4,
    repeat_bits: 1,
    pitch_bits: 5,
    k_bits: tables::K_BITS,
    energy_table: &tables::ENERGY,
    pitch_table: &tables::TMS5110_PITCH,
    k_tables: tables::K_TABLES,
};

/// TMS5220: same layout as the TMS5110 with a 6-bit pitch field.
pub static TMS5220: ChipProfile = ChipProfile {
    name: "tms5220",
    energy_bits: 4,
    repeat_bits: 1,
    pitch_bits: 6,
    k_bits: tables::K_BITS,
    energy_table: &tables::ENERGY,
    pitch_table: &tables::TMS5220_PITCH,
    k_tables: tables::K_TABLES,
};

/// Supported chip variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chip {
    Tms5110,
    Tms5220,
}

impl Chip {
    /// All supported chips, in [`SUPPORTED_CHIPS`] order.
    pub const ALL: [Chip; 2] = [Chip::Tms5110, Chip::Tms5220];

    /// The compiled-in profile for this chip.
    pub fn profile(self) -> &'static ChipProfile {
        match self {
            Chip::Tms5110 => &TMS5110,
            Chip::Tms5220 => &TMS5220,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        self.profile().name
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Chip {
    type Err = ChipError;

    fn from_str(s: &str) -> Result<Self> {
        Chip::ALL
            .into_iter()
            .find(|chip| chip.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChipError::UnknownChip {
                name: s.to_string(),
            })
    }
}

/// Resolve a chip name to its profile.
///
/// Matching ignores ASCII case and surrounding whitespace.
pub fn lookup(name: &str) -> Result<&'static ChipProfile> {
    let chip: Chip = name.parse()?;
    tracing::trace!(chip = chip.name(), "resolved chip profile");
    Ok(chip.profile())
}
