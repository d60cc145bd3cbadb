use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use tmslpc_chip::{Chip, ChipProfile};

use crate::cmd::ChipsArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_json, OutputFormat};

#[derive(Serialize)]
struct ChipInfo {
    name: &'static str,
    energy_bits: u32,
    repeat_bits: u32,
    pitch_bits: u32,
    k_bits: Vec<u32>,
    stop_code: u32,
    pitch_codes: usize,
}

impl From<&ChipProfile> for ChipInfo {
    fn from(profile: &ChipProfile) -> Self {
        Self {
            name: profile.name,
            energy_bits: profile.energy_bits,
            repeat_bits: profile.repeat_bits,
            pitch_bits: profile.pitch_bits,
            k_bits: profile.k_bits.to_vec(),
            stop_code: profile.stop_code(),
            pitch_codes: profile.pitch_table.len(),
        }
    }
}

pub fn run(_args: ChipsArgs, format: OutputFormat) -> CliResult<i32> {
    let chips: Vec<ChipInfo> = Chip::ALL
        .iter()
        .map(|chip| ChipInfo::from(chip.profile()))
        .collect();

    match format {
        OutputFormat::Json => print_json(&chips),
        OutputFormat::Raw => {
            for chip in &chips {
                println!("{}", chip.name);
            }
        }
        OutputFormat::Table | OutputFormat::Pretty => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["CHIP", "ENERGY", "REPEAT", "PITCH", "K WIDTHS"]);
            for chip in &chips {
                table.add_row(vec![
                    chip.name.to_string(),
                    chip.energy_bits.to_string(),
                    chip.repeat_bits.to_string(),
                    chip.pitch_bits.to_string(),
                    chip.k_bits
                        .iter()
                        .map(|w| w.to_string())
                        .collect::<Vec<_>>()
                        .join(","),
                ]);
            }
            println!("{table}");
        }
    }
    Ok(SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_reflects_pitch_width() {
        let info = ChipInfo::from(Chip::Tms5110.profile());
        assert_eq!(info.pitch_bits, 5);
        assert_eq!(info.pitch_codes, 32);
        assert_eq!(info.stop_code, 15);
        assert_eq!(info.k_bits, vec![5, 5, 4, 4, 4, 4, 4, 3, 3, 3]);
    }
}
