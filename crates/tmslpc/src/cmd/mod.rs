use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use tmslpc_chip::Chip;
use tmslpc_frame::DEFAULT_MAX_FRAMES;

use crate::exit::{chip_error, io_error, CliResult};
use crate::output::OutputFormat;

pub mod chips;
pub mod decode;
pub mod encode;
pub mod quantize;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pack JSON frames into a chip bitstream.
    Encode(EncodeArgs),
    /// Unpack a chip bitstream into frames.
    Decode(DecodeArgs),
    /// Snap JSON frames to the values a chip can represent.
    Quantize(QuantizeArgs),
    /// List supported chips and their field widths.
    Chips(ChipsArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Quantize(args) => quantize::run(args, format),
        Command::Chips(args) => chips::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// JSON file holding an array of frames ("-" for stdin).
    pub input: PathBuf,
    /// Target chip.
    #[arg(long, short = 'c', env = "TMSLPC_CHIP", value_parser = parse_chip)]
    pub chip: Chip,
    /// Write the packed bitstream to this file.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Bitstream file ("-" for stdin).
    pub input: PathBuf,
    /// Source chip.
    #[arg(long, short = 'c', env = "TMSLPC_CHIP", value_parser = parse_chip)]
    pub chip: Chip,
    /// Give up after this many frames.
    #[arg(long, default_value_t = DEFAULT_MAX_FRAMES)]
    pub max_frames: usize,
    /// Fail when bytes follow the end of the stream.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct QuantizeArgs {
    /// JSON file holding an array of frames ("-" for stdin).
    pub input: PathBuf,
    /// Target chip.
    #[arg(long, short = 'c', env = "TMSLPC_CHIP", value_parser = parse_chip)]
    pub chip: Chip,
}

#[derive(Args, Debug, Default)]
pub struct ChipsArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

fn parse_chip(input: &str) -> Result<Chip, String> {
    input
        .parse::<Chip>()
        .map_err(|err| chip_error("invalid --chip", err).message)
}

/// Read a whole input file, or stdin for `-`.
pub fn read_input(path: &Path) -> CliResult<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .map_err(|err| io_error("failed reading stdin", err))?;
        return Ok(buf);
    }
    std::fs::read(path).map_err(|err| io_error(&format!("failed reading {}", path.display()), err))
}
