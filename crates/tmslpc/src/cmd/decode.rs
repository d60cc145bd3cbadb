use serde::Serialize;
use tmslpc_frame::{decode_frames, DecodeConfig, Frame};

use crate::cmd::{read_input, DecodeArgs};
use crate::exit::{codec_error, CliResult, SUCCESS};
use crate::output::{print_frames, print_json, OutputFormat};

#[derive(Serialize)]
struct DecodeOutput<'a> {
    chip: &'static str,
    frame_count: usize,
    bits_consumed: usize,
    trailing_bytes: usize,
    frames: &'a [Frame],
}

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let input = read_input(&args.input)?;
    let profile = args.chip.profile();
    let config = DecodeConfig {
        max_frames: args.max_frames,
        fail_on_trailing_data: args.strict,
    };

    let decoded =
        decode_frames(&input, profile, &config).map_err(|err| codec_error("decode failed", err))?;

    let trailing_bytes = decoded.trailing.as_ref().map_or(0, |t| t.len());
    if let Some(trailing) = &decoded.trailing {
        eprint!("{}", trailing.hexdump());
    }

    match format {
        OutputFormat::Json => print_json(&DecodeOutput {
            chip: profile.name,
            frame_count: decoded.frames.len(),
            bits_consumed: decoded.bits_consumed,
            trailing_bytes,
            frames: &decoded.frames,
        }),
        other => print_frames(&decoded.frames, other),
    }
    Ok(SUCCESS)
}
