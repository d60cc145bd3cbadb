use tmslpc_frame::quantize_frames;

use crate::cmd::encode::parse_frames;
use crate::cmd::{read_input, QuantizeArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_frames, OutputFormat};

/// Show the frames a chip would actually play back, without packing them.
pub fn run(args: QuantizeArgs, format: OutputFormat) -> CliResult<i32> {
    let input = read_input(&args.input)?;
    let frames = parse_frames(&input)?;
    let quantized = quantize_frames(&frames, args.chip.profile());

    let changed = frames
        .iter()
        .zip(&quantized)
        .filter(|(before, after)| before != after)
        .count();
    tracing::debug!(
        chip = args.chip.name(),
        frames = frames.len(),
        changed,
        "quantized frames"
    );

    print_frames(&quantized, format);
    Ok(SUCCESS)
}
