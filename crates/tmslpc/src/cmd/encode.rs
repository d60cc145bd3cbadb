use serde::Serialize;
use tmslpc_frame::{encode_frames, Frame};

use crate::cmd::{read_input, EncodeArgs};
use crate::exit::{io_error, json_error, CliResult, SUCCESS};
use crate::output::{hex, print_json, print_raw, OutputFormat};

#[derive(Serialize)]
struct EncodeOutput {
    chip: &'static str,
    frames: usize,
    bytes: usize,
    hex: String,
}

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let input = read_input(&args.input)?;
    let frames = parse_frames(&input)?;
    let profile = args.chip.profile();
    let packed = encode_frames(&frames, profile);

    tracing::info!(
        chip = profile.name,
        frames = frames.len(),
        bytes = packed.len(),
        "encoded frames"
    );

    if let Some(path) = &args.output {
        std::fs::write(path, &packed)
            .map_err(|err| io_error(&format!("failed writing {}", path.display()), err))?;
    } else if matches!(format, OutputFormat::Raw) {
        print_raw(&packed);
        return Ok(SUCCESS);
    }

    let out = EncodeOutput {
        chip: profile.name,
        frames: frames.len(),
        bytes: packed.len(),
        hex: hex(&packed),
    };
    print_summary(&out, format);
    Ok(SUCCESS)
}

pub(crate) fn parse_frames(input: &[u8]) -> CliResult<Vec<Frame>> {
    serde_json::from_slice(input).map_err(|err| json_error("invalid frame list", err))
}

fn print_summary(out: &EncodeOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(out),
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("Encoded:");
            println!("  Chip:   {}", out.chip);
            println!("  Frames: {}", out.frames);
            println!("  Bytes:  {}", out.bytes);
            println!("  Hex:    {}", out.hex);
        }
        OutputFormat::Raw => println!("{}", out.hex),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit::DATA_INVALID;

    #[test]
    fn parses_tagged_frames() {
        let frames =
            parse_frames(br#"[{"type":"repeated","energy":47,"pitch":40},{"type":"stop"}]"#)
                .unwrap();
        assert_eq!(
            frames,
            vec![
                Frame::Repeated {
                    energy: 47,
                    pitch: 40
                },
                Frame::Stop
            ]
        );
    }

    #[test]
    fn rejects_unknown_frame_type() {
        let err = parse_frames(br#"[{"type":"whisper"}]"#).unwrap_err();
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.starts_with("invalid frame list"));
    }
}
