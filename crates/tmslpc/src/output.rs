use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use tmslpc_frame::Frame;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// Print any serializable value as a single JSON line.
pub fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

/// Print frames in the requested format.
///
/// `Raw` prints a bare JSON array that `encode` accepts as input.
pub fn print_frames(frames: &[Frame], format: OutputFormat) {
    match format {
        OutputFormat::Json | OutputFormat::Raw => print_json(&frames),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["#", "TYPE", "ENERGY", "PITCH", "K"]);
            for (index, frame) in frames.iter().enumerate() {
                table.add_row(vec![
                    index.to_string(),
                    frame.kind().to_string(),
                    optional(frame.energy()),
                    optional(frame.pitch()),
                    coefficients(frame.coefficients()),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for (index, frame) in frames.iter().enumerate() {
                println!("{}", pretty_line(index, frame));
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn pretty_line(index: usize, frame: &Frame) -> String {
    let mut line = format!("{index:>4} {:<8}", frame.kind().name());
    if let Some(energy) = frame.energy() {
        line.push_str(&format!(" energy={energy}"));
    }
    if let Some(pitch) = frame.pitch() {
        line.push_str(&format!(" pitch={pitch}"));
    }
    if !frame.coefficients().is_empty() {
        line.push_str(&format!(" k=[{}]", coefficients(frame.coefficients())));
    }
    line.trim_end().to_string()
}

fn optional(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn coefficients(k: &[i32]) -> String {
    k.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Lowercase hex without separators.
pub fn hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}
