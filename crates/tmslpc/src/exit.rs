use std::fmt;
use std::io;

use tmslpc_chip::ChipError;
use tmslpc_frame::CodecError;

// Process exit codes; 64 matches sysexits EX_USAGE.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn chip_error(context: &str, err: ChipError) -> CliError {
    match err {
        ChipError::UnknownChip { .. } => CliError::new(USAGE, format!("{context}: {err}")),
        ChipError::TableSize { .. } => CliError::new(INTERNAL, format!("{context}: {err}")),
    }
}

pub fn codec_error(context: &str, err: CodecError) -> CliError {
    match err {
        CodecError::Chip(err) => chip_error(context, err),
        CodecError::TruncatedStream { .. }
        | CodecError::TooManyFrames { .. }
        | CodecError::TrailingData { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
    }
}

pub fn json_error(context: &str, err: serde_json::Error) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}
