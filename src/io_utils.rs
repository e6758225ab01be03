//! Error messages for the command line: which file, what went wrong, and
//! what to try next.

use std::io;
use std::path::Path;
use thiserror::Error;

use crate::error::{ConfigurationError, WordGridError};

/// A fully formatted CLI failure, keeping the library error as its source.
#[derive(Error, Debug)]
#[error("{msg}")]
pub struct CliError {
    msg: String,
    #[source]
    source: Option<WordGridError>,
}

impl CliError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            source: None,
        }
    }
}

fn io_suggestion(err: &io::Error) -> &'static str {
    match err.kind() {
        io::ErrorKind::NotFound => "Check that the file exists and the path is correct.",
        io::ErrorKind::PermissionDenied => "Check permissions or run as a different user.",
        io::ErrorKind::InvalidData => "The file must be UTF-8 text.",
        io::ErrorKind::WriteZero => "Disk may be full. Free up space and try again.",
        _ => "Check the path and permissions.",
    }
}

/// Describe an I/O failure on `path` with a suggested fix.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    format!(
        "Error {operation} '{}': {err}. {}",
        path.display(),
        io_suggestion(err)
    )
}

/// Wrap a library error raised while working on `path`.
pub fn cli_error(operation: &str, path: &Path, err: impl Into<WordGridError>) -> CliError {
    let err = err.into();
    let msg = match &err {
        WordGridError::Io(io) => format_io_error(operation, path, io),
        _ => format!("Error {operation} '{}': {}", path.display(), cli_hint(&err)),
    };
    CliError {
        msg,
        source: Some(err),
    }
}

/// Return an actionable hint for a library error.
pub fn cli_hint(err: &WordGridError) -> String {
    use ConfigurationError::*;
    match err {
        WordGridError::Configuration(cfg) => match cfg {
            EmptyGrid | EmptyRow => format!("{cfg}. The grid file needs at least one row of letters."),
            TooManyRows { .. } | TooManyColumns { .. } => {
                format!("{cfg}. Shrink the grid or raise --max-size.")
            }
            RaggedRow { .. } => format!("{cfg}. Every row must have the same length."),
        },
        WordGridError::Config(msg) => format!("{msg}. Fix the config file or flags."),
        WordGridError::Io(io) => format!("{io}"),
        WordGridError::WordList(json) => {
            format!("{json}. Word lists are a JSON array of strings, config files a JSON object.")
        }
    }
}
