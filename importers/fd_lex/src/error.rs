//! Errors reported by `fd-lex`.

use std::io;

use thiserror::Error;

/// Anything that stops `fd-lex` before all lines are dumped.
#[derive(Debug, Error)]
pub enum LexError {
    /// Bad command line, with the message to show above the usage text.
    #[error("{0}")]
    Usage(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for '{option}'")]
    InvalidValue { option: &'static str, value: String },

    #[error("{}", describe_read(.path, .source))]
    Read { path: String, source: io::Error },

    #[error("cannot serialize chunks: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot write output: {0}")]
    Write(#[source] io::Error),
}

impl LexError {
    /// Returns `true` if the usage text should be printed with this error.
    pub fn wants_usage(&self) -> bool {
        matches!(
            self,
            LexError::Usage(_) | LexError::UnknownOption(_) | LexError::InvalidValue { .. }
        )
    }
}

fn describe_read(path: &str, e: &io::Error) -> String {
    match e.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    }
}
