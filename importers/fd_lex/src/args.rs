//! Command-line parsing for `fd-lex`.
//!
//! Flags take the `--flag` or `--key=value` form and may appear before or
//! after the input path.

use fd_tokenizer::{TokenizeOptions, UnclosedPolicy};

use crate::error::LexError;
use crate::render::OutputFormat;

pub const USAGE: &str = "\
Usage: fd-lex [options] [FILE]

Dump the chunks of every non-blank line of FILE (stdin if absent or '-').

Options:
  --slash                 Recognize /.../ annotations
  --unclosed=<policy>     Unclosed (, {, [: fold (default) or close
  --format=<format>       Output: debug (default) or json
  -h, --help              Show this help";

/// Configuration of one `fd-lex` run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexConfig {
    /// Input path; `None` reads stdin.
    pub input: Option<String>,
    pub options: TokenizeOptions,
    pub format: OutputFormat,
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Lex(LexConfig),
}

/// Parse the arguments following the program name.
pub fn parse_args(args: &[String]) -> Result<Command, LexError> {
    let mut config = LexConfig::default();
    let mut input_seen = false;

    for arg in args {
        if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if arg == "--slash" {
            config.options.parse_slash = true;
        } else if let Some(value) = arg.strip_prefix("--unclosed=") {
            config.options.unclosed = parse_unclosed(value)?;
        } else if let Some(value) = arg.strip_prefix("--format=") {
            config.format = parse_format(value)?;
        } else if arg == "-" || !arg.starts_with('-') {
            if input_seen {
                return Err(LexError::Usage(format!("unexpected argument '{arg}'")));
            }
            input_seen = true;
            config.input = Some(arg.clone()).filter(|path| path != "-");
        } else {
            return Err(LexError::UnknownOption(arg.clone()));
        }
    }

    Ok(Command::Lex(config))
}

fn parse_unclosed(value: &str) -> Result<UnclosedPolicy, LexError> {
    match value {
        "fold" => Ok(UnclosedPolicy::FoldIntoWord),
        "close" => Ok(UnclosedPolicy::CloseAtEnd),
        _ => Err(LexError::InvalidValue {
            option: "--unclosed",
            value: value.to_owned(),
        }),
    }
}

fn parse_format(value: &str) -> Result<OutputFormat, LexError> {
    match value {
        "debug" => Ok(OutputFormat::Debug),
        "json" => Ok(OutputFormat::Json),
        _ => Err(LexError::InvalidValue {
            option: "--format",
            value: value.to_owned(),
        }),
    }
}
