//! `fd-lex`: dump the chunk stream of dictionary definition lines.
//!
//! A debugging aid for importer authors: shows how `fd_tokenizer` splits
//! each line of a file, with or without slash parsing.

pub mod args;
pub mod error;
pub mod lex;
pub mod render;

pub use args::{parse_args, Command, LexConfig, USAGE};
pub use error::LexError;
pub use lex::{lex_lines, run, LexSummary};
pub use render::{render_line, OutputFormat};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=fd_tokenizer=trace` or `RUST_LOG=fd_lex=debug`.
/// Logs go to stderr so the chunk dump on stdout stays parseable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
