//! Rara command-line driver.
//!
//! The `rara` binary is a thin dispatcher over [`commands`]; the rule set it
//! tokenizes with lives in [`rules`].

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod commands;
pub mod rules;

/// Install a `tracing` subscriber writing to stderr, keeping stdout for
/// tokens.
///
/// Nothing is installed unless `RUST_LOG` holds a valid filter, e.g.
/// `RUST_LOG=rara_tokenizer=debug rara lex file.rara`. Returns whether this
/// call installed the subscriber; later calls find one in place and return
/// `false`.
pub fn init_tracing() -> bool {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return false;
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .with(filter)
        .try_init()
        .is_ok()
}
