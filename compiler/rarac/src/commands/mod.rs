//! Command handlers for the `rara` CLI.
//!
//! Handlers print their output and return a [`CommandError`] on failure;
//! `main` reports it and sets the exit status.

use std::io;
use std::path::{Path, PathBuf};

use rara_diagnostic::ScanError;

mod debug;

pub use debug::{lex_file, list_rules};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The built-in rule set failed to register.
    #[error("cannot build rule set: {0}")]
    Rules(#[from] ScanError),
    /// Tokens were printed, but the scan ended with an error.
    #[error("tokenizing '{}' failed: {error}", .path.display())]
    Scan { path: PathBuf, error: ScanError },
}

/// Read a source file as UTF-8.
pub(crate) fn read_source(path: &Path) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })
}
