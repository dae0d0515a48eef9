//! Inspection commands: `lex` and `rules`.

use std::path::Path;

use rara_tokenizer::Direction;
use tracing::debug;

use super::{read_source, CommandError};
use crate::rules::{demo_tokenizer, COMMENT_PREFIX};

/// Tokenize a file with the demonstration rules and print the tokens.
///
/// On a failed scan the tokens emitted before the error are still printed.
///
/// # Errors
///
/// `Read` if the file cannot be read, `Scan` if tokenizing fails.
pub fn lex_file(path: &Path) -> Result<(), CommandError> {
    let content = read_source(path)?;
    let mut tokenizer = demo_tokenizer()?;

    let (tokens, error) = match tokenizer.tokenize(&content) {
        Ok(tokens) => (tokens, None),
        Err(failure) => (failure.tokens, Some(failure.error)),
    };
    let suffix = if error.is_some() { " before the error" } else { "" };
    println!("Tokens for '{}' ({} tokens{suffix}):", path.display(), tokens.len());
    for token in &tokens {
        println!("  {token:?}");
    }

    match error {
        Some(error) => {
            debug!(code = %error.code(), "scan failed");
            Err(CommandError::Scan {
                path: path.to_path_buf(),
                error,
            })
        }
        None => Ok(()),
    }
}

/// Print the demonstration rule set.
///
/// # Errors
///
/// `Rules` if the rule set does not register.
pub fn list_rules() -> Result<(), CommandError> {
    let tokenizer = demo_tokenizer()?;

    println!("Rules ({} registered, `{COMMENT_PREFIX}` line comments):", tokenizer.rules().count());
    for rule in tokenizer.rules() {
        let direction = match rule.direction() {
            Direction::Right => "->",
            Direction::Left => "<-",
        };
        let trigger = rule.trigger().map_or_else(|| "any".to_owned(), |c| format!("{c:?}"));
        let terminator = rule
            .terminator_char()
            .map_or_else(|| "none".to_owned(), |c| format!("{c:?}"));
        let matcher = if rule.has_matcher() { " (matcher)" } else { "" };
        println!(
            "  {:<12} {direction} open {trigger:<5} close {terminator}{matcher}",
            rule.name()
        );
    }
    Ok(())
}
