//! Ready-made matchers for [`TokenRule::with_matcher`](crate::TokenRule::with_matcher).
//!
//! Matchers look at the whitespace-delimited word around the current index.
//! They never consume input; the scan loop still moves one character at a
//! time.

use std::ops::Range;
use std::sync::Arc;

use rara_diagnostic::{ErrorCode, ScanError, ScanResult};
use regex::Regex;

use crate::rule::Matcher;

/// The whitespace-delimited word containing `index`, as a half-open range.
///
/// Empty when `index` is on whitespace or outside the text.
pub fn word_bounds(text: &[char], index: usize) -> Range<usize> {
    if !text.get(index).is_some_and(|c| !c.is_whitespace()) {
        return index..index;
    }
    let start = text[..index]
        .iter()
        .rposition(|c| c.is_whitespace())
        .map_or(0, |ws| ws + 1);
    let end = text[index..]
        .iter()
        .position(|c| c.is_whitespace())
        .map_or(text.len(), |ws| index + ws);
    start..end
}

/// Check if `index` is the first character of a word.
pub fn is_word_start(text: &[char], index: usize) -> bool {
    let bounds = word_bounds(text, index);
    !bounds.is_empty() && bounds.start == index
}

/// Identifier characters: letters and `_` anywhere, digits only after the
/// first character of a word.
pub fn identifier() -> Matcher {
    Arc::new(|c: char, index: usize, text: &[char]| {
        if c.is_ascii_digit() {
            return !is_word_start(text, index);
        }
        c.is_alphabetic() || c == '_'
    })
}

/// Matches when the whole word containing the index matches `pattern`.
///
/// # Errors
///
/// `INVALID_RULE` if `pattern` does not compile.
pub fn regex(pattern: &str) -> ScanResult<Matcher> {
    let anchored = format!(r"\A(?:{pattern})\z");
    let re = Regex::new(&anchored).map_err(|err| {
        ScanError::with_message(
            ErrorCode::INVALID_RULE,
            format!("invalid pattern `{pattern}`: {err}"),
        )
    })?;
    Ok(Arc::new(move |_c: char, index: usize, text: &[char]| {
        let bounds = word_bounds(text, index);
        if bounds.is_empty() {
            return false;
        }
        let word: String = text[bounds].iter().collect();
        re.is_match(&word)
    }))
}
