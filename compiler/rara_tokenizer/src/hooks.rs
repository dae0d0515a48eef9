//! Extension points called by the scan loop.
//!
//! - `is_comment_start` / `skip_comment`: checked at the top of every
//!   rightward step; a comment's characters are skipped without evaluating
//!   any rule on them.
//! - `comment_before`: the leftward counterpart, checked at the top of every
//!   leftward step for a comment that covers the cursor.
//! - `handle_whitespace`: called for whitespace characters before rules are
//!   evaluated; whitespace is otherwise an ordinary character.

use rara_ir::{CodeLocation, Token};

pub trait ScanHooks {
    /// Called before rule evaluation for every whitespace character.
    ///
    /// A returned token is appended to the output.
    fn handle_whitespace(&self, _c: char, _location: CodeLocation) -> Option<Token> {
        None
    }

    /// Check if a comment starts at `index`.
    fn is_comment_start(&self, _c: char, _index: usize, _text: &[char]) -> bool {
        false
    }

    /// Index of the first character after the comment starting at `index`.
    ///
    /// Must be `>= index`; returning `index` skips nothing.
    fn skip_comment(&self, index: usize, _text: &[char]) -> usize {
        index
    }

    /// Start index of the comment covering `index`, if any.
    ///
    /// Must be `<= index`. A leftward scan resumes on the character before it.
    fn comment_before(&self, _index: usize, _text: &[char]) -> Option<usize> {
        None
    }
}

/// No comments; whitespace is not special.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultHooks;

impl ScanHooks for DefaultHooks {}

/// Line comments: from `prefix` up to, not including, the next newline.
#[derive(Clone, Debug)]
pub struct LineComments {
    prefix: Vec<char>,
}

impl LineComments {
    pub fn new(prefix: &str) -> Self {
        LineComments {
            prefix: prefix.chars().collect(),
        }
    }
}

impl ScanHooks for LineComments {
    fn is_comment_start(&self, _c: char, index: usize, text: &[char]) -> bool {
        !self.prefix.is_empty() && text.get(index..).is_some_and(|rest| rest.starts_with(&self.prefix))
    }

    fn skip_comment(&self, index: usize, text: &[char]) -> usize {
        text.iter()
            .skip(index)
            .position(|&c| c == '\n')
            .map_or(text.len(), |offset| index + offset)
    }

    /// The first prefix on the line at or before `index`. A newline is never
    /// part of a comment.
    fn comment_before(&self, index: usize, text: &[char]) -> Option<usize> {
        if self.prefix.is_empty() || !matches!(text.get(index), Some(&c) if c != '\n') {
            return None;
        }
        let line_start = text[..index]
            .iter()
            .rposition(|&c| c == '\n')
            .map_or(0, |newline| newline + 1);
        (line_start..=index).find(|&start| text[start..].starts_with(&self.prefix))
    }
}
