//! Rara IR - shared lexer types
//!
//! This crate contains the data structures produced by the Rara tokenizer:
//! - `CodeLocation` line/column spans
//! - `Token` values emitted when a rule activation closes
//! - Token category flags (`Symbol`, `IdentifierType`, `ExpressionType`)
//!
//! Everything here is plain data: `Copy` where possible, `Eq + Hash` so tokens
//! can be deduplicated or used as map keys.

mod flags;
mod location;
mod token;

pub use flags::{ExpressionType, IdentifierType, Symbol};
pub use location::CodeLocation;
pub use token::Token;
