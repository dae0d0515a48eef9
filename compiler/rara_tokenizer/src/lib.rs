//! Rule-driven tokenizer for Rara.
//!
//! The tokenizer knows no grammar. Callers register [`TokenRule`]s (a trigger
//! character, a terminator character, a direction and an optional matcher)
//! and the scan loop walks the text one character at a time, opening and
//! closing rule activations on a LIFO stack. A closed activation becomes a
//! [`Token`](rara_ir::Token) spanning the characters between its two ends.
//!
//! Rules may scan leftward: pushing a leftward rule turns the cursor around
//! until some later rightward push turns it back.
//!
//! Progress is logged through `tracing` (`debug` for rule events, `trace` for
//! every character); set `RUST_LOG=rara_tokenizer=trace` in a binary that
//! installs a subscriber to see it.

#[cfg(any(test, feature = "scan-history"))]
pub mod history;
mod hooks;
pub mod matchers;
mod position;
mod registry;
mod rule;
mod stack;
mod token_factory;
mod tokenizer;

pub use hooks::{DefaultHooks, LineComments, ScanHooks};
pub use position::{ColumnMemory, Position};
pub use registry::{Candidates, RuleRegistry};
pub use rule::{Activation, Direction, Matcher, TokenLabels, TokenRule};
pub use stack::{ActivationStack, Terminated};
pub use token_factory::TokenFactory;
pub use tokenizer::{ScanFailure, Tokenizer, TokenizerConfig};
