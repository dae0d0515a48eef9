//! Built-in demonstration rule set.
//!
//! A small space-separated declaration language:
//!
//! ```text
//! // comments run to the end of the line
//! greeting :: "hello world"
//! answer = 42
//! <- answer
//! ```
//!
//! Words close on the next space. A word at the end of a line stays open
//! until the first space of a later line, and one at the very end of the file
//! is reported as unterminated. Quoted literals close on the next `"`.

use rara_diagnostic::ScanResult;
use rara_tokenizer::{matchers, LineComments, TokenRule, Tokenizer};

pub const COMMENT_PREFIX: &str = "//";

/// Tokenizer with the demonstration rules and `//` line comments.
///
/// # Errors
///
/// Propagates rule registration failures.
pub fn demo_tokenizer() -> ScanResult<Tokenizer<LineComments>> {
    let mut tokenizer = Tokenizer::with_hooks(LineComments::new(COMMENT_PREFIX));
    for rule in demo_rules()? {
        tokenizer.register_rule(rule)?;
    }
    Ok(tokenizer)
}

/// The demonstration rules, in registration order.
///
/// # Errors
///
/// `INVALID_RULE` if one of the word patterns fails to compile.
pub fn demo_rules() -> ScanResult<Vec<TokenRule>> {
    Ok(vec![
        TokenRule::new("literal", "\"", "\"").with_identifier_type("literal"),
        word("identifier", "", "[A-Za-z_][A-Za-z0-9_]*")?,
        word("value", "", "[0-9]+")?,
        word("declaration", ":", "::")?.with_symbol_label("decl_keyword"),
        word("assignment", "=", "=")?.with_identifier_type("token"),
        word("return", "<", "<-")?
            .with_symbol_label("return_keyword")
            .with_identifier_type("token"),
    ])
}

/// A space-terminated rule that opens once per word, on its first character,
/// when the whole word matches `pattern`.
fn word(name: &str, symbol: &str, pattern: &str) -> ScanResult<TokenRule> {
    let whole_word = matchers::regex(pattern)?;
    Ok(TokenRule::new(name, symbol, " ").matching(move |c, index, text| {
        matchers::is_word_start(text, index) && whole_word(c, index, text)
    }))
}
