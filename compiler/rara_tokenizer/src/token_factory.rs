//! Turning closed activations into tokens.

use rara_ir::{CodeLocation, ExpressionType, IdentifierType, Symbol, Token};

use crate::rule::TokenLabels;

/// Builds tokens from a rule's name and category labels.
pub struct TokenFactory;

impl TokenFactory {
    /// Create a token for a closed activation of rule `name`.
    ///
    /// Each category is looked up from its label, or from `name` when the rule
    /// has no label for it. Unknown labels yield an empty category.
    pub fn create_token(name: &str, labels: &TokenLabels, location: CodeLocation) -> Token {
        Token::new(
            location,
            Symbol::from_label(label_or(labels.symbol.as_deref(), name)),
            IdentifierType::from_label(label_or(labels.identifier_type.as_deref(), name)),
            ExpressionType::from_label(label_or(labels.expression_type.as_deref(), name)),
        )
    }
}

#[inline]
fn label_or<'a>(explicit: Option<&'a str>, name: &'a str) -> &'a str {
    explicit.unwrap_or(name)
}
