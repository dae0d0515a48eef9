//! Tokens emitted by the tokenizer.

use std::fmt;

use crate::{CodeLocation, ExpressionType, IdentifierType, Symbol};

/// A token with its location in the source.
///
/// Categories are independent: a token may be both an identifier and the
/// start of a declaration. A token with no category at all is still a legal
/// value (rules without labels produce one) but is not [valid](Token::is_valid).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Token {
    pub location: CodeLocation,
    pub symbol: Symbol,
    pub identifier_type: IdentifierType,
    pub expression_type: ExpressionType,
}

impl Token {
    #[inline]
    pub fn new(
        location: CodeLocation,
        symbol: Symbol,
        identifier_type: IdentifierType,
        expression_type: ExpressionType,
    ) -> Self {
        Token {
            location,
            symbol,
            identifier_type,
            expression_type,
        }
    }

    /// Check that the token has at least one category and an ordered location.
    pub fn is_valid(&self) -> bool {
        self.has_category() && self.location.is_valid()
    }

    /// Check if any of the three category sets is non-empty.
    #[inline]
    pub fn has_category(&self) -> bool {
        !(self.symbol.is_empty()
            && self.identifier_type.is_empty()
            && self.expression_type.is_empty())
    }

    /// Check if the token sits at the start-of-file sentinel location.
    #[inline]
    pub fn is_start(&self) -> bool {
        self.location.is_start()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} {:?} @ {}",
            self.symbol, self.identifier_type, self.expression_type, self.location
        )
    }
}
