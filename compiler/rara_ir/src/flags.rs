//! Token category flags.
//!
//! A token carries three independent category sets. Each is a bitflag set
//! where the empty set means "none" and `ANY` covers every defined bit, so a
//! consumer can ask `token.identifier_type.intersects(IdentifierType::ANY)`
//! without listing variants.
//!
//! Rules name their categories with plain strings (`"identifier"`,
//! `"declaration"`, ...). `from_label` is the lookup table from those labels
//! to flags; unknown labels map to the empty set instead of failing.

use bitflags::bitflags;

bitflags! {
    /// Built-in tokens made of text or symbols with no whitespace inside.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Symbol: u32 {
        /// Declaration with `::` or `as`.
        const DECL_KEYWORD = 1 << 0;
        /// Return from a function.
        const RETURN_KEYWORD = 1 << 1;

        const ANY = Self::DECL_KEYWORD.bits() | Self::RETURN_KEYWORD.bits();
    }
}

bitflags! {
    /// What an identifier-like token refers to.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct IdentifierType: u32 {
        /// Variable or function name.
        const IDENTIFIER = 1 << 0;
        /// A type name.
        const TYPE = 1 << 1;
        /// A keyword or symbol such as `::`.
        const TOKEN = 1 << 2;
        /// Bracketed content: `[...]`, `(...)`, `:():`.
        const VALUE = 1 << 3;
        /// A literal such as `true`, `2`, `3.14`.
        const LITERAL = 1 << 4;

        const ANY = Self::IDENTIFIER.bits()
            | Self::TYPE.bits()
            | Self::TOKEN.bits()
            | Self::VALUE.bits()
            | Self::LITERAL.bits();
    }
}

bitflags! {
    /// The kind of expression a token starts.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ExpressionType: u32 {
        /// `a :: 2` or `a :: (b: int, c: int) (...)`
        const DECLARATION = 1 << 0;
        /// `a = 2!`
        const ASSIGNMENT = 1 << 1;

        const ANY = Self::DECLARATION.bits() | Self::ASSIGNMENT.bits();
    }
}

impl Symbol {
    /// Look up a symbol label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "decl_keyword" => Self::DECL_KEYWORD,
            "return_keyword" => Self::RETURN_KEYWORD,
            "any" => Self::ANY,
            _ => Self::empty(),
        }
    }
}

impl IdentifierType {
    /// Look up an identifier type label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "identifier" => Self::IDENTIFIER,
            "type" => Self::TYPE,
            "token" => Self::TOKEN,
            "value" => Self::VALUE,
            "literal" => Self::LITERAL,
            "any" => Self::ANY,
            _ => Self::empty(),
        }
    }
}

impl ExpressionType {
    /// Look up an expression type label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "declaration" => Self::DECLARATION,
            "assignment" => Self::ASSIGNMENT,
            "any" => Self::ANY,
            _ => Self::empty(),
        }
    }
}
