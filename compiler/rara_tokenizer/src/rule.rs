//! Rule templates and their activations.
//!
//! A [`TokenRule`] is registered once and never changes afterwards. Every time
//! it fires, the tokenizer creates an [`Activation`]: a copy that shares the
//! template (behind an `Arc`) and owns a fresh [`CodeLocation`] that is filled
//! in as the activation opens and closes.

use std::fmt;
use std::sync::Arc;

use rara_ir::CodeLocation;

/// Predicate gating a rule's activation: `(character, index, full_text)`.
///
/// Must be a pure function of its arguments; it may be called several times
/// for the same character.
pub type Matcher = Arc<dyn Fn(char, usize, &[char]) -> bool + Send + Sync>;

/// Scan direction.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

/// Category labels handed to the token factory when an activation closes.
///
/// A missing label falls back to the rule's name.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenLabels {
    pub symbol: Option<String>,
    pub identifier_type: Option<String>,
    pub expression_type: Option<String>,
}

/// A registered rule template.
///
/// `symbol` and `terminator` are stored as strings but only their first
/// character takes part in matching.
#[derive(Clone)]
pub struct TokenRule {
    name: String,
    symbol: String,
    terminator: String,
    direction: Direction,
    matcher: Option<Matcher>,
    labels: TokenLabels,
}

impl TokenRule {
    /// Create a rightward rule. An empty `symbol` triggers on every character.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        terminator: impl Into<String>,
    ) -> Self {
        TokenRule {
            name: name.into(),
            symbol: symbol.into(),
            terminator: terminator.into(),
            direction: Direction::Right,
            matcher: None,
            labels: TokenLabels::default(),
        }
    }

    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Convenience for [`with_matcher`](Self::with_matcher) with a closure.
    #[must_use]
    pub fn matching<F>(self, matcher: F) -> Self
    where
        F: Fn(char, usize, &[char]) -> bool + Send + Sync + 'static,
    {
        self.with_matcher(Arc::new(matcher))
    }

    #[must_use]
    pub fn with_symbol_label(mut self, label: impl Into<String>) -> Self {
        self.labels.symbol = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_identifier_type(mut self, label: impl Into<String>) -> Self {
        self.labels.identifier_type = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_expression_type(mut self, label: impl Into<String>) -> Self {
        self.labels.expression_type = Some(label.into());
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[inline]
    pub fn terminator(&self) -> &str {
        &self.terminator
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn labels(&self) -> &TokenLabels {
        &self.labels
    }

    #[inline]
    pub fn has_matcher(&self) -> bool {
        self.matcher.is_some()
    }

    /// The trigger character, or `None` for a wildcard rule.
    #[inline]
    pub fn trigger(&self) -> Option<char> {
        self.symbol.chars().next()
    }

    /// The character that closes an activation of this rule.
    #[inline]
    pub fn terminator_char(&self) -> Option<char> {
        self.terminator.chars().next()
    }

    /// Check if this rule may open on `c` at `index`.
    pub fn matches(&self, c: char, index: usize, text: &[char]) -> bool {
        if self.trigger().is_some_and(|trigger| trigger != c) {
            return false;
        }
        match &self.matcher {
            Some(matcher) => matcher(c, index, text),
            None => true,
        }
    }

    /// Create an activation of `rule` with the given location.
    pub fn activate(rule: &Arc<TokenRule>, location: CodeLocation, seq: usize) -> Activation {
        Activation {
            rule: Arc::clone(rule),
            location,
            seq,
        }
    }
}

impl fmt::Debug for TokenRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRule")
            .field("name", &self.name)
            .field("symbol", &self.symbol)
            .field("terminator", &self.terminator)
            .field("direction", &self.direction)
            .field("matcher", &self.matcher.is_some())
            .field("labels", &self.labels)
            .finish()
    }
}

/// A live instance of a rule on the activation stack.
#[derive(Clone, Debug)]
pub struct Activation {
    rule: Arc<TokenRule>,
    location: CodeLocation,
    /// Push order within one scan, starting at 0.
    seq: usize,
}

impl Activation {
    #[inline]
    pub fn rule(&self) -> &TokenRule {
        &self.rule
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.rule.name()
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.rule.direction()
    }

    #[inline]
    pub fn location(&self) -> CodeLocation {
        self.location
    }

    #[inline]
    pub fn seq(&self) -> usize {
        self.seq
    }

    /// Check if `c` is this activation's terminator.
    #[inline]
    pub fn closes_on(&self, c: char) -> bool {
        self.rule.terminator_char() == Some(c)
    }

    /// Fill the end of the location that is still open.
    ///
    /// Rightward activations opened at their start and close at their end;
    /// leftward activations opened at their end and close at their start.
    pub fn close_at(&mut self, line: u32, column: u32) {
        match self.direction() {
            Direction::Right => {
                self.location.line_end = line;
                self.location.column_end = column;
            }
            Direction::Left => {
                self.location.line_start = line;
                self.location.column_start = column;
            }
        }
    }
}
