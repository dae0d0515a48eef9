//! Registered rule templates.

use std::sync::Arc;

use rara_diagnostic::{ErrorCode, ScanError, ScanResult};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::debug;

use crate::rule::TokenRule;

/// Rules that may open on one character, in registration order.
pub type Candidates = SmallVec<[Arc<TokenRule>; 4]>;

/// Rule templates in registration order.
///
/// Names are unique: termination matches activations back to their rule by
/// name, so two rules sharing a name would be indistinguishable.
#[derive(Clone, Debug, Default)]
pub struct RuleRegistry {
    rules: Vec<Arc<TokenRule>>,
    names: FxHashSet<String>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule template.
    ///
    /// Fails with `INVALID_RULE` for an empty terminator and with
    /// `DUPLICATE_RULE` if the name is taken.
    pub fn register(&mut self, rule: TokenRule) -> ScanResult<()> {
        if rule.terminator().is_empty() {
            return Err(ScanError::with_message(
                ErrorCode::INVALID_RULE,
                format!("rule `{}` has an empty terminator", rule.name()),
            ));
        }
        if self.names.contains(rule.name()) {
            return Err(ScanError::with_message(
                ErrorCode::DUPLICATE_RULE,
                format!("rule `{}` is already registered", rule.name()),
            ));
        }

        debug!(
            rule = rule.name(),
            symbol = rule.symbol(),
            terminator = rule.terminator(),
            direction = ?rule.direction(),
            "registering rule"
        );
        self.names.insert(rule.name().to_owned());
        self.rules.push(Arc::new(rule));
        Ok(())
    }

    /// Rules that may open on `c` at `index`.
    pub fn candidates(&self, c: char, index: usize, text: &[char]) -> Candidates {
        self.rules
            .iter()
            .filter(|rule| rule.matches(c, index, text))
            .cloned()
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&TokenRule> {
        self.rules
            .iter()
            .find(|rule| rule.name() == name)
            .map(Arc::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenRule> {
        self.rules.iter().map(Arc::as_ref)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
