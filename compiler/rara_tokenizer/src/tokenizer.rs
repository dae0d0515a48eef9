//! Tokenizer facade and scan loop.
//!
//! The loop visits one character per step:
//!
//! 1. Comments are skipped through the hooks: rightward from the prefix to
//!    the comment's end, leftward from inside the comment to just before it.
//! 2. Whitespace goes to `handle_whitespace`.
//! 3. Activations on top of the stack that close on the character are popped.
//! 4. Every rule that may open on the character is pushed, unless an
//!    activation of the same rule just closed. Each push sets the direction.
//! 5. The popped activations are emitted as tokens, innermost first.
//! 6. The cursor moves one character in the current direction; a leftward
//!    scan stops at index 0, a rightward one past the last character.
//!
//! Activations still open afterwards are reported as unterminated.

use rara_diagnostic::{ErrorCode, ScanError, ScanResult};
use rara_ir::{CodeLocation, Token};
use tracing::{debug, trace};

#[cfg(any(test, feature = "scan-history"))]
use crate::history::{ScanHistory, ScanStep};
use crate::hooks::{DefaultHooks, ScanHooks};
use crate::position::{ColumnMemory, Position};
use crate::registry::RuleRegistry;
use crate::rule::{Activation, Direction, TokenRule};
use crate::stack::ActivationStack;
use crate::token_factory::TokenFactory;

/// Steps allowed per character of input when no explicit budget is set.
const STEPS_PER_CHAR: usize = 64;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenizerConfig {
    pub column_memory: ColumnMemory,
    /// Upper bound on processed characters per scan.
    ///
    /// Leftward and rightward rules can hand the cursor back and forth
    /// without end; the scan fails with `STEP_LIMIT` once the budget is
    /// spent. `None` means `64 * len + 64`.
    pub max_steps: Option<usize>,
}

impl TokenizerConfig {
    fn step_budget(&self, len: usize) -> usize {
        self.max_steps
            .unwrap_or_else(|| len.saturating_mul(STEPS_PER_CHAR).saturating_add(STEPS_PER_CHAR))
    }
}

/// A failed scan: the error plus every token emitted before it was detected.
#[derive(Clone, Debug, thiserror::Error)]
#[error("tokenizing failed after {} token(s)", .tokens.len())]
pub struct ScanFailure {
    pub tokens: Vec<Token>,
    #[source]
    pub error: ScanError,
}

pub struct Tokenizer<H: ScanHooks = DefaultHooks> {
    registry: RuleRegistry,
    stack: ActivationStack,
    tokens: Vec<Token>,
    hooks: H,
    config: TokenizerConfig,
    #[cfg(any(test, feature = "scan-history"))]
    history: ScanHistory,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::with_hooks(DefaultHooks)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ScanHooks> Tokenizer<H> {
    pub fn with_hooks(hooks: H) -> Self {
        Tokenizer {
            registry: RuleRegistry::new(),
            stack: ActivationStack::new(),
            tokens: Vec::new(),
            hooks,
            config: TokenizerConfig::default(),
            #[cfg(any(test, feature = "scan-history"))]
            history: ScanHistory::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: TokenizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a rule template. Rules are evaluated in registration order.
    ///
    /// # Errors
    ///
    /// `DUPLICATE_RULE` if a rule with the same name exists, `INVALID_RULE`
    /// if the terminator is empty.
    pub fn register_rule(&mut self, rule: TokenRule) -> ScanResult<()> {
        self.registry.register(rule)
    }

    pub fn rules(&self) -> impl Iterator<Item = &TokenRule> {
        self.registry.iter()
    }

    #[inline]
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokens of the last scan, in emission order.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Scan `text` and return the emitted tokens.
    ///
    /// Every call starts from a clean state; registered rules are kept.
    ///
    /// # Errors
    ///
    /// - `UNTERMINATED_RIGHT` / `UNTERMINATED_LEFT` for each activation still
    ///   open when the scan stops.
    /// - `STEP_LIMIT` if the step budget runs out.
    ///
    /// Conditions combine into one error; the failure keeps the tokens
    /// emitted before the scan stopped.
    pub fn tokenize(&mut self, text: &str) -> Result<Vec<Token>, ScanFailure> {
        let text: Vec<char> = text.chars().collect();
        self.reset();

        let budget = self.config.step_budget(text.len());
        let mut position = Position::new(self.config.column_memory);
        let mut steps = 0;
        let mut error = None;
        let mut inside = position.enter(&text);

        while inside {
            let index = position.index();
            let Some(&c) = text.get(index) else {
                break;
            };

            if let Some(still_inside) = self.skip_comment(c, &mut position, &text) {
                inside = still_inside;
                continue;
            }

            if steps == budget {
                debug!(budget, index, "step budget exhausted");
                error = Some(
                    ScanError::with_message(
                        ErrorCode::STEP_LIMIT,
                        format!("scan stopped after {budget} steps at index {index}"),
                    )
                    .at(CodeLocation::point(position.line(), position.column())),
                );
                break;
            }
            steps += 1;

            self.step(c, &mut position, &text);

            if position.at_left_edge() {
                break;
            }
            inside = position.advance(&text);
        }

        for activation in self.stack.as_slice() {
            let open = unterminated(activation);
            error = Some(match error {
                Some(error) => error | open,
                None => open,
            });
        }

        debug!(
            tokens = self.tokens.len(),
            steps,
            open = self.stack.len(),
            "scan finished"
        );

        match error {
            Some(error) => Err(ScanFailure {
                tokens: self.tokens.clone(),
                error,
            }),
            None => Ok(self.tokens.clone()),
        }
    }

    /// Move the cursor over a comment under it, in the current direction.
    ///
    /// Returns `None` if there is no comment here, otherwise whether the
    /// cursor is still inside the text. A leftward skip over a comment that
    /// starts at index 0 leaves nothing to scan.
    fn skip_comment(&self, c: char, position: &mut Position, text: &[char]) -> Option<bool> {
        let index = position.index();
        match position.direction() {
            Direction::Right => {
                if !self.hooks.is_comment_start(c, index, text) {
                    return None;
                }
                let end = self.hooks.skip_comment(index, text);
                if end <= index {
                    return None;
                }
                trace!(from = index, to = end, "skipping comment");
                Some(position.skip_to(end, text))
            }
            Direction::Left => {
                let start = self
                    .hooks
                    .comment_before(index, text)
                    .filter(|&start| start <= index)?;
                trace!(from = index, to = start, "skipping comment leftward");
                Some(start > 0 && position.skip_back_to(start - 1, text))
            }
        }
    }

    /// Process the character under the cursor.
    fn step(&mut self, c: char, position: &mut Position, text: &[char]) {
        let (index, line, column) = (position.index(), position.line(), position.column());
        trace!(index, ?c, line, column, direction = ?position.direction(), "step");

        #[cfg(any(test, feature = "scan-history"))]
        let step = self.history.record_step(ScanStep {
            index,
            ch: c,
            line,
            column,
        });

        if c.is_whitespace() {
            if let Some(token) = self.hooks.handle_whitespace(c, CodeLocation::point(line, column)) {
                self.tokens.push(token);
            }
        }

        let terminated = self.stack.terminate(c, line, column);

        for rule in self.registry.candidates(c, index, text) {
            // A rule whose activation closes here does not reopen on the same character.
            if terminated.iter().any(|closed| closed.name() == rule.name()) {
                continue;
            }
            let activation = self.stack.push(&rule, line, column);
            debug!(
                rule = activation.name(),
                direction = ?activation.direction(),
                location = %activation.location(),
                "opened"
            );
            position.set_direction(activation.direction());
            #[cfg(any(test, feature = "scan-history"))]
            self.history.opened(activation, step);
        }

        for activation in &terminated {
            let token = TokenFactory::create_token(
                activation.name(),
                activation.rule().labels(),
                activation.location(),
            );
            debug!(rule = activation.name(), location = %activation.location(), "closed");
            #[cfg(any(test, feature = "scan-history"))]
            self.history.closed(activation, step);
            self.tokens.push(token);
        }
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.tokens.clear();
        #[cfg(any(test, feature = "scan-history"))]
        self.history.clear();
    }
}

#[cfg(any(test, feature = "scan-history"))]
impl<H: ScanHooks> Tokenizer<H> {
    /// Characters and activations of the last scan.
    pub fn history(&self) -> &ScanHistory {
        &self.history
    }

    /// Activations left open by the last scan, bottom first.
    pub fn debug_rule_stack(&self) -> &[Activation] {
        self.stack.as_slice()
    }
}

/// Error for an activation that never closed, located at its open end.
fn unterminated(activation: &Activation) -> ScanError {
    let location = activation.location();
    let (code, line, column) = match activation.direction() {
        Direction::Right => (
            ErrorCode::UNTERMINATED_RIGHT,
            location.line_start,
            location.column_start,
        ),
        Direction::Left => (
            ErrorCode::UNTERMINATED_LEFT,
            location.line_end,
            location.column_end,
        ),
    };
    ScanError::with_message(
        code,
        format!(
            "rule `{}` opened at {line}:{column} was never closed",
            activation.name()
        ),
    )
    .at(CodeLocation::point(line, column))
}

#[cfg(test)]
mod tests;
