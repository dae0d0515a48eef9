//! Activation stack.
//!
//! Open activations are kept in push order. Only the top of the stack may
//! close: an outer construct can never close around a still-open inner one.

use std::sync::Arc;

use rara_ir::CodeLocation;
use smallvec::SmallVec;

use crate::rule::{Activation, Direction, TokenRule};

/// Activations closed on one character, in pop order (innermost first).
pub type Terminated = SmallVec<[Activation; 4]>;

#[derive(Clone, Debug, Default)]
pub struct ActivationStack {
    items: Vec<Activation>,
    /// Sequence number for the next push.
    pushed: usize,
}

impl ActivationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an activation of `rule` at `(line, column)` and push it.
    ///
    /// Rightward activations record the position as their start, leftward
    /// ones as their end. Returns a copy of the new activation; it shares the
    /// rule template with the pushed one.
    pub fn push(&mut self, rule: &Arc<TokenRule>, line: u32, column: u32) -> Activation {
        let location = match rule.direction() {
            Direction::Right => CodeLocation::open_start(line, column),
            Direction::Left => CodeLocation::open_end(line, column),
        };
        let activation = TokenRule::activate(rule, location, self.pushed);
        self.pushed += 1;
        self.items.push(activation.clone());
        activation
    }

    /// Pop every activation at the top of the stack that closes on `c`.
    ///
    /// Stops at the first top that does not close; activations below it are
    /// not looked at. Each popped activation gets `(line, column)` as its
    /// closing coordinate.
    pub fn terminate(&mut self, c: char, line: u32, column: u32) -> Terminated {
        let mut terminated = Terminated::new();
        while self.items.last().is_some_and(|top| top.closes_on(c)) {
            let Some(mut activation) = self.items.pop() else {
                break;
            };
            activation.close_at(line, column);
            terminated.push(activation);
        }
        terminated
    }

    #[inline]
    pub fn top(&self) -> Option<&Activation> {
        self.items.last()
    }

    /// Open activations, bottom first.
    #[inline]
    pub fn as_slice(&self) -> &[Activation] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of activations pushed since the last clear.
    #[inline]
    pub fn pushed(&self) -> usize {
        self.pushed
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.pushed = 0;
    }
}
