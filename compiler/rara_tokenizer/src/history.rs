//! Per-scan record of visited characters and activations.
//!
//! Only compiled for unit tests and with the `scan-history` feature. The scan
//! loop never reads it back.

use crate::rule::Activation;

/// One character the scan loop processed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ScanStep {
    pub index: usize,
    pub ch: char,
    pub line: u32,
    pub column: u32,
}

/// An activation and the steps it opened and closed on.
#[derive(Clone, Debug)]
pub struct ActivationRecord {
    /// Location is updated when the activation closes.
    pub activation: Activation,
    pub opened_at: usize,
    /// `None` while the activation is still on the stack.
    pub closed_at: Option<usize>,
}

impl ActivationRecord {
    /// Check if this activation was still open when `other` was pushed.
    pub fn encloses(&self, other: &ActivationRecord) -> bool {
        self.activation.seq() < other.activation.seq()
            && !matches!(self.closed_at, Some(closed) if closed <= other.opened_at)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScanHistory {
    steps: Vec<ScanStep>,
    activations: Vec<ActivationRecord>,
}

impl ScanHistory {
    pub fn clear(&mut self) {
        self.steps.clear();
        self.activations.clear();
    }

    /// Record a visited character, returning its step number.
    pub(crate) fn record_step(&mut self, step: ScanStep) -> usize {
        self.steps.push(step);
        self.steps.len() - 1
    }

    pub(crate) fn opened(&mut self, activation: Activation, step: usize) {
        self.activations.push(ActivationRecord {
            activation,
            opened_at: step,
            closed_at: None,
        });
    }

    pub(crate) fn closed(&mut self, activation: &Activation, step: usize) {
        // Sequence numbers restart at zero with the history, so they index it.
        if let Some(record) = self.activations.get_mut(activation.seq()) {
            record.activation = activation.clone();
            record.closed_at = Some(step);
        }
    }

    /// Every character processed, in visiting order.
    pub fn steps(&self) -> &[ScanStep] {
        &self.steps
    }

    /// Every activation pushed, in push order.
    pub fn activations(&self) -> &[ActivationRecord] {
        &self.activations
    }

    /// Indices of the visited characters, in visiting order.
    pub fn visited_indices(&self) -> Vec<usize> {
        self.steps.iter().map(|step| step.index).collect()
    }
}
