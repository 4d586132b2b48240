//! Post-transition side effects.

use std::collections::VecDeque;

/// Side effects the view runs after a state change has committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Bring the result region into view.
    ScrollToResult,
}

/// FIFO of effects waiting for the view.
#[derive(Debug, Default)]
pub struct EffectQueue {
    pending: VecDeque<UiEffect>,
}

impl EffectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect: UiEffect) {
        self.pending.push_back(effect);
    }

    /// Take every queued effect in order, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<UiEffect> {
        self.pending.drain(..).collect()
    }
}
