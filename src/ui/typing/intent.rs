//! Intents for the banner typewriter.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingIntent {
    /// The scheduled delay for the current phase has elapsed.
    Tick,
}

impl Intent for TypingIntent {}
