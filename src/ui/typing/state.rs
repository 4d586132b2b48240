//! State for the banner typewriter.

use std::sync::Arc;

use crate::ui::mvi::UiState;

/// Phase of one type/hold/delete cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypingPhase {
    #[default]
    Typing,
    /// Phrase fully shown, holding before deletion.
    Paused,
    Deleting,
}

/// Which phrase is on screen and how much of it.
///
/// `char_index` counts characters, not bytes, and never exceeds the length of
/// the phrase at `text_index`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypingState {
    phrases: Arc<[String]>,
    pub text_index: usize,
    pub char_index: usize,
    pub phase: TypingPhase,
}

impl TypingState {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases: phrases.into(),
            text_index: 0,
            char_index: 0,
            phase: TypingPhase::Typing,
        }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    pub fn current_phrase(&self) -> &str {
        self.phrases
            .get(self.text_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Length of the current phrase in characters.
    pub fn phrase_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    /// The typed prefix of the current phrase.
    pub fn visible_text(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.char_index) {
            Some((byte_offset, _)) => &phrase[..byte_offset],
            None => phrase,
        }
    }

    pub fn is_fully_typed(&self) -> bool {
        self.char_index == self.phrase_len()
    }
}

impl UiState for TypingState {}
