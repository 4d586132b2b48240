//! Reducer for the banner typewriter.

use crate::ui::mvi::Reducer;

use super::intent::TypingIntent;
use super::state::{TypingPhase, TypingState};

pub struct TypingReducer;

impl Reducer for TypingReducer {
    type State = TypingState;
    type Intent = TypingIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TypingIntent::Tick => {
                let count = state.phrase_count();
                if count == 0 {
                    return state;
                }

                match state.phase {
                    TypingPhase::Typing => {
                        if state.char_index < state.phrase_len() {
                            state.char_index += 1;
                        } else {
                            state.phase = TypingPhase::Paused;
                        }
                    }
                    TypingPhase::Paused => {
                        state.phase = TypingPhase::Deleting;
                    }
                    TypingPhase::Deleting => {
                        if state.char_index > 0 {
                            state.char_index -= 1;
                        } else {
                            state.phase = TypingPhase::Typing;
                            state.text_index = (state.text_index + 1) % count;
                        }
                    }
                }
                state
            }
        }
    }
}
