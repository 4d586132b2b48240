//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// The only place transitions happen. Must stay pure: no I/O, no clocks,
/// no effect scheduling. Owners compare old and new state to decide which
/// effects to queue.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
