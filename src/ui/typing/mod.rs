//! Hero banner typewriter.
//!
//! Types each phrase one character at a time, holds it, deletes it twice as
//! fast, then moves on to the next phrase. Loops forever.
//!
//! - `state.rs` - Phrase cursor and phase
//! - `intent.rs` - Timer tick
//! - `reducer.rs` - Phase transitions
//! - `animator.rs` - Deadline scheduling on top of a [`Clock`](crate::clock::Clock)

mod animator;
mod intent;
mod reducer;
mod state;

pub use animator::{TypingAnimator, TypingCadence, CURSOR_BLINK};
pub use intent::TypingIntent;
pub use reducer::TypingReducer;
pub use state::{TypingPhase, TypingState};
