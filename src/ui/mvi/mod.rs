//! Model-View-Intent primitives shared by the banner and the submission flow.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                      │
//!    │                      └──→ Effects (run by the owner after commit)
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything the view needs, cloned on every transition
//! - **Intent**: a user action, timer tick or network settlement
//! - **Reducer**: pure `(State, Intent) -> State`
//! - **Effect**: UI side effect queued by the state's owner, never by the reducer

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::{EffectQueue, UiEffect};
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
