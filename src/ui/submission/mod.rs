//! URL submission flow.
//!
//! Turns a pasted link into one request to the analysis service and tracks
//! it until it settles.
//!
//! - `state.rs` - Idle / Pending / Success / Failure
//! - `intent.rs` - Submit and Settle
//! - `reducer.rs` - Transitions, ignoring settlements of superseded requests
//! - `controller.rs` - Owns the state, spawns requests, queues scroll effects

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{Settlement, SettlementSender, SubmissionController};
pub use intent::SubmissionIntent;
pub use reducer::SubmissionReducer;
pub use state::{RequestId, SubmissionState};
