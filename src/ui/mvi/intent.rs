//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (submit, clear), timer ticks, or
/// results coming back from the analysis service. Reducers consume them.
pub trait Intent: Send + 'static {}
