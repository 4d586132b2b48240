//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// `Default` is the state before anything happened; `PartialEq` lets owners
/// skip redraws and effects when a transition changed nothing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
