//! Terminal front-end: hero banner, link input, result panel.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod result_panel;
pub mod runtime;
pub mod submission;
pub mod terminal_guard;
pub mod theme;
pub mod typing;
pub mod url_field;

pub use runtime::run;
