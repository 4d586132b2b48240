//! Buster: terminal client for checking whether a linked image or post is
//! real or AI-generated.

pub mod analysis;
pub mod check;
pub mod cli;
pub mod clock;
pub mod config;
pub mod logging;
pub mod ui;
