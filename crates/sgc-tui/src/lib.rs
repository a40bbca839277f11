//! sgc-tui - Terminal UI for the Surveillance Console
//!
//! This crate provides the ratatui-based terminal interface: it builds the
//! REST client and action executor from sgc-app's settings, then runs the
//! poll / update / render loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
