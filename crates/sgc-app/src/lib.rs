//! sgc-app - Application state and orchestration for the Surveillance Console
//!
//! This crate implements the TEA (The Elm Architecture) pattern: pages and
//! forms live in [`AppState`], [`handler::update`] turns messages into state
//! changes plus [`UpdateAction`]s, and [`ActionContext`] runs those actions
//! against a [`sgc_api::Backend`], reporting back as messages.

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notifications;
pub mod process;
pub mod route;
pub mod signals;
pub mod state;
pub mod views;

// Re-export primary types
pub use actions::ActionContext;
pub use config::{load_settings, Settings};
pub use handler::{handle_key, update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use notifications::{Notification, NotificationLevel, Notifications};
pub use process::process_message;
pub use route::{Route, MENU};
pub use state::AppState;
