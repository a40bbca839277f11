//! # sgc-api - Backend Client
//!
//! Talks to the Surveillance-guy backend: a REST client for accounts, jobs and
//! templates, the two test endpoints, and the live log WebSocket.
//!
//! Depends on [`sgc_core`] for the records and error handling.
//!
//! ## Public API
//!
//! - [`Backend`] - Every REST endpoint as an async trait (Send futures)
//! - [`RestClient`] - reqwest implementation bound to a configured root path
//! - [`ApiResponse`] - HTTP status plus decoded `data`
//! - [`PatternProbe`] - Query of the pattern test endpoint
//! - [`LogTail`] - Line stream from `/api/v1/websocket`

pub mod backend;
pub mod log_tail;
pub mod rest;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use backend::{ApiResponse, Backend, LocalBackend, PatternProbe};
pub use log_tail::{log_stream_url, LogTail, START_FRAME};
pub use rest::{parse_root, RestClient};
