//! # sgc-core - Core Domain Types
//!
//! Foundation crate for the Surveillance Console. Provides the records the
//! backend stores, form validation, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, url, tracing).
//!
//! ## Public API
//!
//! ### Records
//! - [`Account`] - Notification email identity with optional SMTP overrides
//! - [`Job`] / [`JobStatus`] - Scheduled scrape and its run state
//! - [`Template`] - Reusable cron/pattern/content triple
//! - [`CheckStatus`] - Untested / Verified / Failed / Testing, as sent on the wire
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`ApiFailure`] - Transport, structured and unstructured backend failures
//!
//! ### Validation (`validation`)
//! - [`FieldError`] - Inline form field rejection
//!
//! ## Prelude
//!
//! ```rust
//! use sgc_core::prelude::*;
//! ```

pub mod account;
pub mod error;
pub mod job;
pub mod logging;
pub mod status;
pub mod template;
pub mod validation;

/// Prelude for common imports used throughout all console crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use account::{smtp_defaults, Account, TestEmailRequest, PASSWORD_MASK};
pub use error::{ApiFailure, Error, Result, NETWORK_ERROR_TEXT, UNKNOWN_ERROR_TEXT};
pub use job::{Job, JobStatus};
pub use status::{AccountStatus, CheckStatus, PatternStatus};
pub use template::Template;
pub use validation::{FieldError, FieldResult};
