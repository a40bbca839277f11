//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per page
//! - `navigation`: Page switching, mounting, dialogs and quitting
//! - `accounts` / `account_edit`: Account list and form
//! - `jobs` / `job_edit`: Job list and form
//! - `templates`: Template list and form
//! - `logs`: Live log stream

pub(crate) mod account_edit;
pub(crate) mod accounts;
pub(crate) mod job_edit;
pub(crate) mod jobs;
pub(crate) mod keys;
pub(crate) mod logs;
pub(crate) mod navigation;
pub(crate) mod templates;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use sgc_api::PatternProbe;
use sgc_core::{Account, Job, Template, TestEmailRequest};

use crate::message::Message;

pub use keys::handle_key;
pub use update::update;

/// Effects the event loop performs after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// GET the account collection for the account list
    LoadAccounts,
    /// Connectivity test of a stored account
    TestAccount { request: TestEmailRequest },
    DeleteAccount { account: Account },
    /// POST when `id == 0`, PUT otherwise
    SaveAccount { account: Account },
    /// Connectivity test of the account form's values
    TestConnectivity { request: TestEmailRequest },

    LoadJobs,
    /// PUT a job whose run status was flipped
    UpdateJobStatus { job: Job },
    DeleteJob { job: Job },
    /// GET accounts and templates for the job form
    LoadJobEditorChoices,
    TestPattern { probe: PatternProbe },
    SaveJob { job: Job },

    LoadTemplates,
    DeleteTemplate { template: Template },
    SaveTemplate { template: Template },

    /// Open the log WebSocket, replacing any previous stream
    ConnectLogStream { generation: u64 },
    /// Abort the log stream task
    DisconnectLogStream,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
