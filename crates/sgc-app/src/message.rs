//! Message types for the application (TEA pattern)

use sgc_core::{Account, ApiFailure, Job, JobStatus, Template};

use crate::input_key::InputKey;
use crate::route::Route;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Shell
    // ─────────────────────────────────────────────────────────
    /// Keyboard event from terminal
    Key(InputKey),
    /// Periodic tick, expires notifications
    Tick,
    /// Ask before quitting
    RequestQuit,
    /// Quit immediately
    Quit,

    /// Switch page, remembering the current one
    Navigate(Route),
    /// Activate a page: runs its initial fetch
    Mount(Route),
    /// Return to the previous page
    Back,
    NextMenu,
    PreviousMenu,
    SelectNext,
    SelectPrevious,

    /// Open the account form, in edit mode when a record is given
    OpenAccountEditor { account: Option<Account> },
    OpenJobEditor { job: Option<Job> },
    OpenTemplateEditor { template: Option<Template> },

    ConfirmSelected,
    ConfirmNext,
    ConfirmPrevious,
    CancelConfirm,

    // ─────────────────────────────────────────────────────────
    // Form editing (routed to the active editor)
    // ─────────────────────────────────────────────────────────
    FormInput(char),
    FormBackspace,
    FormNextField,
    FormPreviousField,

    // ─────────────────────────────────────────────────────────
    // Account list
    // ─────────────────────────────────────────────────────────
    AccountsLoaded { accounts: Vec<Account> },
    AccountsLoadFailed { error: ApiFailure },
    TestAccount { id: u64 },
    AccountTestSucceeded { id: u64 },
    AccountTestFailed { id: u64, error: ApiFailure },
    RequestDeleteAccount { id: u64 },
    DeleteAccount { id: u64 },
    AccountDeleted { id: u64 },
    AccountDeleteFailed { id: u64, error: ApiFailure },

    // ─────────────────────────────────────────────────────────
    // Account editor
    // ─────────────────────────────────────────────────────────
    SubmitAccount,
    AccountSaved,
    AccountSaveFailed { error: ApiFailure },
    TestConnectivity,
    ConnectivityVerified,
    ConnectivityFailed { error: ApiFailure },

    // ─────────────────────────────────────────────────────────
    // Job list
    // ─────────────────────────────────────────────────────────
    JobsLoaded { jobs: Vec<Job> },
    JobsLoadFailed { error: ApiFailure },
    ToggleJob { id: u64 },
    JobToggled { id: u64, status: JobStatus },
    JobToggleFailed { id: u64, error: ApiFailure },
    RequestDeleteJob { id: u64 },
    DeleteJob { id: u64 },
    JobDeleted { id: u64 },
    JobDeleteFailed { id: u64, error: ApiFailure },

    // ─────────────────────────────────────────────────────────
    // Job editor
    // ─────────────────────────────────────────────────────────
    JobAccountsLoaded { accounts: Vec<Account> },
    JobAccountsLoadFailed { error: ApiFailure },
    JobTemplatesLoaded { templates: Vec<Template> },
    JobTemplatesLoadFailed { error: ApiFailure },
    CycleJobEmail { forward: bool },
    ApplyTemplate { index: usize },
    ApplyNextTemplate,
    TestPattern,
    PatternMatched { text: String },
    PatternFailed { error: ApiFailure },
    SubmitJob,
    JobSaved,
    JobSaveFailed { error: ApiFailure },

    // ─────────────────────────────────────────────────────────
    // Templates
    // ─────────────────────────────────────────────────────────
    TemplatesLoaded { templates: Vec<Template> },
    TemplatesLoadFailed { error: ApiFailure },
    RequestDeleteTemplate { id: u64 },
    DeleteTemplate { id: u64 },
    TemplateDeleted { id: u64 },
    TemplateDeleteFailed { id: u64, error: ApiFailure },
    SubmitTemplate,
    TemplateSaved,
    TemplateSaveFailed { error: ApiFailure },

    // ─────────────────────────────────────────────────────────
    // Log stream
    // ─────────────────────────────────────────────────────────
    LogStreamOpened { generation: u64 },
    LogLine { generation: u64, line: String },
    LogStreamClosed { generation: u64, reason: Option<String> },
    ReconnectLog,
    ClearLog,
    ScrollLogUp(usize),
    ScrollLogDown(usize),
    ScrollLogToBottom,
}
