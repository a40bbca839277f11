//! The backend's REST surface as a trait
//!
//! The app layer is generic over [`Backend`] so handlers and the action
//! executor can be exercised against an in-memory fake.

use serde::Serialize;

use sgc_core::prelude::*;
use sgc_core::{Account, Job, Template, TestEmailRequest};

/// Successful response: HTTP status plus the decoded `data` payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(status: u16, data: T) -> Self {
        Self { status, data }
    }

    /// The backend acknowledges mutations with exactly 200
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

impl ApiResponse<()> {
    pub fn ok() -> Self {
        Self::new(200, ())
    }
}

/// Query of `GET /api/v1/testpattern`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternProbe {
    pub id: u64,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub pattern: String,
}

impl PatternProbe {
    /// Regular-expression probe, the only kind the backend implements
    pub fn regex(id: u64, url: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            kind: "re".to_string(),
            pattern: pattern.into(),
        }
    }
}

/// Every endpoint the console calls
///
/// Failures are [`Error::Api`] carrying an [`sgc_core::ApiFailure`].
#[trait_variant::make(Backend: Send)]
pub trait LocalBackend {
    async fn list_accounts(&self) -> Result<ApiResponse<Vec<Account>>>;
    async fn create_account(&self, account: &Account) -> Result<ApiResponse<()>>;
    async fn update_account(&self, account: &Account) -> Result<ApiResponse<()>>;
    async fn delete_account(&self, account: &Account) -> Result<ApiResponse<()>>;
    async fn test_email(&self, request: &TestEmailRequest) -> Result<ApiResponse<()>>;

    async fn list_jobs(&self) -> Result<ApiResponse<Vec<Job>>>;
    async fn create_job(&self, job: &Job) -> Result<ApiResponse<()>>;
    async fn update_job(&self, job: &Job) -> Result<ApiResponse<()>>;
    async fn delete_job(&self, job: &Job) -> Result<ApiResponse<()>>;

    /// Run a pattern against a live page; `data` is the matched text
    async fn test_pattern(&self, probe: &PatternProbe) -> Result<ApiResponse<String>>;

    async fn list_templates(&self) -> Result<ApiResponse<Vec<Template>>>;
    async fn create_template(&self, template: &Template) -> Result<ApiResponse<()>>;
    async fn update_template(&self, template: &Template) -> Result<ApiResponse<()>>;
    async fn delete_template(&self, template: &Template) -> Result<ApiResponse<()>>;
}
