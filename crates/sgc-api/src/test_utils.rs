//! In-memory [`Backend`] for tests of the app layer

use std::sync::{Arc, Mutex};

use sgc_core::prelude::*;
use sgc_core::{Account, ApiFailure, Job, Template, TestEmailRequest};

use crate::backend::{ApiResponse, Backend, PatternProbe};

/// One recorded call against [`FakeBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListAccounts,
    CreateAccount(Account),
    UpdateAccount(Account),
    DeleteAccount(Account),
    TestEmail(TestEmailRequest),
    ListJobs,
    CreateJob(Job),
    UpdateJob(Job),
    DeleteJob(Job),
    TestPattern(PatternProbe),
    ListTemplates,
    CreateTemplate(Template),
    UpdateTemplate(Template),
    DeleteTemplate(Template),
}

#[derive(Debug, Default)]
struct FakeState {
    accounts: Vec<Account>,
    jobs: Vec<Job>,
    templates: Vec<Template>,
    matched: String,
    failure: Option<ApiFailure>,
    calls: Vec<Call>,
}

/// Records every call; answers from canned collections or a canned failure
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<FakeState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(self, accounts: Vec<Account>) -> Self {
        self.lock().accounts = accounts;
        self
    }

    pub fn with_jobs(self, jobs: Vec<Job>) -> Self {
        self.lock().jobs = jobs;
        self
    }

    pub fn with_templates(self, templates: Vec<Template>) -> Self {
        self.lock().templates = templates;
        self
    }

    pub fn with_matched(self, matched: impl Into<String>) -> Self {
        self.lock().matched = matched.into();
        self
    }

    /// Make every subsequent call fail
    pub fn failing(self, failure: ApiFailure) -> Self {
        self.lock().failure = Some(failure);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: Call) -> Result<()> {
        let mut state = self.lock();
        state.calls.push(call);
        match &state.failure {
            Some(failure) => Err(Error::Api(failure.clone())),
            None => Ok(()),
        }
    }
}

impl Backend for FakeBackend {
    async fn list_accounts(&self) -> Result<ApiResponse<Vec<Account>>> {
        self.record(Call::ListAccounts)?;
        Ok(ApiResponse::new(200, self.lock().accounts.clone()))
    }

    async fn create_account(&self, account: &Account) -> Result<ApiResponse<()>> {
        self.record(Call::CreateAccount(account.clone()))?;
        Ok(ApiResponse::ok())
    }

    async fn update_account(&self, account: &Account) -> Result<ApiResponse<()>> {
        self.record(Call::UpdateAccount(account.clone()))?;
        Ok(ApiResponse::ok())
    }

    async fn delete_account(&self, account: &Account) -> Result<ApiResponse<()>> {
        self.record(Call::DeleteAccount(account.clone()))?;
        self.lock().accounts.retain(|a| a.id != account.id);
        Ok(ApiResponse::ok())
    }

    async fn test_email(&self, request: &TestEmailRequest) -> Result<ApiResponse<()>> {
        self.record(Call::TestEmail(request.clone()))?;
        Ok(ApiResponse::ok())
    }

    async fn list_jobs(&self) -> Result<ApiResponse<Vec<Job>>> {
        self.record(Call::ListJobs)?;
        Ok(ApiResponse::new(200, self.lock().jobs.clone()))
    }

    async fn create_job(&self, job: &Job) -> Result<ApiResponse<()>> {
        self.record(Call::CreateJob(job.clone()))?;
        Ok(ApiResponse::ok())
    }

    async fn update_job(&self, job: &Job) -> Result<ApiResponse<()>> {
        self.record(Call::UpdateJob(job.clone()))?;
        Ok(ApiResponse::ok())
    }

    async fn delete_job(&self, job: &Job) -> Result<ApiResponse<()>> {
        self.record(Call::DeleteJob(job.clone()))?;
        self.lock().jobs.retain(|j| j.id != job.id);
        Ok(ApiResponse::ok())
    }

    async fn test_pattern(&self, probe: &PatternProbe) -> Result<ApiResponse<String>> {
        self.record(Call::TestPattern(probe.clone()))?;
        Ok(ApiResponse::new(200, self.lock().matched.clone()))
    }

    async fn list_templates(&self) -> Result<ApiResponse<Vec<Template>>> {
        self.record(Call::ListTemplates)?;
        Ok(ApiResponse::new(200, self.lock().templates.clone()))
    }

    async fn create_template(&self, template: &Template) -> Result<ApiResponse<()>> {
        self.record(Call::CreateTemplate(template.clone()))?;
        Ok(ApiResponse::ok())
    }

    async fn update_template(&self, template: &Template) -> Result<ApiResponse<()>> {
        self.record(Call::UpdateTemplate(template.clone()))?;
        Ok(ApiResponse::ok())
    }

    async fn delete_template(&self, template: &Template) -> Result<ApiResponse<()>> {
        self.record(Call::DeleteTemplate(template.clone()))?;
        self.lock().templates.retain(|t| t.id != template.id);
        Ok(ApiResponse::ok())
    }
}

/// Stored account with the given id and email
pub fn account(id: u64, email: &str) -> Account {
    Account {
        id,
        ..Account::new(email, "secret")
    }
}

pub fn job(id: u64, name: &str) -> Job {
    Job {
        id,
        name: name.to_string(),
        cron: "*/5 * * * *".to_string(),
        url: "https://example.com".to_string(),
        pattern: r"\d+".to_string(),
        email: "a@b.com".to_string(),
        content: "changed".to_string(),
        ..Default::default()
    }
}

pub fn template(id: u64, name: &str) -> Template {
    Template {
        id,
        name: name.to_string(),
        cron: "0 9 * * *".to_string(),
        pattern: r"<title>(.*)</title>".to_string(),
        content: "title changed".to_string(),
    }
}
