//! Scheduled scraping jobs

use serde::{Deserialize, Serialize};

use crate::status::PatternStatus;

/// Whether the backend's scheduler is currently running a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum JobStatus {
    #[default]
    Running,
    Stopped,
}

impl JobStatus {
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Running => "Running",
            JobStatus::Stopped => "Stopped",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            JobStatus::Running => JobStatus::Stopped,
            JobStatus::Stopped => JobStatus::Running,
        }
    }
}

impl From<i64> for JobStatus {
    fn from(value: i64) -> Self {
        if value == 1 {
            JobStatus::Stopped
        } else {
            JobStatus::Running
        }
    }
}

impl From<JobStatus> for i64 {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Running => 0,
            JobStatus::Stopped => 1,
        }
    }
}

/// A cron-driven scrape of `url`, matched against `pattern`, that mails
/// `content` through the account `email` when the match changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    #[serde(rename = "ID", alias = "id")]
    pub id: u64,
    pub name: String,
    pub cron: String,
    /// Scheduler handle assigned by the backend
    #[serde(rename = "entryId")]
    pub entry_id: i64,
    pub url: String,
    /// Last matched text
    #[serde(rename = "oldValue")]
    pub old_value: String,
    pub pattern: String,
    #[serde(rename = "patternStatus")]
    pub pattern_status: PatternStatus,
    pub email: String,
    pub content: String,
    pub status: JobStatus,
}

impl Job {
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Copy of this job with its run status flipped
    pub fn with_status_toggled(&self) -> Self {
        Self {
            status: self.status.toggled(),
            ..self.clone()
        }
    }
}
