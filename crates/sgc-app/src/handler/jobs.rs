//! Job list handlers

use sgc_core::{ApiFailure, Job, JobStatus};
use tracing::{debug, warn};

use super::{UpdateAction, UpdateResult};
use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;
use crate::state::AppState;

pub fn handle_jobs_loaded(state: &mut AppState, jobs: Vec<Job>) -> UpdateResult {
    debug!("Loaded {} jobs", jobs.len());
    state.jobs.list.replace(jobs);
    UpdateResult::none()
}

pub fn handle_jobs_load_failed(state: &mut AppState, error: ApiFailure) -> UpdateResult {
    warn!("Loading jobs failed: {}", error);
    state.jobs.list.loading = false;
    state.notifications.error(error.to_string());
    UpdateResult::none()
}

pub fn handle_toggle_job(state: &mut AppState, id: u64) -> UpdateResult {
    match state.jobs.get(id) {
        Some(job) => UpdateResult::action(UpdateAction::UpdateJobStatus {
            job: job.with_status_toggled(),
        }),
        None => UpdateResult::none(),
    }
}

pub fn handle_job_toggled(state: &mut AppState, id: u64, status: JobStatus) -> UpdateResult {
    state.jobs.set_status(id, status);
    let verb = match status {
        JobStatus::Running => "started",
        JobStatus::Stopped => "stopped",
    };
    let text = match state.jobs.get(id) {
        Some(job) => format!("Job {} {}", job.name, verb),
        None => format!("Job {}", verb),
    };
    state.notifications.success(text);
    UpdateResult::none()
}

pub fn handle_job_toggle_failed(state: &mut AppState, id: u64, error: ApiFailure) -> UpdateResult {
    warn!("Toggling job {} failed: {}", id, error);
    state.notifications.error(error.to_string());
    UpdateResult::none()
}

pub fn handle_request_delete_job(state: &mut AppState, id: u64) -> UpdateResult {
    if let Some(job) = state.jobs.get(id) {
        state.confirm_dialog = Some(ConfirmDialogState::delete_confirmation(
            &format!("job {}", job.name),
            Message::DeleteJob { id },
        ));
    }
    UpdateResult::none()
}

pub fn handle_delete_job(state: &mut AppState, id: u64) -> UpdateResult {
    match state.jobs.get(id) {
        Some(job) => UpdateResult::action(UpdateAction::DeleteJob { job: job.clone() }),
        None => UpdateResult::none(),
    }
}

pub fn handle_job_deleted(state: &mut AppState, id: u64) -> UpdateResult {
    state.jobs.remove(id);
    state.notifications.success("Job deleted");
    UpdateResult::none()
}

pub fn handle_job_delete_failed(state: &mut AppState, id: u64, error: ApiFailure) -> UpdateResult {
    warn!("Deleting job {} failed: {}", id, error);
    state.notifications.error(error.to_string());
    UpdateResult::none()
}
