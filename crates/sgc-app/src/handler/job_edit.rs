//! Job form handlers

use sgc_core::{Account, ApiFailure, CheckStatus, Template};
use tracing::{debug, warn};

use super::{UpdateAction, UpdateResult};
use crate::form::CheckIndicator;
use crate::message::Message;
use crate::route::Route;
use crate::state::AppState;

pub const NO_ACCOUNT_FOR_JOB_WARNING: &str =
    "A job needs a notification account, please create one first";

pub fn handle_job_accounts_loaded(state: &mut AppState, accounts: Vec<Account>) -> UpdateResult {
    if state.route != Route::JobEdit {
        return UpdateResult::none();
    }
    if accounts.is_empty() {
        state.notifications.warning(NO_ACCOUNT_FOR_JOB_WARNING);
        return UpdateResult::message(Message::OpenAccountEditor { account: None });
    }
    state
        .job_edit
        .set_accounts(accounts.into_iter().map(|a| a.email).collect());
    UpdateResult::none()
}

pub fn handle_job_templates_loaded(state: &mut AppState, templates: Vec<Template>) -> UpdateResult {
    debug!("Job form: {} templates available", templates.len());
    state.job_edit.templates = templates;
    state.job_edit.applied_template = None;
    UpdateResult::none()
}

pub fn handle_choices_load_failed(state: &mut AppState, what: &str, error: ApiFailure) -> UpdateResult {
    warn!("Loading {} for the job form failed: {}", what, error);
    state.notifications.error(error.to_string());
    UpdateResult::none()
}

pub fn handle_cycle_email(state: &mut AppState, forward: bool) -> UpdateResult {
    state.job_edit.cycle_email(forward);
    UpdateResult::none()
}

pub fn handle_apply_template(state: &mut AppState, index: usize) -> UpdateResult {
    if let Some(template) = state.job_edit.apply_template(index) {
        let text = format!("Applied template {}", template.name);
        state.notifications.info(text);
    }
    UpdateResult::none()
}

pub fn handle_apply_next_template(state: &mut AppState) -> UpdateResult {
    match state.job_edit.next_template_index() {
        Some(index) => UpdateResult::message(Message::ApplyTemplate { index }),
        None => {
            state.notifications.info("No templates available");
            UpdateResult::none()
        }
    }
}

pub fn handle_test_pattern(state: &mut AppState) -> UpdateResult {
    let Some(probe) = state.job_edit.probe() else {
        return UpdateResult::none();
    };
    state.job_edit.pattern_check = CheckIndicator::Checking;
    state.job_edit.matched = None;
    UpdateResult::action(UpdateAction::TestPattern { probe })
}

pub fn handle_pattern_matched(state: &mut AppState, text: String) -> UpdateResult {
    state.job_edit.pattern_check = CheckIndicator::settled(true);
    state.job_edit.pattern_status = CheckStatus::settled(true);
    state.notifications.success(format!("Pattern matched: {}", text));
    state.job_edit.matched = Some(text);
    UpdateResult::none()
}

pub fn handle_pattern_failed(state: &mut AppState, error: ApiFailure) -> UpdateResult {
    state.job_edit.pattern_check = CheckIndicator::settled(false);
    state.job_edit.pattern_status = CheckStatus::settled(false);
    state.job_edit.matched = None;
    state.notifications.error(error.to_string());
    UpdateResult::none()
}

pub fn handle_submit_job(state: &mut AppState) -> UpdateResult {
    let Some(job) = state.job_edit.validate() else {
        debug!("Job form has invalid fields");
        return UpdateResult::none();
    };
    state.job_edit.submitting = true;
    UpdateResult::action(UpdateAction::SaveJob { job })
}

pub fn handle_job_saved(state: &mut AppState) -> UpdateResult {
    state.job_edit.submitting = false;
    state.notifications.success("Job saved");
    UpdateResult::message(Message::Back)
}

pub fn handle_job_save_failed(state: &mut AppState, error: ApiFailure) -> UpdateResult {
    state.job_edit.submitting = false;
    warn!("Saving job failed: {}", error);
    state.notifications.error(error.to_string());
    UpdateResult::none()
}
