//! Page switching, mounting, confirmation dialogs and quitting

use std::time::Instant;

use sgc_core::{Job, Template};
use tracing::debug;

use super::{UpdateAction, UpdateResult};
use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;
use crate::route::Route;
use crate::state::{AppPhase, AppState};
use crate::views::{JobEditState, LogStreamStatus, TemplateEditState};

/// Abort the log stream when leaving the log page
fn leave_current(state: &mut AppState, to: Route) -> Option<UpdateAction> {
    if state.route == Route::Logs && to != Route::Logs {
        state.logs.generation += 1;
        state.logs.status = LogStreamStatus::Closed { reason: None };
        Some(UpdateAction::DisconnectLogStream)
    } else {
        None
    }
}

pub fn handle_navigate(state: &mut AppState, route: Route) -> UpdateResult {
    debug!("Navigate {:?} -> {:?}", state.route, route);
    let action = leave_current(state, route);
    state.go_to(route);
    UpdateResult {
        message: Some(Message::Mount(route)),
        action,
    }
}

pub fn handle_back(state: &mut AppState) -> UpdateResult {
    let Some(&previous) = state.history.last() else {
        return UpdateResult::none();
    };
    let action = leave_current(state, previous);
    state.go_back();
    UpdateResult {
        message: Some(Message::Mount(previous)),
        action,
    }
}

/// Run a page's initial fetch
pub fn handle_mount(state: &mut AppState, route: Route) -> UpdateResult {
    match route {
        Route::Accounts => {
            state.accounts.list.loading = true;
            UpdateResult::action(UpdateAction::LoadAccounts)
        }
        Route::Jobs => {
            state.jobs.list.loading = true;
            UpdateResult::action(UpdateAction::LoadJobs)
        }
        Route::Templates => {
            state.templates.list.loading = true;
            UpdateResult::action(UpdateAction::LoadTemplates)
        }
        Route::Logs => {
            let generation = state.logs.begin_connect();
            UpdateResult::action(UpdateAction::ConnectLogStream { generation })
        }
        // Returning to the job form re-fetches its choices; typed values stay
        Route::JobEdit => UpdateResult::action(UpdateAction::LoadJobEditorChoices),
        Route::AccountEdit | Route::TemplateEdit => UpdateResult::none(),
    }
}

pub fn handle_open_account_editor(
    state: &mut AppState,
    account: Option<sgc_core::Account>,
) -> UpdateResult {
    let action = leave_current(state, Route::AccountEdit);
    state.open_account_editor(account.as_ref());
    UpdateResult {
        message: None,
        action,
    }
}

pub fn handle_open_job_editor(state: &mut AppState, job: Option<Job>) -> UpdateResult {
    state.job_edit = match &job {
        Some(job) => JobEditState::edit(job),
        None => JobEditState::create(),
    };
    state.go_to(Route::JobEdit);
    UpdateResult::action(UpdateAction::LoadJobEditorChoices)
}

pub fn handle_open_template_editor(state: &mut AppState, template: Option<Template>) -> UpdateResult {
    state.template_edit = match &template {
        Some(template) => TemplateEditState::edit(template),
        None => TemplateEditState::create(),
    };
    state.go_to(Route::TemplateEdit);
    UpdateResult::none()
}

pub fn handle_select(state: &mut AppState, forward: bool) -> UpdateResult {
    match (state.route, forward) {
        (Route::Accounts, true) => state.accounts.list.select_next(),
        (Route::Accounts, false) => state.accounts.list.select_previous(),
        (Route::Jobs, true) => state.jobs.list.select_next(),
        (Route::Jobs, false) => state.jobs.list.select_previous(),
        (Route::Templates, true) => state.templates.list.select_next(),
        (Route::Templates, false) => state.templates.list.select_previous(),
        _ => {}
    }
    UpdateResult::none()
}

pub fn handle_request_quit(state: &mut AppState) -> UpdateResult {
    state.confirm_dialog = Some(ConfirmDialogState::new(
        "Quit",
        "Quit the console?",
        vec![("Quit", Message::Quit), ("Cancel", Message::CancelConfirm)],
    ));
    UpdateResult::none()
}

pub fn handle_quit(state: &mut AppState) -> UpdateResult {
    state.phase = AppPhase::Quitting;
    state.confirm_dialog = None;
    UpdateResult::none()
}

pub fn handle_confirm_selected(state: &mut AppState) -> UpdateResult {
    match state.confirm_dialog.take().and_then(|d| d.selected_message()) {
        Some(msg) => UpdateResult::message(msg),
        None => UpdateResult::none(),
    }
}

pub fn handle_confirm_step(state: &mut AppState, forward: bool) -> UpdateResult {
    if let Some(dialog) = state.confirm_dialog.as_mut() {
        if forward {
            dialog.select_next();
        } else {
            dialog.select_previous();
        }
    }
    UpdateResult::none()
}

pub fn handle_cancel_confirm(state: &mut AppState) -> UpdateResult {
    state.confirm_dialog = None;
    UpdateResult::none()
}

pub fn handle_tick(state: &mut AppState) -> UpdateResult {
    state.notifications.expire(Instant::now());
    UpdateResult::none()
}
