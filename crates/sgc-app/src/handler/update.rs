//! Main update function - handles state transitions (TEA pattern)

use super::{
    account_edit, accounts, job_edit, jobs, keys::handle_key, logs, navigation, templates,
    UpdateResult,
};
use crate::message::Message;
use crate::route::Route;
use crate::state::AppState;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },
        Message::Tick => navigation::handle_tick(state),
        Message::RequestQuit => navigation::handle_request_quit(state),
        Message::Quit => navigation::handle_quit(state),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(route) => navigation::handle_navigate(state, route),
        Message::Mount(route) => navigation::handle_mount(state, route),
        Message::Back => navigation::handle_back(state),
        Message::NextMenu => {
            let route = state.route.next_menu();
            navigation::handle_navigate(state, route)
        }
        Message::PreviousMenu => {
            let route = state.route.prev_menu();
            navigation::handle_navigate(state, route)
        }
        Message::SelectNext => navigation::handle_select(state, true),
        Message::SelectPrevious => navigation::handle_select(state, false),
        Message::OpenAccountEditor { account } => {
            navigation::handle_open_account_editor(state, account)
        }
        Message::OpenJobEditor { job } => navigation::handle_open_job_editor(state, job),
        Message::OpenTemplateEditor { template } => {
            navigation::handle_open_template_editor(state, template)
        }

        Message::ConfirmSelected => navigation::handle_confirm_selected(state),
        Message::ConfirmNext => navigation::handle_confirm_step(state, true),
        Message::ConfirmPrevious => navigation::handle_confirm_step(state, false),
        Message::CancelConfirm => navigation::handle_cancel_confirm(state),

        // ─────────────────────────────────────────────────────────
        // Form editing
        // ─────────────────────────────────────────────────────────
        Message::FormInput(c) => handle_form_input(state, Some(c)),
        Message::FormBackspace => handle_form_input(state, None),
        Message::FormNextField => handle_form_focus(state, true),
        Message::FormPreviousField => handle_form_focus(state, false),

        // ─────────────────────────────────────────────────────────
        // Accounts
        // ─────────────────────────────────────────────────────────
        Message::AccountsLoaded { accounts } => accounts::handle_accounts_loaded(state, accounts),
        Message::AccountsLoadFailed { error } => accounts::handle_accounts_load_failed(state, error),
        Message::TestAccount { id } => accounts::handle_test_account(state, id),
        Message::AccountTestSucceeded { id } => accounts::handle_account_test_succeeded(state, id),
        Message::AccountTestFailed { id, error } => {
            accounts::handle_account_test_failed(state, id, error)
        }
        Message::RequestDeleteAccount { id } => {
            accounts::handle_request_delete_account(state, id)
        }
        Message::DeleteAccount { id } => accounts::handle_delete_account(state, id),
        Message::AccountDeleted { id } => accounts::handle_account_deleted(state, id),
        Message::AccountDeleteFailed { id, error } => {
            accounts::handle_account_delete_failed(state, id, error)
        }

        Message::SubmitAccount => account_edit::handle_submit_account(state),
        Message::AccountSaved => account_edit::handle_account_saved(state),
        Message::AccountSaveFailed { error } => {
            account_edit::handle_account_save_failed(state, error)
        }
        Message::TestConnectivity => account_edit::handle_test_connectivity(state),
        Message::ConnectivityVerified => account_edit::handle_connectivity_verified(state),
        Message::ConnectivityFailed { error } => {
            account_edit::handle_connectivity_failed(state, error)
        }

        // ─────────────────────────────────────────────────────────
        // Jobs
        // ─────────────────────────────────────────────────────────
        Message::JobsLoaded { jobs } => jobs::handle_jobs_loaded(state, jobs),
        Message::JobsLoadFailed { error } => jobs::handle_jobs_load_failed(state, error),
        Message::ToggleJob { id } => jobs::handle_toggle_job(state, id),
        Message::JobToggled { id, status } => jobs::handle_job_toggled(state, id, status),
        Message::JobToggleFailed { id, error } => jobs::handle_job_toggle_failed(state, id, error),
        Message::RequestDeleteJob { id } => jobs::handle_request_delete_job(state, id),
        Message::DeleteJob { id } => jobs::handle_delete_job(state, id),
        Message::JobDeleted { id } => jobs::handle_job_deleted(state, id),
        Message::JobDeleteFailed { id, error } => jobs::handle_job_delete_failed(state, id, error),

        Message::JobAccountsLoaded { accounts } => {
            job_edit::handle_job_accounts_loaded(state, accounts)
        }
        Message::JobAccountsLoadFailed { error } => {
            job_edit::handle_choices_load_failed(state, "accounts", error)
        }
        Message::JobTemplatesLoaded { templates } => {
            job_edit::handle_job_templates_loaded(state, templates)
        }
        Message::JobTemplatesLoadFailed { error } => {
            job_edit::handle_choices_load_failed(state, "templates", error)
        }
        Message::CycleJobEmail { forward } => job_edit::handle_cycle_email(state, forward),
        Message::ApplyTemplate { index } => job_edit::handle_apply_template(state, index),
        Message::ApplyNextTemplate => job_edit::handle_apply_next_template(state),
        Message::TestPattern => job_edit::handle_test_pattern(state),
        Message::PatternMatched { text } => job_edit::handle_pattern_matched(state, text),
        Message::PatternFailed { error } => job_edit::handle_pattern_failed(state, error),
        Message::SubmitJob => job_edit::handle_submit_job(state),
        Message::JobSaved => job_edit::handle_job_saved(state),
        Message::JobSaveFailed { error } => job_edit::handle_job_save_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Templates
        // ─────────────────────────────────────────────────────────
        Message::TemplatesLoaded { templates } => {
            templates::handle_templates_loaded(state, templates)
        }
        Message::TemplatesLoadFailed { error } => {
            templates::handle_templates_load_failed(state, error)
        }
        Message::RequestDeleteTemplate { id } => {
            templates::handle_request_delete_template(state, id)
        }
        Message::DeleteTemplate { id } => templates::handle_delete_template(state, id),
        Message::TemplateDeleted { id } => templates::handle_template_deleted(state, id),
        Message::TemplateDeleteFailed { id, error } => {
            templates::handle_template_delete_failed(state, id, error)
        }
        Message::SubmitTemplate => templates::handle_submit_template(state),
        Message::TemplateSaved => templates::handle_template_saved(state),
        Message::TemplateSaveFailed { error } => {
            templates::handle_template_save_failed(state, error)
        }

        // ─────────────────────────────────────────────────────────
        // Logs
        // ─────────────────────────────────────────────────────────
        Message::LogStreamOpened { generation } => logs::handle_stream_opened(state, generation),
        Message::LogLine { generation, line } => logs::handle_line(state, generation, &line),
        Message::LogStreamClosed { generation, reason } => {
            logs::handle_stream_closed(state, generation, reason)
        }
        Message::ReconnectLog => logs::handle_reconnect(state),
        Message::ClearLog => {
            state.logs.clear();
            UpdateResult::none()
        }
        Message::ScrollLogUp(n) => {
            state.logs.scroll_up(n);
            UpdateResult::none()
        }
        Message::ScrollLogDown(n) => {
            state.logs.scroll_down(n);
            UpdateResult::none()
        }
        Message::ScrollLogToBottom => {
            state.logs.scroll_to_bottom();
            UpdateResult::none()
        }
    }
}

/// Type into (`Some`) or delete from (`None`) the focused field of the open form
fn handle_form_input(state: &mut AppState, input: Option<char>) -> UpdateResult {
    let field = match state.route {
        Route::AccountEdit => Some(state.account_edit.focused_mut()),
        Route::JobEdit if state.job_edit.focus_accepts_text() => {
            Some(state.job_edit.focused_mut())
        }
        Route::TemplateEdit => Some(state.template_edit.focused_mut()),
        _ => None,
    };
    if let Some(field) = field {
        match input {
            Some(c) => field.insert(c),
            None => field.backspace(),
        }
    }
    UpdateResult::none()
}

fn handle_form_focus(state: &mut AppState, forward: bool) -> UpdateResult {
    match state.route {
        Route::AccountEdit => {
            let focus = &mut state.account_edit.focus;
            *focus = if forward { focus.next() } else { focus.prev() };
        }
        Route::JobEdit => {
            let focus = &mut state.job_edit.focus;
            *focus = if forward { focus.next() } else { focus.prev() };
        }
        Route::TemplateEdit => {
            let focus = &mut state.template_edit.focus;
            *focus = if forward { focus.next() } else { focus.prev() };
        }
        _ => {}
    }
    UpdateResult::none()
}
