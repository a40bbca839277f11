use super::*;
use crate::form::CheckIndicator;
use crate::input_key::InputKey;
use crate::notifications::NotificationLevel;
use crate::route::Route;
use crate::state::AppState;
use crate::views::LogStreamStatus;
use accounts::{LAST_ACCOUNT_WARNING, NO_ACCOUNT_WARNING};
use sgc_api::test_utils::{account, job, template};
use sgc_core::{ApiFailure, CheckStatus, JobStatus, TestEmailRequest};

/// Run a message and every follow-up, collecting the actions produced
fn drive(state: &mut AppState, msg: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(msg);
    while let Some(msg) = next {
        let result = update(state, msg);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

fn state_with_accounts(ids: &[u64]) -> AppState {
    let mut state = AppState::default();
    state.route = Route::Accounts;
    let accounts = ids
        .iter()
        .map(|id| account(*id, &format!("user{}@example.com", id)))
        .collect();
    update(&mut state, Message::AccountsLoaded { accounts });
    state
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        update(state, Message::FormInput(c));
    }
}

// ─────────────────────────────────────────────────────────
// Account list
// ─────────────────────────────────────────────────────────

#[test]
fn test_last_account_cannot_be_deleted() {
    let mut state = state_with_accounts(&[1]);

    let result = update(&mut state, Message::RequestDeleteAccount { id: 1 });
    assert!(result.action.is_none());
    assert!(state.confirm_dialog.is_none());

    let result = update(&mut state, Message::DeleteAccount { id: 1 });
    assert!(result.action.is_none());
    assert!(state
        .notifications
        .contains(NotificationLevel::Warning, LAST_ACCOUNT_WARNING));
    assert_eq!(state.accounts.list.len(), 1);
}

#[test]
fn test_delete_with_two_accounts() {
    let mut state = state_with_accounts(&[1, 2]);

    let result = update(&mut state, Message::DeleteAccount { id: 2 });
    assert_eq!(
        result.action,
        Some(UpdateAction::DeleteAccount {
            account: account(2, "user2@example.com")
        })
    );

    let result = update(&mut state, Message::AccountDeleted { id: 2 });
    assert!(result.message.is_none());
    let ids: Vec<u64> = state.accounts.accounts().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1]);
    assert!(state
        .notifications
        .contains(NotificationLevel::Success, "Account deleted"));
}

#[test]
fn test_delete_goes_through_confirmation() {
    let mut state = state_with_accounts(&[1, 2]);

    update(&mut state, Message::RequestDeleteAccount { id: 2 });
    assert!(state.confirm_dialog.is_some());

    let actions = drive(&mut state, Message::ConfirmSelected);
    assert!(state.confirm_dialog.is_none());
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::DeleteAccount { account }] if account.id == 2
    ));
}

#[test]
fn test_cancelled_confirmation_does_nothing() {
    let mut state = state_with_accounts(&[1, 2]);
    update(&mut state, Message::RequestDeleteAccount { id: 2 });
    update(&mut state, Message::ConfirmNext);

    let actions = drive(&mut state, Message::ConfirmSelected);
    assert!(actions.is_empty());
    assert!(state.confirm_dialog.is_none());
    assert_eq!(state.accounts.list.len(), 2);
}

#[test]
fn test_empty_account_list_redirects_to_creation() {
    let mut state = AppState::default();
    state.route = Route::Accounts;

    let result = update(&mut state, Message::AccountsLoaded { accounts: vec![] });
    assert!(state
        .notifications
        .contains(NotificationLevel::Warning, NO_ACCOUNT_WARNING));
    assert!(matches!(
        result.message,
        Some(Message::OpenAccountEditor { account: None })
    ));

    drive(&mut state, result.message.unwrap());
    assert_eq!(state.route, Route::AccountEdit);
    assert!(!state.account_edit.is_edit());
}

#[test]
fn test_loaded_accounts_do_not_navigate() {
    let state = state_with_accounts(&[1]);
    assert_eq!(state.route, Route::Accounts);
    assert!(state.notifications.is_empty());
    assert!(!state.accounts.list.loading);
}

#[test]
fn test_deleting_down_to_empty_redirects() {
    let mut state = state_with_accounts(&[1, 2]);
    state.accounts.remove(1);

    let actions = drive(&mut state, Message::AccountDeleted { id: 2 });
    assert!(actions.is_empty());
    assert_eq!(state.route, Route::AccountEdit);
}

#[test]
fn test_account_test_lifecycle() {
    let mut state = state_with_accounts(&[1]);

    let result = update(&mut state, Message::TestAccount { id: 1 });
    assert_eq!(
        result.action,
        Some(UpdateAction::TestAccount {
            request: TestEmailRequest::from_stored(&account(1, "user1@example.com"))
        })
    );
    assert_eq!(state.accounts.get(1).unwrap().status, CheckStatus::Testing);

    update(&mut state, Message::AccountTestSucceeded { id: 1 });
    assert_eq!(state.accounts.get(1).unwrap().status, CheckStatus::Verified);
    assert!(state
        .notifications
        .contains(NotificationLevel::Success, "user1@example.com"));
}

#[test]
fn test_account_test_failure_shows_backend_message() {
    let mut state = state_with_accounts(&[1]);
    update(&mut state, Message::TestAccount { id: 1 });

    update(
        &mut state,
        Message::AccountTestFailed {
            id: 1,
            error: ApiFailure::backend(500, "m", "r"),
        },
    );
    assert_eq!(state.accounts.get(1).unwrap().status, CheckStatus::Failed);
    let latest = state.notifications.latest().unwrap();
    assert_eq!(latest.level, NotificationLevel::Error);
    assert!(latest.text.contains("m"));
    assert!(latest.text.contains("r"));
}

#[test]
fn test_account_list_load_failure_notifies() {
    let mut state = AppState::default();
    state.route = Route::Accounts;
    state.accounts.list.loading = true;

    update(
        &mut state,
        Message::AccountsLoadFailed {
            error: ApiFailure::transport(""),
        },
    );
    assert!(!state.accounts.list.loading);
    assert!(state
        .notifications
        .contains(NotificationLevel::Error, "Network error"));
}

// ─────────────────────────────────────────────────────────
// Account form
// ─────────────────────────────────────────────────────────

#[test]
fn test_account_form_submit_creates() {
    let mut state = AppState::default();
    drive(&mut state, Message::OpenAccountEditor { account: None });
    type_text(&mut state, "a@b.com");
    update(&mut state, Message::FormNextField);
    type_text(&mut state, "pw");

    let result = update(&mut state, Message::SubmitAccount);
    let Some(UpdateAction::SaveAccount { account }) = result.action else {
        panic!("expected a save action");
    };
    assert_eq!(account.id, 0);
    assert_eq!(account.email, "a@b.com");
    assert_eq!(account.password, "pw");
    assert!(state.account_edit.submitting);
}

#[test]
fn test_account_form_invalid_fields_block_submit() {
    let mut state = AppState::default();
    drive(&mut state, Message::OpenAccountEditor { account: None });
    type_text(&mut state, "not-an-email");

    let result = update(&mut state, Message::SubmitAccount);
    assert!(result.action.is_none());
    assert!(state.account_edit.email.error.is_some());
    assert!(state.account_edit.password.error.is_some());
}

#[test]
fn test_account_saved_returns_to_list() {
    let mut state = state_with_accounts(&[1]);
    let stored = state.accounts.get(1).cloned();
    drive(&mut state, Message::OpenAccountEditor { account: stored });
    assert_eq!(state.route, Route::AccountEdit);

    let actions = drive(&mut state, Message::AccountSaved);
    assert_eq!(state.route, Route::Accounts);
    assert_eq!(actions, vec![UpdateAction::LoadAccounts]);
    assert!(state
        .notifications
        .contains(NotificationLevel::Success, "Account user1@example.com updated"));
}

#[test]
fn test_account_form_failures_are_only_logged() {
    let mut state = AppState::default();
    drive(&mut state, Message::OpenAccountEditor { account: None });

    update(
        &mut state,
        Message::AccountSaveFailed {
            error: ApiFailure::backend(500, "m", "r"),
        },
    );
    update(
        &mut state,
        Message::ConnectivityFailed {
            error: ApiFailure::backend(500, "m", "r"),
        },
    );
    assert!(state.notifications.is_empty());
    assert_eq!(state.route, Route::AccountEdit);
    assert_eq!(state.account_edit.connectivity, CheckIndicator::Failed);
}

#[test]
fn test_connectivity_check_sends_typed_password() {
    let mut state = AppState::default();
    drive(&mut state, Message::OpenAccountEditor { account: None });
    type_text(&mut state, "a@b.com");
    update(&mut state, Message::FormNextField);
    type_text(&mut state, "pw");

    let result = update(&mut state, Message::TestConnectivity);
    let Some(UpdateAction::TestConnectivity { request }) = result.action else {
        panic!("expected a connectivity action");
    };
    assert_eq!(request.password.as_deref(), Some("pw"));
    assert_eq!(state.account_edit.connectivity, CheckIndicator::Checking);

    update(&mut state, Message::ConnectivityVerified);
    assert_eq!(state.account_edit.connectivity, CheckIndicator::Verified);
}

#[test]
fn test_editing_account_under_test_saves_untested() {
    let mut state = state_with_accounts(&[1]);
    update(&mut state, Message::TestAccount { id: 1 });
    let stored = state.accounts.get(1).cloned();
    assert_eq!(stored.as_ref().map(|a| a.status), Some(CheckStatus::Testing));

    drive(&mut state, Message::OpenAccountEditor { account: stored });
    update(&mut state, Message::FormNextField);
    type_text(&mut state, "pw");

    let result = update(&mut state, Message::SubmitAccount);
    let Some(UpdateAction::SaveAccount { account }) = result.action else {
        panic!("expected a save action");
    };
    assert_eq!(account.id, 1);
    assert_eq!(account.status, CheckStatus::Untested);
}

#[test]
fn test_connectivity_check_sends_unvalidated_form() {
    let mut state = AppState::default();
    drive(&mut state, Message::OpenAccountEditor { account: None });
    type_text(&mut state, "a@b.com");

    let result = update(&mut state, Message::TestConnectivity);
    assert_eq!(
        result.action,
        Some(UpdateAction::TestConnectivity {
            request: TestEmailRequest {
                id: 0,
                email: "a@b.com".into(),
                password: Some(String::new()),
                host: String::new(),
                port: 0,
            }
        })
    );
    assert_eq!(state.account_edit.connectivity, CheckIndicator::Checking);
    assert!(state.account_edit.password.error.is_none());

    update(
        &mut state,
        Message::ConnectivityFailed {
            error: ApiFailure::backend(400, "m", "r"),
        },
    );
    assert_eq!(state.account_edit.connectivity, CheckIndicator::Failed);
}

// ─────────────────────────────────────────────────────────
// Jobs
// ─────────────────────────────────────────────────────────

#[test]
fn test_job_toggle_flips_status() {
    let mut state = AppState::default();
    update(
        &mut state,
        Message::JobsLoaded {
            jobs: vec![job(1, "price")],
        },
    );

    let result = update(&mut state, Message::ToggleJob { id: 1 });
    let Some(UpdateAction::UpdateJobStatus { job: toggled }) = result.action else {
        panic!("expected a status update");
    };
    assert_eq!(toggled.status, JobStatus::Stopped);
    // The list only changes once the backend acknowledges
    assert_eq!(state.jobs.get(1).unwrap().status, JobStatus::Running);

    update(
        &mut state,
        Message::JobToggled {
            id: 1,
            status: JobStatus::Stopped,
        },
    );
    assert_eq!(state.jobs.get(1).unwrap().status, JobStatus::Stopped);
    assert!(state
        .notifications
        .contains(NotificationLevel::Success, "Job price stopped"));
}

#[test]
fn test_job_editor_loads_choices() {
    let mut state = AppState::default();
    let actions = drive(&mut state, Message::OpenJobEditor { job: None });
    assert_eq!(actions, vec![UpdateAction::LoadJobEditorChoices]);
    assert_eq!(state.route, Route::JobEdit);

    update(
        &mut state,
        Message::JobAccountsLoaded {
            accounts: vec![account(1, "a@b.com"), account(2, "c@d.com")],
        },
    );
    assert_eq!(state.job_edit.email.value, "a@b.com");

    update(&mut state, Message::CycleJobEmail { forward: true });
    assert_eq!(state.job_edit.email.value, "c@d.com");
}

#[test]
fn test_job_editor_without_accounts_redirects() {
    let mut state = AppState::default();
    drive(&mut state, Message::OpenJobEditor { job: None });

    drive(&mut state, Message::JobAccountsLoaded { accounts: vec![] });
    assert_eq!(state.route, Route::AccountEdit);
    assert!(state
        .notifications
        .contains(NotificationLevel::Warning, "notification account"));
}

#[test]
fn test_job_editor_refetches_after_account_creation() {
    let mut state = AppState::default();
    drive(&mut state, Message::OpenJobEditor { job: None });
    type_text(&mut state, "price");

    drive(&mut state, Message::JobAccountsLoaded { accounts: vec![] });
    assert_eq!(state.route, Route::AccountEdit);

    let actions = drive(&mut state, Message::AccountSaved);
    assert_eq!(state.route, Route::JobEdit);
    assert_eq!(actions, vec![UpdateAction::LoadJobEditorChoices]);
    assert_eq!(state.job_edit.name.value, "price");

    update(
        &mut state,
        Message::JobAccountsLoaded {
            accounts: vec![account(1, "a@b.com")],
        },
    );
    assert_eq!(state.job_edit.account_emails, vec!["a@b.com".to_string()]);
    assert_eq!(state.job_edit.email.value, "a@b.com");

    let actions = drive(&mut state, Message::Back);
    assert_eq!(state.route, Route::Jobs);
    assert_eq!(actions, vec![UpdateAction::LoadJobs]);
}

#[test]
fn test_late_job_accounts_are_ignored_elsewhere() {
    let mut state = AppState::default();
    let result = update(&mut state, Message::JobAccountsLoaded { accounts: vec![] });
    assert!(result.message.is_none());
    assert_eq!(state.route, Route::Jobs);
}

#[test]
fn test_apply_template_fills_job_form() {
    let mut state = AppState::default();
    drive(&mut state, Message::OpenJobEditor { job: None });
    update(
        &mut state,
        Message::JobTemplatesLoaded {
            templates: vec![template(1, "daily"), template(2, "hourly")],
        },
    );

    drive(&mut state, Message::ApplyNextTemplate);
    assert_eq!(state.job_edit.cron.value, "0 9 * * *");
    assert_eq!(state.job_edit.applied_template, Some(0));
    assert!(state
        .notifications
        .contains(NotificationLevel::Info, "daily"));

    drive(&mut state, Message::ApplyNextTemplate);
    assert_eq!(state.job_edit.applied_template, Some(1));
}

#[test]
fn test_pattern_test_lifecycle() {
    let mut state = AppState::default();
    let stored = job(3, "price");
    drive(
        &mut state,
        Message::OpenJobEditor {
            job: Some(stored.clone()),
        },
    );

    let result = update(&mut state, Message::TestPattern);
    let Some(UpdateAction::TestPattern { probe }) = result.action else {
        panic!("expected a pattern probe");
    };
    assert_eq!(probe.id, 3);
    assert_eq!(probe.url, stored.url);
    assert_eq!(probe.pattern, stored.pattern);
    assert_eq!(state.job_edit.pattern_check, CheckIndicator::Checking);

    update(
        &mut state,
        Message::PatternMatched {
            text: "42".to_string(),
        },
    );
    assert_eq!(state.job_edit.matched.as_deref(), Some("42"));
    assert_eq!(state.job_edit.pattern_status, CheckStatus::Verified);
}

#[test]
fn test_job_saved_returns_and_reloads() {
    let mut state = AppState::default();
    drive(&mut state, Message::OpenJobEditor { job: Some(job(3, "price")) });

    let result = update(&mut state, Message::SubmitJob);
    assert!(matches!(
        result.action,
        Some(UpdateAction::SaveJob { ref job }) if job.id == 3
    ));

    let actions = drive(&mut state, Message::JobSaved);
    assert_eq!(state.route, Route::Jobs);
    assert_eq!(actions, vec![UpdateAction::LoadJobs]);
}

// ─────────────────────────────────────────────────────────
// Templates
// ─────────────────────────────────────────────────────────

#[test]
fn test_template_delete_flow() {
    let mut state = AppState::default();
    state.route = Route::Templates;
    update(
        &mut state,
        Message::TemplatesLoaded {
            templates: vec![template(1, "daily")],
        },
    );

    update(&mut state, Message::RequestDeleteTemplate { id: 1 });
    let actions = drive(&mut state, Message::ConfirmSelected);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::DeleteTemplate { template }] if template.id == 1
    ));

    update(&mut state, Message::TemplateDeleted { id: 1 });
    assert!(state.templates.list.is_empty());
}

#[test]
fn test_template_form_submit() {
    let mut state = AppState::default();
    drive(&mut state, Message::OpenTemplateEditor { template: None });
    type_text(&mut state, "daily");
    update(&mut state, Message::FormNextField);
    type_text(&mut state, "0 9 * * *");
    update(&mut state, Message::FormNextField);
    type_text(&mut state, "(\\d+)");
    update(&mut state, Message::FormNextField);
    type_text(&mut state, "changed");

    let result = update(&mut state, Message::SubmitTemplate);
    let Some(UpdateAction::SaveTemplate { template }) = result.action else {
        panic!("expected a save action");
    };
    assert_eq!(template.name, "daily");
    assert_eq!(template.cron, "0 9 * * *");
    assert_eq!(template.pattern, "(\\d+)");
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_navigate_mounts_page() {
    let mut state = AppState::default();
    let actions = drive(&mut state, Message::Navigate(Route::Accounts));
    assert_eq!(state.route, Route::Accounts);
    assert!(state.history.is_empty());
    assert_eq!(actions, vec![UpdateAction::LoadAccounts]);
    assert!(state.accounts.list.loading);
}

#[test]
fn test_back_at_root_is_noop() {
    let mut state = AppState::default();
    let actions = drive(&mut state, Message::Back);
    assert!(actions.is_empty());
    assert_eq!(state.route, Route::Jobs);
}

#[test]
fn test_menu_cycles_through_pages() {
    let mut state = AppState::default();
    drive(&mut state, Message::NextMenu);
    assert_eq!(state.route, Route::Accounts);
    drive(&mut state, Message::PreviousMenu);
    assert_eq!(state.route, Route::Jobs);
}

#[test]
fn test_menu_switching_keeps_history_empty() {
    let mut state = AppState::default();
    for _ in 0..10 {
        drive(&mut state, Message::NextMenu);
    }
    drive(&mut state, Message::Navigate(Route::Templates));
    assert!(state.history.is_empty());

    let route = state.route;
    let actions = drive(&mut state, Message::Back);
    assert!(actions.is_empty());
    assert_eq!(state.route, route);
}

#[test]
fn test_quit_requires_confirmation() {
    let mut state = AppState::default();
    update(&mut state, Message::RequestQuit);
    assert!(!state.should_quit());

    drive(&mut state, Message::ConfirmSelected);
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Log stream
// ─────────────────────────────────────────────────────────

#[test]
fn test_log_page_connects_and_disconnects() {
    let mut state = AppState::default();
    let actions = drive(&mut state, Message::Navigate(Route::Logs));
    let generation = state.logs.generation;
    assert_eq!(actions, vec![UpdateAction::ConnectLogStream { generation }]);
    assert_eq!(state.logs.status, LogStreamStatus::Connecting);

    update(&mut state, Message::LogStreamOpened { generation });
    assert_eq!(state.logs.status, LogStreamStatus::Streaming);

    let actions = drive(&mut state, Message::Navigate(Route::Jobs));
    assert_eq!(
        actions,
        vec![UpdateAction::DisconnectLogStream, UpdateAction::LoadJobs]
    );
    assert!(!state.logs.status.is_open());
}

#[test]
fn test_stale_log_events_are_dropped() {
    let mut state = AppState::default();
    drive(&mut state, Message::Navigate(Route::Logs));
    let stale = state.logs.generation;
    drive(&mut state, Message::ReconnectLog);
    let current = state.logs.generation;
    assert_ne!(stale, current);

    update(
        &mut state,
        Message::LogLine {
            generation: stale,
            line: "old".into(),
        },
    );
    update(
        &mut state,
        Message::LogLine {
            generation: current,
            line: "new".into(),
        },
    );
    assert_eq!(state.logs.lines().collect::<Vec<_>>(), vec!["new"]);

    update(
        &mut state,
        Message::LogStreamClosed {
            generation: stale,
            reason: None,
        },
    );
    assert_eq!(state.logs.status, LogStreamStatus::Connecting);
}

#[test]
fn test_reconnect_outside_log_page_is_ignored() {
    let mut state = AppState::default();
    let result = update(&mut state, Message::ReconnectLog);
    assert!(result.action.is_none());
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_digit_keys_navigate_menu() {
    let state = AppState::default();
    assert!(matches!(
        handle_key(&state, InputKey::Char('2')),
        Some(Message::Navigate(Route::Accounts))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('4')),
        Some(Message::Navigate(Route::Logs))
    ));
    assert!(handle_key(&state, InputKey::Char('9')).is_none());
}

#[test]
fn test_dialog_captures_keys() {
    let mut state = AppState::default();
    update(&mut state, Message::RequestQuit);
    assert!(matches!(
        handle_key(&state, InputKey::Char('2')),
        None
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::CancelConfirm)
    ));
}

#[test]
fn test_editor_keys_type_into_fields() {
    let mut state = AppState::default();
    drive(&mut state, Message::OpenTemplateEditor { template: None });
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::FormInput('q'))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('s')),
        Some(Message::SubmitTemplate)
    ));
}

#[test]
fn test_account_list_keys_use_selection() {
    let state = state_with_accounts(&[5]);
    assert!(matches!(
        handle_key(&state, InputKey::Char('t')),
        Some(Message::TestAccount { id: 5 })
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('d')),
        Some(Message::RequestDeleteAccount { id: 5 })
    ));
}

#[test]
fn test_key_message_runs_through_update() {
    let mut state = AppState::default();
    let actions = drive(&mut state, Message::Key(InputKey::Char('3')));
    assert_eq!(state.route, Route::Templates);
    assert_eq!(actions, vec![UpdateAction::LoadTemplates]);
}
