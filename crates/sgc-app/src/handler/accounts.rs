//! Account list handlers
//!
//! The backend must always hold at least one account: every fetch and every
//! delete ends in [`ensure_non_empty`], and deleting is refused client-side
//! while fewer than two accounts are held.

use sgc_core::{Account, ApiFailure, CheckStatus, TestEmailRequest};
use tracing::{debug, warn};

use super::{UpdateAction, UpdateResult};
use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;
use crate::state::AppState;

pub const NO_ACCOUNT_WARNING: &str = "No notification account yet, please create one";
pub const LAST_ACCOUNT_WARNING: &str = "At least one account must be kept";

/// Empty collection: warn and send the user to the creation form
pub fn ensure_non_empty(state: &mut AppState) -> UpdateResult {
    if state.accounts.list.is_empty() {
        state.notifications.warning(NO_ACCOUNT_WARNING);
        UpdateResult::message(Message::OpenAccountEditor { account: None })
    } else {
        UpdateResult::none()
    }
}

pub fn handle_accounts_loaded(state: &mut AppState, accounts: Vec<Account>) -> UpdateResult {
    debug!("Loaded {} accounts", accounts.len());
    state.accounts.list.replace(accounts);
    ensure_non_empty(state)
}

pub fn handle_accounts_load_failed(state: &mut AppState, error: ApiFailure) -> UpdateResult {
    warn!("Loading accounts failed: {}", error);
    state.accounts.list.loading = false;
    state.notifications.error(error.to_string());
    UpdateResult::none()
}

pub fn handle_test_account(state: &mut AppState, id: u64) -> UpdateResult {
    let Some(account) = state.accounts.get(id) else {
        return UpdateResult::none();
    };
    let request = TestEmailRequest::from_stored(account);
    state.accounts.set_status(id, CheckStatus::Testing);
    UpdateResult::action(UpdateAction::TestAccount { request })
}

pub fn handle_account_test_succeeded(state: &mut AppState, id: u64) -> UpdateResult {
    state.accounts.set_status(id, CheckStatus::settled(true));
    let text = match state.accounts.get(id) {
        Some(account) => format!("Account {} is available", account.email),
        None => "Account is available".to_string(),
    };
    state.notifications.success(text);
    UpdateResult::none()
}

pub fn handle_account_test_failed(state: &mut AppState, id: u64, error: ApiFailure) -> UpdateResult {
    warn!("Account {} test failed: {}", id, error);
    state.accounts.set_status(id, CheckStatus::settled(false));
    state.notifications.error(error.to_string());
    UpdateResult::none()
}

/// Ask for confirmation before deleting, unless the guard already refuses
pub fn handle_request_delete_account(state: &mut AppState, id: u64) -> UpdateResult {
    if refuse_last_account(state) {
        return UpdateResult::none();
    }
    let Some(account) = state.accounts.get(id) else {
        return UpdateResult::none();
    };
    state.confirm_dialog = Some(ConfirmDialogState::delete_confirmation(
        &format!("account {}", account.email),
        Message::DeleteAccount { id },
    ));
    UpdateResult::none()
}

pub fn handle_delete_account(state: &mut AppState, id: u64) -> UpdateResult {
    if refuse_last_account(state) {
        return UpdateResult::none();
    }
    match state.accounts.get(id) {
        Some(account) => UpdateResult::action(UpdateAction::DeleteAccount {
            account: account.clone(),
        }),
        None => UpdateResult::none(),
    }
}

pub fn handle_account_deleted(state: &mut AppState, id: u64) -> UpdateResult {
    state.accounts.remove(id);
    state.notifications.success("Account deleted");
    ensure_non_empty(state)
}

pub fn handle_account_delete_failed(
    state: &mut AppState,
    id: u64,
    error: ApiFailure,
) -> UpdateResult {
    warn!("Deleting account {} failed: {}", id, error);
    state.notifications.error(error.to_string());
    UpdateResult::none()
}

/// Guard on the locally held count; warns when refusing
fn refuse_last_account(state: &mut AppState) -> bool {
    if state.accounts.list.len() < 2 {
        state.notifications.warning(LAST_ACCOUNT_WARNING);
        true
    } else {
        false
    }
}
