//! Account form handlers
//!
//! Save and connectivity failures here are only logged; the form stays as is.

use sgc_core::ApiFailure;
use tracing::{debug, error};

use super::{UpdateAction, UpdateResult};
use crate::form::CheckIndicator;
use crate::message::Message;
use crate::state::AppState;

pub fn handle_submit_account(state: &mut AppState) -> UpdateResult {
    let Some(account) = state.account_edit.validate() else {
        debug!("Account form has invalid fields");
        return UpdateResult::none();
    };
    state.account_edit.submitting = true;
    UpdateResult::action(UpdateAction::SaveAccount { account })
}

pub fn handle_account_saved(state: &mut AppState) -> UpdateResult {
    state.account_edit.submitting = false;
    let email = state.account_edit.email.value.trim();
    let text = if state.account_edit.is_edit() {
        format!("Account {} updated", email)
    } else {
        format!("Account {} created", email)
    };
    state.notifications.success(text);
    UpdateResult::message(Message::Back)
}

pub fn handle_account_save_failed(state: &mut AppState, failure: ApiFailure) -> UpdateResult {
    state.account_edit.submitting = false;
    error!(
        "Saving account failed (HTTP {:?}): {}",
        failure.status(),
        failure
    );
    UpdateResult::none()
}

pub fn handle_test_connectivity(state: &mut AppState) -> UpdateResult {
    let request = state.account_edit.test_request();
    state.account_edit.connectivity = CheckIndicator::Checking;
    UpdateResult::action(UpdateAction::TestConnectivity { request })
}

pub fn handle_connectivity_verified(state: &mut AppState) -> UpdateResult {
    state.account_edit.connectivity = CheckIndicator::settled(true);
    state.notifications.success("Connection verified");
    UpdateResult::none()
}

pub fn handle_connectivity_failed(state: &mut AppState, failure: ApiFailure) -> UpdateResult {
    state.account_edit.connectivity = CheckIndicator::settled(false);
    error!(
        "Connectivity test failed (HTTP {:?}): {}",
        failure.status(),
        failure
    );
    UpdateResult::none()
}
