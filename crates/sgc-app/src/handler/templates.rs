//! Template list and form handlers

use sgc_core::{ApiFailure, Template};
use tracing::{debug, warn};

use super::{UpdateAction, UpdateResult};
use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;
use crate::state::AppState;

pub fn handle_templates_loaded(state: &mut AppState, templates: Vec<Template>) -> UpdateResult {
    debug!("Loaded {} templates", templates.len());
    state.templates.list.replace(templates);
    UpdateResult::none()
}

pub fn handle_templates_load_failed(state: &mut AppState, error: ApiFailure) -> UpdateResult {
    warn!("Loading templates failed: {}", error);
    state.templates.list.loading = false;
    state.notifications.error(error.to_string());
    UpdateResult::none()
}

pub fn handle_request_delete_template(state: &mut AppState, id: u64) -> UpdateResult {
    if let Some(template) = state.templates.get(id) {
        state.confirm_dialog = Some(ConfirmDialogState::delete_confirmation(
            &format!("template {}", template.name),
            Message::DeleteTemplate { id },
        ));
    }
    UpdateResult::none()
}

pub fn handle_delete_template(state: &mut AppState, id: u64) -> UpdateResult {
    match state.templates.get(id) {
        Some(template) => UpdateResult::action(UpdateAction::DeleteTemplate {
            template: template.clone(),
        }),
        None => UpdateResult::none(),
    }
}

pub fn handle_template_deleted(state: &mut AppState, id: u64) -> UpdateResult {
    state.templates.remove(id);
    state.notifications.success("Template deleted");
    UpdateResult::none()
}

pub fn handle_template_delete_failed(
    state: &mut AppState,
    id: u64,
    error: ApiFailure,
) -> UpdateResult {
    warn!("Deleting template {} failed: {}", id, error);
    state.notifications.error(error.to_string());
    UpdateResult::none()
}

pub fn handle_submit_template(state: &mut AppState) -> UpdateResult {
    let Some(template) = state.template_edit.validate() else {
        return UpdateResult::none();
    };
    state.template_edit.submitting = true;
    UpdateResult::action(UpdateAction::SaveTemplate { template })
}

pub fn handle_template_saved(state: &mut AppState) -> UpdateResult {
    state.template_edit.submitting = false;
    state.notifications.success("Template saved");
    UpdateResult::message(Message::Back)
}

pub fn handle_template_save_failed(state: &mut AppState, error: ApiFailure) -> UpdateResult {
    state.template_edit.submitting = false;
    warn!("Saving template failed: {}", error);
    state.notifications.error(error.to_string());
    UpdateResult::none()
}
