//! Key event handlers for each page

use crate::input_key::InputKey;
use crate::message::Message;
use crate::route::{Route, MENU};
use crate::state::AppState;
use crate::views::JobField;

/// Convert key events to messages based on the current page
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.confirm_dialog.is_some() {
        return handle_key_confirm_dialog(key);
    }
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }
    match state.route {
        Route::Accounts => handle_key_accounts(state, key),
        Route::Jobs => handle_key_jobs(state, key),
        Route::Templates => handle_key_templates(state, key),
        Route::Logs => handle_key_logs(key),
        Route::AccountEdit | Route::JobEdit | Route::TemplateEdit => handle_key_editor(state, key),
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::ConfirmSelected),
        InputKey::Char('y' | 'Y') => Some(Message::ConfirmSelected),
        InputKey::Left | InputKey::BackTab | InputKey::Up => Some(Message::ConfirmPrevious),
        InputKey::Right | InputKey::Tab | InputKey::Down => Some(Message::ConfirmNext),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelConfirm),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Keys every non-editor page shares
fn handle_key_shell(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(index) = key.menu_index() {
        return MENU.get(index).map(|route| Message::Navigate(*route));
    }
    match key {
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::Tab => Some(Message::NextMenu),
        InputKey::BackTab => Some(Message::PreviousMenu),
        InputKey::Esc => Some(Message::Back),
        InputKey::Char('r') => Some(Message::Mount(state.route)),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        _ => None,
    }
}

fn handle_key_accounts(state: &AppState, key: InputKey) -> Option<Message> {
    let selected = state.accounts.list.selected();
    match key {
        InputKey::Char('n') => Some(Message::OpenAccountEditor { account: None }),
        InputKey::Enter | InputKey::Char('e') => selected.map(|a| Message::OpenAccountEditor {
            account: Some(a.clone()),
        }),
        InputKey::Char('t') => selected.map(|a| Message::TestAccount { id: a.id }),
        InputKey::Char('d') | InputKey::Delete => {
            selected.map(|a| Message::RequestDeleteAccount { id: a.id })
        }
        _ => handle_key_shell(state, key),
    }
}

fn handle_key_jobs(state: &AppState, key: InputKey) -> Option<Message> {
    let selected = state.jobs.list.selected();
    match key {
        InputKey::Char('n') => Some(Message::OpenJobEditor { job: None }),
        InputKey::Enter | InputKey::Char('e') => selected.map(|j| Message::OpenJobEditor {
            job: Some(j.clone()),
        }),
        InputKey::Char('s' | ' ') => selected.map(|j| Message::ToggleJob { id: j.id }),
        InputKey::Char('d') | InputKey::Delete => {
            selected.map(|j| Message::RequestDeleteJob { id: j.id })
        }
        _ => handle_key_shell(state, key),
    }
}

fn handle_key_templates(state: &AppState, key: InputKey) -> Option<Message> {
    let selected = state.templates.list.selected();
    match key {
        InputKey::Char('n') => Some(Message::OpenTemplateEditor { template: None }),
        InputKey::Enter | InputKey::Char('e') => selected.map(|t| Message::OpenTemplateEditor {
            template: Some(t.clone()),
        }),
        InputKey::Char('d') | InputKey::Delete => {
            selected.map(|t| Message::RequestDeleteTemplate { id: t.id })
        }
        _ => handle_key_shell(state, key),
    }
}

fn handle_key_logs(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('r') => Some(Message::ReconnectLog),
        InputKey::Char('c') => Some(Message::ClearLog),
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollLogUp(1)),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollLogDown(1)),
        InputKey::PageUp => Some(Message::ScrollLogUp(10)),
        InputKey::PageDown => Some(Message::ScrollLogDown(10)),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollLogToBottom),
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::Tab => Some(Message::NextMenu),
        InputKey::BackTab => Some(Message::PreviousMenu),
        InputKey::Esc => Some(Message::Back),
        other => other
            .menu_index()
            .and_then(|index| MENU.get(index))
            .map(|route| Message::Navigate(*route)),
    }
}

/// Printable keys type into the focused field; Ctrl chords run commands
fn handle_key_editor(state: &AppState, key: InputKey) -> Option<Message> {
    let submit = match state.route {
        Route::AccountEdit => Message::SubmitAccount,
        Route::JobEdit => Message::SubmitJob,
        _ => Message::SubmitTemplate,
    };
    match key {
        InputKey::Esc => Some(Message::Back),
        InputKey::Enter | InputKey::CharCtrl('s') => Some(submit),
        InputKey::Tab | InputKey::Down => Some(Message::FormNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FormPreviousField),
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::CharCtrl('t') => match state.route {
            Route::AccountEdit => Some(Message::TestConnectivity),
            Route::JobEdit => Some(Message::TestPattern),
            _ => None,
        },
        InputKey::CharCtrl('n') if state.route == Route::JobEdit => {
            Some(Message::ApplyNextTemplate)
        }
        InputKey::Left | InputKey::Right
            if state.route == Route::JobEdit && state.job_edit.focus == JobField::Email =>
        {
            Some(Message::CycleJobEmail {
                forward: key == InputKey::Right,
            })
        }
        InputKey::Char(c) => Some(Message::FormInput(c)),
        _ => None,
    }
}
