//! Confirmation prompt state

use crate::message::Message;

/// A modal question with a list of choices, each mapped to a message
#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
    pub selected: usize,
}

impl ConfirmDialogState {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
            selected: 0,
        }
    }

    /// Yes/No prompt preceding a destructive action
    pub fn delete_confirmation(what: &str, on_confirm: Message) -> Self {
        Self::new(
            "Confirm Delete",
            format!("Delete {}?", what),
            vec![("Delete", on_confirm), ("Cancel", Message::CancelConfirm)],
        )
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }

    pub fn selected_message(&self) -> Option<Message> {
        self.options.get(self.selected).map(|(_, msg)| msg.clone())
    }

    /// Message of the first (affirmative) option
    pub fn confirm_message(&self) -> Option<Message> {
        self.options.first().map(|(_, msg)| msg.clone())
    }
}
