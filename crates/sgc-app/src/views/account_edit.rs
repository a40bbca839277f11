//! Account create/edit form
//!
//! The form is in edit mode when it was opened with a stored account
//! (`id != 0`). The stored password is never copied into the form, and
//! neither is the stored status: a saved account is always untested.

use sgc_core::validation::{validate_email, validate_host, validate_password, validate_port};
use sgc_core::{smtp_defaults, Account, AccountStatus, TestEmailRequest};

use crate::form::{field_cycle, CheckIndicator, FieldRow, TextField};

field_cycle!(AccountField {
    Email,
    Password,
    Host,
    Port,
});

#[derive(Debug, Clone, Default)]
pub struct AccountEditState {
    pub id: u64,
    pub email: TextField,
    pub password: TextField,
    pub host: TextField,
    pub port: TextField,
    pub focus: AccountField,
    pub connectivity: CheckIndicator,
    /// A save request is in flight
    pub submitting: bool,
}

impl AccountEditState {
    /// Empty form for a new account
    pub fn create() -> Self {
        Self::default()
    }

    /// Form prefilled from a stored account
    pub fn edit(account: &Account) -> Self {
        Self {
            id: account.id,
            email: TextField::new(account.email.clone()),
            password: TextField::default(),
            host: TextField::new(account.host.clone()),
            port: TextField::new(account.port_text()),
            ..Self::default()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id != 0
    }

    pub fn field_mut(&mut self, field: AccountField) -> &mut TextField {
        match field {
            AccountField::Email => &mut self.email,
            AccountField::Password => &mut self.password,
            AccountField::Host => &mut self.host,
            AccountField::Port => &mut self.port,
        }
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        self.field_mut(self.focus)
    }

    /// Validate every field, marking errors inline.
    ///
    /// Returns the record to send when all fields pass.
    pub fn validate(&mut self) -> Option<Account> {
        let email = self.email.check(validate_email(&self.email.value).map(str::to_string));
        let password = self
            .password
            .check(validate_password(&self.password.value).map(str::to_string));
        let host = self.host.check(validate_host(&self.host.value).map(str::to_string));
        let port = self.port.check(validate_port(&self.port.value));

        Some(Account {
            id: self.id,
            email: email?,
            password: password?,
            host: host?,
            port: port?.unwrap_or(0),
            status: AccountStatus::Untested,
        })
    }

    /// Connectivity request built from the raw field values.
    ///
    /// Nothing is validated here; the backend decides whether they work.
    /// A port that is not a number is sent as 0.
    pub fn test_request(&self) -> TestEmailRequest {
        TestEmailRequest {
            id: self.id,
            email: self.email.value.trim().to_string(),
            password: Some(self.password.value.clone()),
            host: self.host.value.trim().to_string(),
            port: self.port.value.trim().parse().unwrap_or(0),
        }
    }

    /// SMTP server the backend would derive when no host override is given
    pub fn smtp_hint(&self) -> Option<String> {
        if !self.host.value.trim().is_empty() {
            return None;
        }
        smtp_defaults(&self.email.value).map(|(host, port)| format!("auto: {}:{}", host, port))
    }

    pub fn rows(&self) -> Vec<FieldRow<'_>> {
        let mut host = FieldRow::new("SMTP host", &self.host, self.focus == AccountField::Host);
        if let Some(hint) = self.smtp_hint() {
            host = host.hint(hint);
        }
        vec![
            FieldRow::new("Email", &self.email, self.focus == AccountField::Email),
            FieldRow::new("Password", &self.password, self.focus == AccountField::Password)
                .masked(),
            host,
            FieldRow::new("SMTP port", &self.port, self.focus == AccountField::Port)
                .hint("1-65535, optional"),
        ]
    }
}
