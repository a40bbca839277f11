//! Job create/edit form
//!
//! The notification account is chosen among the accounts fetched on mount,
//! and a stored template can be applied to fill cron, pattern and content.

use sgc_api::PatternProbe;
use sgc_core::validation::{validate_cron, validate_email, validate_http_url, validate_required};
use sgc_core::{Job, JobStatus, PatternStatus, Template};

use crate::form::{field_cycle, CheckIndicator, FieldRow, TextField};

field_cycle!(JobField {
    Name,
    Cron,
    Url,
    Pattern,
    Email,
    Content,
});

#[derive(Debug, Clone, Default)]
pub struct JobEditState {
    pub id: u64,
    /// Carried through an update unchanged
    pub entry_id: i64,
    pub old_value: String,
    pub status: JobStatus,
    pub pattern_status: PatternStatus,

    pub name: TextField,
    pub cron: TextField,
    pub url: TextField,
    pub pattern: TextField,
    pub email: TextField,
    pub content: TextField,
    pub focus: JobField,

    /// Emails of the accounts available for notifications
    pub account_emails: Vec<String>,
    pub templates: Vec<Template>,
    /// Template most recently applied
    pub applied_template: Option<usize>,

    pub pattern_check: CheckIndicator,
    /// Text the last successful pattern test matched
    pub matched: Option<String>,
    pub submitting: bool,
}

impl JobEditState {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(job: &Job) -> Self {
        Self {
            id: job.id,
            entry_id: job.entry_id,
            old_value: job.old_value.clone(),
            status: job.status,
            pattern_status: job.pattern_status,
            name: TextField::new(job.name.clone()),
            cron: TextField::new(job.cron.clone()),
            url: TextField::new(job.url.clone()),
            pattern: TextField::new(job.pattern.clone()),
            email: TextField::new(job.email.clone()),
            content: TextField::new(job.content.clone()),
            ..Self::default()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id != 0
    }

    pub fn field_mut(&mut self, field: JobField) -> &mut TextField {
        match field {
            JobField::Name => &mut self.name,
            JobField::Cron => &mut self.cron,
            JobField::Url => &mut self.url,
            JobField::Pattern => &mut self.pattern,
            JobField::Email => &mut self.email,
            JobField::Content => &mut self.content,
        }
    }

    /// The email field is a selection, not free text
    pub fn focus_accepts_text(&self) -> bool {
        self.focus != JobField::Email
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        self.field_mut(self.focus)
    }

    /// Install the account choices, defaulting the selection when empty
    pub fn set_accounts(&mut self, emails: Vec<String>) {
        if self.email.value.is_empty() {
            if let Some(first) = emails.first() {
                self.email.set(first.clone());
            }
        }
        self.account_emails = emails;
    }

    /// Move the email selection to the next/previous account
    pub fn cycle_email(&mut self, forward: bool) {
        let count = self.account_emails.len();
        if count == 0 {
            return;
        }
        let next = match self
            .account_emails
            .iter()
            .position(|e| *e == self.email.value)
        {
            Some(i) if forward => (i + 1) % count,
            Some(i) => (i + count - 1) % count,
            None => 0,
        };
        self.email.set(self.account_emails[next].clone());
    }

    /// Copy a template's cron, pattern and content into the form
    pub fn apply_template(&mut self, index: usize) -> Option<&Template> {
        let template = self.templates.get(index)?;
        self.cron.set(template.cron.clone());
        self.pattern.set(template.pattern.clone());
        self.content.set(template.content.clone());
        self.applied_template = Some(index);
        self.templates.get(index)
    }

    /// Index of the template after the one last applied
    pub fn next_template_index(&self) -> Option<usize> {
        if self.templates.is_empty() {
            return None;
        }
        Some(match self.applied_template {
            Some(i) => (i + 1) % self.templates.len(),
            None => 0,
        })
    }

    pub fn validate(&mut self) -> Option<Job> {
        let name = self
            .name
            .check(validate_required(&self.name.value, "a name").map(str::to_string));
        let cron = self.cron.check(validate_cron(&self.cron.value).map(str::to_string));
        let url = self.url.check(validate_http_url(&self.url.value).map(str::to_string));
        let pattern = self.checked_pattern();
        let email = self.email.check(validate_email(&self.email.value).map(str::to_string));
        let content = self
            .content
            .check(validate_required(&self.content.value, "the email content").map(str::to_string));

        Some(Job {
            id: self.id,
            name: name?,
            cron: cron?,
            entry_id: self.entry_id,
            url: url?,
            old_value: self.old_value.clone(),
            pattern: pattern?,
            pattern_status: self.pattern_status,
            email: email?,
            content: content?,
            status: self.status,
        })
    }

    /// Patterns are sent verbatim; surrounding whitespace can be significant
    fn checked_pattern(&mut self) -> Option<String> {
        let value = self.pattern.value.clone();
        self.pattern
            .check(validate_required(&value, "a pattern").map(|_| value.clone()))
    }

    /// Validate only what a pattern test needs
    pub fn probe(&mut self) -> Option<PatternProbe> {
        let url = self.url.check(validate_http_url(&self.url.value).map(str::to_string));
        let pattern = self.checked_pattern();
        Some(PatternProbe::regex(self.id, url?, pattern?))
    }

    pub fn rows(&self) -> Vec<FieldRow<'_>> {
        let email_hint = if self.account_emails.is_empty() {
            "no accounts loaded".to_string()
        } else {
            format!("←/→ to choose ({} accounts)", self.account_emails.len())
        };
        vec![
            FieldRow::new("Name", &self.name, self.focus == JobField::Name),
            FieldRow::new("Cron", &self.cron, self.focus == JobField::Cron)
                .hint("min hour day month weekday"),
            FieldRow::new("URL", &self.url, self.focus == JobField::Url),
            FieldRow::new("Pattern", &self.pattern, self.focus == JobField::Pattern)
                .hint("regular expression"),
            FieldRow::new("Notify", &self.email, self.focus == JobField::Email).hint(email_hint),
            FieldRow::new("Content", &self.content, self.focus == JobField::Content),
        ]
    }
}
