//! Record list tables for the account, job and template pages

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};
use sgc_app::views::{AccountListState, JobListState, TemplateListState};
use sgc_core::PASSWORD_MASK;

use crate::theme::styles;

/// A titled table with one selected row and a loading/empty placeholder
pub struct RecordTable<'a> {
    title: String,
    header: Vec<&'static str>,
    widths: Vec<Constraint>,
    rows: Vec<Row<'a>>,
    selected: usize,
    loading: bool,
    empty_text: &'static str,
}

impl<'a> RecordTable<'a> {
    pub fn new(title: impl Into<String>, header: Vec<&'static str>, widths: Vec<Constraint>) -> Self {
        Self {
            title: title.into(),
            header,
            widths,
            rows: Vec::new(),
            selected: 0,
            loading: false,
            empty_text: "Nothing here yet",
        }
    }

    pub fn rows(mut self, rows: Vec<Row<'a>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn empty_text(mut self, text: &'static str) -> Self {
        self.empty_text = text;
        self
    }
}

impl Widget for RecordTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.loading {
            format!(" {} (loading...) ", self.title)
        } else {
            format!(" {} ({}) ", self.title, self.rows.len())
        };
        let block = styles::glass_block(true).title(Span::styled(title, styles::accent_bold()));

        if self.rows.is_empty() {
            let text = if self.loading {
                "Loading..."
            } else {
                self.empty_text
            };
            Paragraph::new(Line::from(Span::styled(text, styles::text_muted())))
                .block(block)
                .render(area, buf);
            return;
        }

        let header = Row::new(self.header).style(styles::accent().add_modifier(Modifier::BOLD));
        let table = Table::new(self.rows, self.widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .row_highlight_style(styles::focused_selected())
            .highlight_symbol("▶ ");
        let mut state = TableState::default().with_selected(Some(self.selected));
        StatefulWidget::render(table, area, buf, &mut state);
    }
}

/// Accounts: the stored credential is never shown, only a fixed mask
pub fn account_table(accounts: &AccountListState) -> RecordTable<'_> {
    let rows = accounts
        .accounts()
        .iter()
        .map(|account| {
            Row::new(vec![
                Cell::from(account.email.as_str()),
                Cell::from(PASSWORD_MASK).style(styles::text_muted()),
                Cell::from(account.host.as_str()),
                Cell::from(account.port_text()),
                Cell::from(account.status.label()).style(styles::check_status(account.status)),
            ])
        })
        .collect();

    RecordTable::new(
        "Accounts",
        vec!["Email", "Password", "SMTP host", "Port", "Status"],
        vec![
            Constraint::Percentage(32),
            Constraint::Length(9),
            Constraint::Percentage(28),
            Constraint::Length(6),
            Constraint::Min(11),
        ],
    )
    .rows(rows)
    .selected(accounts.list.selected)
    .loading(accounts.list.loading)
    .empty_text("No accounts, press n to create one")
}

pub fn job_table(jobs: &JobListState) -> RecordTable<'_> {
    let rows = jobs
        .jobs()
        .iter()
        .map(|job| {
            Row::new(vec![
                Cell::from(job.name.as_str()),
                Cell::from(job.cron.as_str()),
                Cell::from(job.url.as_str()),
                Cell::from(job.email.as_str()),
                Cell::from(job.pattern_status.label())
                    .style(styles::check_status(job.pattern_status)),
                Cell::from(job.status.label()).style(styles::job_status(job.status)),
            ])
        })
        .collect();

    RecordTable::new(
        "Jobs",
        vec!["Name", "Cron", "URL", "Notify", "Pattern", "Status"],
        vec![
            Constraint::Percentage(16),
            Constraint::Length(13),
            Constraint::Percentage(28),
            Constraint::Percentage(20),
            Constraint::Length(11),
            Constraint::Min(7),
        ],
    )
    .rows(rows)
    .selected(jobs.list.selected)
    .loading(jobs.list.loading)
    .empty_text("No jobs, press n to create one")
}

pub fn template_table(templates: &TemplateListState) -> RecordTable<'_> {
    let rows = templates
        .templates()
        .iter()
        .map(|template| {
            Row::new(vec![
                Cell::from(template.name.as_str()),
                Cell::from(template.cron.as_str()),
                Cell::from(template.pattern.as_str()),
                Cell::from(template.content.as_str()),
            ])
        })
        .collect();

    RecordTable::new(
        "Templates",
        vec!["Name", "Cron", "Pattern", "Content"],
        vec![
            Constraint::Percentage(20),
            Constraint::Length(13),
            Constraint::Percentage(35),
            Constraint::Min(10),
        ],
    )
    .rows(rows)
    .selected(templates.list.selected)
    .loading(templates.list.loading)
    .empty_text("No templates, press n to create one")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use sgc_api::test_utils::{account, job, template};
    use sgc_core::CheckStatus;

    #[test]
    fn test_account_table_masks_password() {
        let mut accounts = AccountListState::default();
        let mut stored = account(1, "a@b.com");
        stored.password = "hunter2".into();
        stored.status = CheckStatus::Verified;
        accounts.list.replace(vec![stored]);

        let mut term = TestTerminal::with_size(100, 8);
        term.render_widget(account_table(&accounts), term.area());

        assert!(term.buffer_contains("a@b.com"));
        assert!(term.buffer_contains(PASSWORD_MASK));
        assert!(!term.buffer_contains("hunter2"));
        assert!(term.buffer_contains("Available"));
    }

    #[test]
    fn test_empty_and_loading_placeholders() {
        let mut accounts = AccountListState::default();
        let mut term = TestTerminal::new();
        term.render_widget(account_table(&accounts), term.area());
        assert!(term.buffer_contains("No accounts"));

        accounts.list.loading = true;
        term.render_widget(account_table(&accounts), term.area());
        assert!(term.buffer_contains("Loading..."));
    }

    #[test]
    fn test_job_table_shows_run_status() {
        let mut jobs = JobListState::default();
        jobs.list.replace(vec![job(1, "price-watch")]);

        let mut term = TestTerminal::with_size(120, 8);
        term.render_widget(job_table(&jobs), term.area());

        assert!(term.buffer_contains("price-watch"));
        assert!(term.buffer_contains("Running"));
        assert!(term.buffer_contains("Jobs (1)"));
    }

    #[test]
    fn test_template_table_rows() {
        let mut templates = TemplateListState::default();
        templates
            .list
            .replace(vec![template(1, "daily"), template(2, "hourly")]);

        let mut term = TestTerminal::new();
        term.render_widget(template_table(&templates), term.area());

        assert!(term.buffer_contains("daily"));
        assert!(term.buffer_contains("hourly"));
        assert!(term.buffer_contains("▶"));
    }
}
