//! Labelled input form shared by the account, job and template editors

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sgc_app::form::FieldRow;

use super::fit_width;
use crate::theme::styles;

const LABEL_WIDTH: usize = 12;

pub struct FormView<'a> {
    title: String,
    rows: Vec<FieldRow<'a>>,
    /// Status lines under the fields (check results, hints)
    status: Vec<Line<'a>>,
}

impl<'a> FormView<'a> {
    pub fn new(title: impl Into<String>, rows: Vec<FieldRow<'a>>) -> Self {
        Self {
            title: title.into(),
            rows,
            status: Vec::new(),
        }
    }

    pub fn status_line(mut self, line: Line<'a>) -> Self {
        self.status.push(line);
        self
    }

    fn field_lines(row: &FieldRow<'a>, width: usize) -> Vec<Line<'a>> {
        let shown = if row.masked {
            "*".repeat(row.value.chars().count())
        } else {
            row.value.to_string()
        };
        let cursor = if row.focused { "▏" } else { "" };
        let value_width = width.saturating_sub(LABEL_WIDTH + 3);
        let value = fit_width(&format!("{}{}", shown, cursor), value_width);

        let marker = if row.focused { "› " } else { "  " };
        let label_style = if row.focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        let value_style = if row.focused {
            styles::input_focused()
        } else {
            styles::text_primary()
        };

        let mut spans = vec![
            Span::styled(marker, styles::accent()),
            Span::styled(format!("{:<LABEL_WIDTH$}", row.label), label_style),
            Span::styled(value, value_style),
        ];
        if row.value.is_empty() {
            if let Some(hint) = &row.hint {
                spans.push(Span::styled(format!(" {}", hint), styles::text_muted()));
            }
        }

        let mut lines = vec![Line::from(spans)];
        if let Some(error) = row.error {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(LABEL_WIDTH + 2)),
                Span::styled(error.to_string(), styles::field_error()),
            ]));
        }
        lines
    }
}

impl Widget for FormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(format!(" {} ", self.title), styles::accent_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let mut lines = Vec::new();
        for row in &self.rows {
            lines.extend(Self::field_lines(row, width));
            lines.push(Line::from(""));
        }
        lines.extend(self.status);

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use sgc_app::views::AccountEditState;
    use sgc_core::{Account, FieldError};

    #[test]
    fn test_masked_field_hides_value() {
        let mut form = AccountEditState::create();
        form.email.set("a@b.com");
        form.password.set("secret");

        let mut term = TestTerminal::new();
        term.render_widget(FormView::new("New Account", form.rows()), term.area());

        assert!(term.buffer_contains("New Account"));
        assert!(term.buffer_contains("a@b.com"));
        assert!(term.buffer_contains("******"));
        assert!(!term.buffer_contains("secret"));
    }

    #[test]
    fn test_field_error_is_shown_inline() {
        let mut form = AccountEditState::create();
        form.email.set("not-an-email");
        form.validate();
        assert_eq!(form.email.error, Some(FieldError::InvalidEmail));

        let mut term = TestTerminal::new();
        term.render_widget(FormView::new("New Account", form.rows()), term.area());
        assert!(term.buffer_contains(&FieldError::InvalidEmail.to_string()));
    }

    #[test]
    fn test_hint_shown_for_empty_field() {
        let form = AccountEditState::edit(&Account::new("me@gmail.com", ""));

        let mut term = TestTerminal::new();
        term.render_widget(FormView::new("Edit Account", form.rows()), term.area());
        assert!(term.buffer_contains("auto: smtp.gmail.com:587"));
    }

    #[test]
    fn test_status_lines_render_below_fields() {
        let form = AccountEditState::create();
        let view = FormView::new("New Account", form.rows())
            .status_line(Line::from("Connectivity: Verified"));

        let mut term = TestTerminal::new();
        term.render_widget(view, term.area());
        assert!(term.buffer_contains("Connectivity: Verified"));
    }
}
