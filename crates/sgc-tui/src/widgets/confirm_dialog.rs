//! Confirmation dialog widget for deletes and quitting

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::modal_overlay::centered_rect;
use super::ConfirmDialogState;
use crate::theme::styles;

/// Confirmation dialog widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    fn option_spans(&self) -> Vec<Span<'a>> {
        let mut spans = Vec::new();
        for (index, (label, _)) in self.state.options.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("   "));
            }
            let style = if index == self.state.selected {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", label), style));
        }
        spans
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(50, 8, area);
        Clear.render(modal_area, buf);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [_, message, _, buttons, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(styles::text_primary())
            .render(message, buf);

        Paragraph::new(Line::from(self.option_spans()))
            .alignment(Alignment::Center)
            .render(buttons, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("←/→", styles::keybinding()),
            Span::styled(" choose  ", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" confirm  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" cancel", styles::text_muted()),
        ]))
        .alignment(Alignment::Center)
        .render(hints, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use sgc_app::Message;

    #[test]
    fn test_delete_confirmation_renders() {
        let state =
            ConfirmDialogState::delete_confirmation("account a@b.com", Message::DeleteAccount { id: 1 });
        let mut term = TestTerminal::new();
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Confirm Delete"));
        assert!(term.buffer_contains("Delete account a@b.com?"));
        assert!(term.buffer_contains(" Delete "));
        assert!(term.buffer_contains(" Cancel "));
    }

    #[test]
    fn test_selected_option_is_highlighted() {
        let mut state = ConfirmDialogState::new(
            "Quit",
            "Quit the console?",
            vec![("Quit", Message::Quit), ("Cancel", Message::CancelConfirm)],
        );
        state.select_next();

        let mut term = TestTerminal::new();
        term.render_widget(ConfirmDialog::new(&state), term.area());

        let content = term.content();
        let row = content
            .lines()
            .find(|line| line.contains("Cancel"))
            .unwrap();
        let x = row.chars().position(|c| c == 'C').unwrap() as u16;
        let y = content
            .lines()
            .position(|line| line.contains("Cancel"))
            .unwrap() as u16;
        assert_eq!(term.buffer()[(x, y)].bg, crate::theme::palette::ACCENT);
    }
}
