//! Live backend log panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sgc_app::views::{LogStreamStatus, LogViewState};

use super::fit_width;
use crate::theme::{palette, styles};

pub struct LogPanel<'a> {
    state: &'a LogViewState,
}

impl<'a> LogPanel<'a> {
    pub fn new(state: &'a LogViewState) -> Self {
        Self { state }
    }

    fn status_span(&self) -> Span<'static> {
        let color = match self.state.status {
            LogStreamStatus::Idle => palette::TEXT_MUTED,
            LogStreamStatus::Connecting => palette::STATUS_YELLOW,
            LogStreamStatus::Streaming => palette::STATUS_GREEN,
            LogStreamStatus::Closed { .. } => palette::STATUS_RED,
        };
        Span::styled(
            format!(" {} ", self.state.status.label()),
            Style::default().fg(color),
        )
    }
}

impl Widget for LogPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let usage = format!(
            " {}/{} chars ",
            self.state.total_chars(),
            self.state.max_chars()
        );
        let block = styles::glass_block(true)
            .title(Line::from(vec![
                Span::styled(" Logs ", styles::accent_bold()),
                self.status_span(),
            ]))
            .title_bottom(Line::from(Span::styled(usage, styles::text_muted())).right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.state.line_count() == 0 {
            let text = if self.state.status.is_open() {
                "Waiting for log output..."
            } else {
                "No log output, press r to reconnect"
            };
            Paragraph::new(Span::styled(text, styles::text_muted())).render(inner, buf);
            return;
        }

        // Newest lines at the bottom, `scroll_offset` lines up from the end
        let height = inner.height as usize;
        let total = self.state.line_count();
        let end = total - self.state.scroll_offset.min(total);
        let start = end.saturating_sub(height);
        let width = inner.width as usize;

        let lines: Vec<Line> = self
            .state
            .lines()
            .skip(start)
            .take(end - start)
            .map(|line| Line::from(Span::styled(fit_width(line, width), styles::text_primary())))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn filled(count: usize) -> LogViewState {
        let mut state = LogViewState::new(20480);
        for i in 0..count {
            state.push_line(&format!("line {:02}", i));
        }
        state
    }

    #[test]
    fn test_follows_newest_lines() {
        let state = filled(30);
        let mut term = TestTerminal::new();
        term.render_widget(LogPanel::new(&state), term.area());

        assert!(term.buffer_contains("line 29"));
        assert!(!term.buffer_contains("line 00"));
    }

    #[test]
    fn test_scroll_offset_shows_older_lines() {
        let mut state = filled(30);
        state.scroll_up(25);
        let mut term = TestTerminal::new();
        term.render_widget(LogPanel::new(&state), term.area());

        assert!(term.buffer_contains("line 00"));
        assert!(!term.buffer_contains("line 29"));
    }

    #[test]
    fn test_status_and_usage_in_border() {
        let mut state = LogViewState::new(100);
        state.begin_connect();
        state.status = LogStreamStatus::Closed {
            reason: Some("connection refused".into()),
        };
        state.push_line("hello");

        let mut term = TestTerminal::new();
        term.render_widget(LogPanel::new(&state), term.area());
        assert!(term.buffer_contains("Closed: connection refused"));
        assert!(term.buffer_contains("5/100 chars"));
    }

    #[test]
    fn test_empty_log_placeholder() {
        let mut state = LogViewState::new(100);
        state.begin_connect();
        let mut term = TestTerminal::new();
        term.render_widget(LogPanel::new(&state), term.area());
        assert!(term.buffer_contains("Waiting for log output"));
    }
}
