//! Transient notifications, stacked in the bottom-right corner

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use sgc_app::Notifications;

use super::fit_width;
use crate::theme::styles;

const MAX_WIDTH: u16 = 60;

pub struct Toasts<'a> {
    notifications: &'a Notifications,
}

impl<'a> Toasts<'a> {
    pub fn new(notifications: &'a Notifications) -> Self {
        Self { notifications }
    }
}

impl Widget for Toasts<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = self.notifications.len() as u16;
        if count == 0 || area.width < 4 || area.height < 3 {
            return;
        }

        let width = MAX_WIDTH.min(area.width.saturating_sub(2));
        let height = (count + 2).min(area.height);
        let toast_area = Rect::new(
            area.x + area.width - width - 1,
            area.y + area.height - height,
            width,
            height,
        );

        Clear.render(toast_area, buf);
        let block = styles::glass_block(false);
        let inner = block.inner(toast_area);
        block.render(toast_area, buf);

        let text_width = (inner.width as usize).saturating_sub(2);
        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (icon, style) = styles::notification(n.level);
                Line::from(vec![
                    Span::styled(format!("{} ", icon), style),
                    Span::styled(fit_width(&n.text, text_width), style),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_toasts_render_each_notification() {
        let mut notifications = Notifications::default();
        notifications.success("Account deleted");
        notifications.error("[message] m [reason] r");

        let mut term = TestTerminal::new();
        term.render_widget(Toasts::new(&notifications), term.area());

        assert!(term.buffer_contains("✓ Account deleted"));
        assert!(term.buffer_contains("✗ [message] m [reason] r"));
    }

    #[test]
    fn test_no_notifications_renders_nothing() {
        let notifications = Notifications::default();
        let mut term = TestTerminal::new();
        term.render_widget(Toasts::new(&notifications), term.area());
        assert!(!term.buffer_contains("─"));
    }
}
