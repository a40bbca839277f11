//! Side menu with the configured console title

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sgc_app::{Route, MENU};

use super::fit_width;
use crate::theme::styles;

pub struct Sidebar<'a> {
    title: &'a str,
    route: Route,
}

impl<'a> Sidebar<'a> {
    pub fn new(title: &'a str, route: Route) -> Self {
        Self { title, route }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 {
            return;
        }
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let mut lines = vec![
            Line::from(Span::styled(
                fit_width(self.title, width),
                styles::accent_bold(),
            )),
            Line::from(""),
        ];

        let active = self.route.menu_entry();
        for (index, entry) in MENU.iter().enumerate() {
            let label = fit_width(&format!(" {} {}", index + 1, entry.title()), width);
            let style = if *entry == active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            lines.push(Line::from(Span::styled(
                format!("{:<width$}", label, width = width),
                style,
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
