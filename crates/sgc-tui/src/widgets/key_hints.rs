//! One-line key hint bar for the current page

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sgc_app::Route;

use crate::theme::{palette, styles};

pub struct KeyHints {
    route: Route,
}

impl KeyHints {
    pub fn new(route: Route) -> Self {
        Self { route }
    }

    fn bindings(&self) -> &'static [(&'static str, &'static str)] {
        match self.route {
            Route::Accounts => &[
                ("n", "new"),
                ("e", "edit"),
                ("t", "test"),
                ("d", "delete"),
                ("r", "refresh"),
                ("1-4", "pages"),
                ("q", "quit"),
            ],
            Route::Jobs => &[
                ("n", "new"),
                ("e", "edit"),
                ("s", "start/stop"),
                ("d", "delete"),
                ("r", "refresh"),
                ("1-4", "pages"),
                ("q", "quit"),
            ],
            Route::Templates => &[
                ("n", "new"),
                ("e", "edit"),
                ("d", "delete"),
                ("r", "refresh"),
                ("1-4", "pages"),
                ("q", "quit"),
            ],
            Route::Logs => &[
                ("r", "reconnect"),
                ("c", "clear"),
                ("↑/↓", "scroll"),
                ("G", "follow"),
                ("1-4", "pages"),
                ("q", "quit"),
            ],
            Route::AccountEdit => &[
                ("Tab", "next field"),
                ("Enter", "save"),
                ("^T", "test connection"),
                ("Esc", "back"),
            ],
            Route::JobEdit => &[
                ("Tab", "next field"),
                ("←/→", "account"),
                ("^N", "template"),
                ("^T", "test pattern"),
                ("Enter", "save"),
                ("Esc", "back"),
            ],
            Route::TemplateEdit => &[
                ("Tab", "next field"),
                ("Enter", "save"),
                ("Esc", "back"),
            ],
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (key, action) in self.bindings() {
            spans.push(Span::styled(format!(" {}", key), styles::keybinding()));
            spans.push(Span::styled(format!(" {} ", action), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);
    }
}
