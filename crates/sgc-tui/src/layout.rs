//! Screen layout: side menu on the left, page content and key hints on the right

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the side menu, borders included
pub const SIDEBAR_WIDTH: u16 = 22;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub sidebar: Rect,
    pub content: Rect,
    /// One-line key hint bar under the content
    pub footer: Rect,
}

/// Split the screen; narrow terminals drop the side menu
pub fn create(area: Rect) -> ScreenAreas {
    let sidebar_width = if area.width >= SIDEBAR_WIDTH * 3 {
        SIDEBAR_WIDTH
    } else {
        0
    };
    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(10)]).areas(area);
    let [content, footer] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(main);

    ScreenAreas {
        sidebar,
        content,
        footer,
    }
}
