//! Custom widget components

mod confirm_dialog;
mod form_view;
mod key_hints;
mod log_panel;
pub mod modal_overlay;
mod record_table;
mod sidebar;
mod toasts;

pub use confirm_dialog::ConfirmDialog;
pub use form_view::FormView;
pub use key_hints::KeyHints;
pub use log_panel::LogPanel;
pub use record_table::{account_table, job_table, template_table, RecordTable};
pub use sidebar::Sidebar;
pub use toasts::Toasts;

// Re-export state types from app layer (these are used by render/)
pub use sgc_app::confirm_dialog::ConfirmDialogState;
pub use sgc_app::views::LogViewState;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `width` terminal columns, marking the cut with `…`
pub(crate) fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
