//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use sgc_app::form::CheckIndicator;
use sgc_app::NotificationLevel;
use sgc_core::{CheckStatus, JobStatus};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn field_error() -> Style {
    Style::default().fg(palette::FIELD_ERROR)
}

/// "Black on Cyan" - used for the selected row and the focused menu entry
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn input_focused() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::INPUT_FOCUSED_BG)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Status mapping ---

/// Style of an account connectivity or job pattern status
pub fn check_status(status: CheckStatus) -> Style {
    match status {
        CheckStatus::Untested => text_muted(),
        CheckStatus::Verified => Style::default().fg(palette::STATUS_GREEN),
        CheckStatus::Failed => Style::default().fg(palette::STATUS_RED),
        CheckStatus::Testing => Style::default().fg(palette::STATUS_YELLOW),
    }
}

pub fn check_indicator(indicator: CheckIndicator) -> Style {
    match indicator {
        CheckIndicator::Idle => text_muted(),
        CheckIndicator::Checking => Style::default().fg(palette::STATUS_YELLOW),
        CheckIndicator::Verified => Style::default().fg(palette::STATUS_GREEN),
        CheckIndicator::Failed => Style::default().fg(palette::STATUS_RED),
    }
}

pub fn job_status(status: JobStatus) -> Style {
    match status {
        JobStatus::Running => Style::default()
            .fg(palette::STATUS_GREEN)
            .add_modifier(Modifier::BOLD),
        JobStatus::Stopped => text_muted(),
    }
}

/// Icon and style of a notification toast
pub fn notification(level: NotificationLevel) -> (&'static str, Style) {
    match level {
        NotificationLevel::Success => ("✓", Style::default().fg(palette::STATUS_GREEN)),
        NotificationLevel::Info => ("i", Style::default().fg(palette::STATUS_BLUE)),
        NotificationLevel::Warning => ("!", Style::default().fg(palette::STATUS_YELLOW)),
        NotificationLevel::Error => ("✗", Style::default().fg(palette::STATUS_RED)),
    }
}
