//! Keyboard input, independent of the terminal library
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! the handlers here can be driven directly from tests.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character with Ctrl held
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
}

impl InputKey {
    /// Menu shortcut `1`..`4`, zero-based
    pub fn menu_index(&self) -> Option<usize> {
        match self {
            InputKey::Char(c @ '1'..='9') => Some(*c as usize - '1' as usize),
            _ => None,
        }
    }
}
