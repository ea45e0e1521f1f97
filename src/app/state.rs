//! Application state types
//!
//! Everything the list screen needs besides the list itself: the current
//! input mode, the text being typed, the selected row and the status line.

use strum::{Display, EnumIter};

/// Which part of the screen owns the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum InputMode {
    /// Moving through the list and changing amounts
    #[default]
    #[strum(serialize = "LIST")]
    Browse,
    /// Typing into the "Add Item" field
    #[strum(serialize = "ADD")]
    Editing,
    /// Waiting for y/n before clearing the list
    #[strum(serialize = "CLEAR?")]
    ConfirmClear,
    /// Help overlay is open
    #[strum(serialize = "HELP")]
    Help,
}

/// Severity of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Screen state
#[derive(Debug, Clone)]
pub struct AppState {
    pub mode: InputMode,
    /// Contents of the "Add Item" field
    pub input: String,
    /// Selected row; always < list length when the list is non-empty
    pub selected: usize,
    pub status_message: String,
    pub status_kind: StatusKind,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: InputMode::Browse,
            input: String::new(),
            selected: 0,
            status_message: "Welcome! Press A to add an item, ? for help".to_string(),
            status_kind: StatusKind::Info,
            should_quit: false,
        }
    }
}

impl AppState {
    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status_kind = kind;
        self.status_message = message.into();
    }

    /// Keep the selection inside a list of `len` rows
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }
}
