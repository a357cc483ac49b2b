//! Dialog seams. Handlers receive these per invocation instead of holding
//! dialog widgets as long-lived fields, so every prompt is a scoped local
//! released when the handler returns.

use std::path::PathBuf;

/// Answer to a blocking "discard unsaved changes?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardChoice {
    Discard,
    Keep,
}

/// Answer to the close guard prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseChoice {
    Save,
    Discard,
    Cancel,
}

/// Modal confirmation/notice dialogs.
pub trait Prompter {
    /// Blocking yes/no warning before a destructive action.
    fn confirm_discard(&mut self, message: &str) -> DiscardChoice;

    /// Three-way prompt shown when closing with unsaved changes.
    fn confirm_close(&mut self, message: &str) -> CloseChoice;

    /// One-button advisory warning. Never blocks the action that follows.
    fn warn(&mut self, message: &str);

    /// One-button error notice.
    fn error(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickMode {
    Load,
    Save,
}

/// Modal file chooser. `None` means the user cancelled.
pub trait FilePicker {
    fn pick(&mut self, mode: PickMode) -> Option<PathBuf>;
}
