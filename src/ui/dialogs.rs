use std::path::PathBuf;

use fltk::dialog;

use super::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::app::prompts::{CloseChoice, DiscardChoice, FilePicker, PickMode, Prompter};

/// FLTK-backed prompts and file choosers. Built as a scoped local inside
/// each command handler invocation; the only state it carries across
/// invocations is the starting directory, borrowed from the caller.
pub struct NativeDialogs<'a> {
    start_dir: &'a mut Option<PathBuf>,
}

impl<'a> NativeDialogs<'a> {
    pub fn new(start_dir: &'a mut Option<PathBuf>) -> Self {
        Self { start_dir }
    }
}

impl Prompter for NativeDialogs<'_> {
    fn confirm_discard(&mut self, message: &str) -> DiscardChoice {
        match dialog::choice2_default(message, "Yes", "No", "") {
            Some(0) => DiscardChoice::Discard,
            _ => DiscardChoice::Keep,
        }
    }

    fn confirm_close(&mut self, message: &str) -> CloseChoice {
        match dialog::choice2_default(message, "Save", "Quit Without Saving", "Cancel") {
            Some(0) => CloseChoice::Save,
            Some(1) => CloseChoice::Discard,
            _ => CloseChoice::Cancel,
        }
    }

    fn warn(&mut self, message: &str) {
        dialog::message_default(message);
    }

    fn error(&mut self, message: &str) {
        dialog::alert_default(message);
    }
}

impl FilePicker for NativeDialogs<'_> {
    fn pick(&mut self, mode: PickMode) -> Option<PathBuf> {
        let path = match mode {
            PickMode::Load => native_open_dialog(self.start_dir.as_deref()),
            PickMode::Save => native_save_dialog(self.start_dir.as_deref()),
        }?;

        // Remember the parent directory for future open/save dialogs
        if let Some(parent) = path.parent() {
            *self.start_dir = Some(parent.to_path_buf());
        }
        Some(path)
    }
}
