use std::path::{Path, PathBuf};

use super::prompts::{CloseChoice, DiscardChoice, FilePicker, PickMode, Prompter};
use super::surface::TextSurface;

/// Command handlers around one text surface and the path of the file it was
/// last loaded from or saved to.
///
/// The whole state machine runs off one boolean, the surface's own modified
/// flag; `current_path` is only meaningful after a successful load or save
/// and is never used to re-derive modified state.
pub struct Workspace<S: TextSurface> {
    surface: S,
    current_path: Option<PathBuf>,
}

impl<S: TextSurface> Workspace<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            current_path: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// New: clear the surface, guarded by a blocking yes/no prompt when
    /// there are unsaved edits.
    pub fn file_new(&mut self, prompts: &mut impl Prompter) {
        if self.surface.is_modified() {
            let choice = prompts.confirm_discard(
                "Changes are unsaved.\nAre you sure you want to clear the window of text?",
            );
            if choice == DiscardChoice::Discard {
                self.reset_surface();
            }
        } else {
            self.reset_surface();
        }
    }

    /// Content, modified flag, undo history and tracked path all reset.
    fn reset_surface(&mut self) {
        self.surface.clear_all();
        self.surface.discard_edits();
        self.surface.empty_undo_buffer();
        self.current_path = None;
    }

    /// Open: an advisory (never blocking) warning when there are unsaved
    /// edits, then the load chooser. A missing or unreadable file aborts
    /// with an error prompt and no state change.
    pub fn file_open<D>(&mut self, ui: &mut D)
    where
        D: Prompter + FilePicker,
    {
        if self.surface.is_modified() {
            ui.warn("There are unsaved changes at the moment.");
        }

        let Some(path) = ui.pick(PickMode::Load) else {
            return;
        };

        if !path.exists() {
            ui.error("Oops! That file couldn't be loaded.");
            return;
        }

        match self.surface.load_file(&path) {
            Ok(()) => self.current_path = Some(path),
            Err(e) => ui.error(&format!("Error opening file: {}", e)),
        }
    }

    /// Save: nothing to do when unmodified. With no tracked path yet this
    /// falls through to the Save-As flow.
    pub fn file_save<D>(&mut self, ui: &mut D)
    where
        D: Prompter + FilePicker,
    {
        if !self.surface.is_modified() {
            return;
        }

        match self.current_path.clone() {
            Some(path) => self.write_to(path, ui),
            None => self.file_save_as(ui),
        }
    }

    /// Save As: always ask for a path. A successful save also retargets
    /// `current_path`, so a later plain Save writes to the same place.
    pub fn file_save_as<D>(&mut self, ui: &mut D)
    where
        D: Prompter + FilePicker,
    {
        let Some(path) = ui.pick(PickMode::Save) else {
            return;
        };
        self.write_to(path, ui);
    }

    fn write_to(&mut self, path: PathBuf, prompts: &mut impl Prompter) {
        match self.surface.save_file(&path) {
            Ok(()) => {
                self.surface.discard_edits();
                self.current_path = Some(path);
            }
            Err(e) => prompts.error(&format!("Error saving file: {}", e)),
        }
    }

    pub fn undo(&mut self) {
        if self.surface.can_undo() {
            self.surface.undo();
        }
    }

    pub fn redo(&mut self) {
        if self.surface.can_redo() {
            self.surface.redo();
        }
    }

    /// Close guard. Returns `true` when the window may close. Choosing
    /// Save only lets the close through if the surface actually ends up
    /// clean (a cancelled save-as leaves it dirty and aborts the close).
    pub fn request_close<D>(&mut self, ui: &mut D) -> bool
    where
        D: Prompter + FilePicker,
    {
        if !self.surface.is_modified() {
            return true;
        }

        match ui.confirm_close("You have unsaved changes.") {
            CloseChoice::Save => {
                self.file_save(ui);
                !self.surface.is_modified()
            }
            CloseChoice::Discard => true,
            CloseChoice::Cancel => false,
        }
    }
}
