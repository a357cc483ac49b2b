use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use fltk::app::Sender;
use fltk::text::TextBuffer;

use super::error::Result;
use super::messages::Message;

/// Capability interface over an editable text widget: content, a modified
/// flag, an undo/redo history, and file load/save primitives. The command
/// handlers in [`Workspace`](super::workspace::Workspace) only ever talk to
/// the widget through this trait.
pub trait TextSurface {
    /// True when the surface has unsaved edits since the last
    /// load/save/discard.
    fn is_modified(&self) -> bool;

    /// Remove all content.
    fn clear_all(&mut self);

    /// Clear the modified flag without touching content.
    fn discard_edits(&mut self);

    /// Drop the undo/redo history.
    fn empty_undo_buffer(&mut self);

    /// Replace content with the file's bytes and clear the modified flag.
    fn load_file(&mut self, path: &Path) -> Result<()>;

    /// Write content verbatim to `path`. Does not touch the modified flag;
    /// the caller decides when the surface counts as clean.
    fn save_file(&mut self, path: &Path) -> Result<()>;

    fn can_undo(&self) -> bool;
    fn can_redo(&self) -> bool;
    fn undo(&mut self);
    fn redo(&mut self);
}

/// FLTK-backed surface: a `TextBuffer` shared with the on-screen
/// `TextEditor`, plus a dirty flag driven by the buffer's modify callback.
pub struct EditorSurface {
    buffer: TextBuffer,
    dirty: Rc<Cell<bool>>,
}

impl EditorSurface {
    pub fn new(mut buffer: TextBuffer, sender: Sender<Message>) -> Self {
        let dirty = Rc::new(Cell::new(false));

        let changes = dirty.clone();
        buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                changes.set(true);
                sender.send(Message::BufferModified);
            }
        });

        Self { buffer, dirty }
    }
}

impl TextSurface for EditorSurface {
    fn is_modified(&self) -> bool {
        self.dirty.get()
    }

    fn clear_all(&mut self) {
        self.buffer.set_text("");
    }

    fn discard_edits(&mut self) {
        self.dirty.set(false);
    }

    fn empty_undo_buffer(&mut self) {
        // Toggling the flag drops FLTK's undo list.
        self.buffer.can_undo(false);
        self.buffer.can_undo(true);
    }

    fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)?;
        // set_text fires the modify callback, so reset the flag afterwards
        self.buffer.set_text(&content);
        self.dirty.set(false);
        Ok(())
    }

    fn save_file(&mut self, path: &Path) -> Result<()> {
        fs::write(path, self.buffer.text())?;
        Ok(())
    }

    fn can_undo(&self) -> bool {
        // fltk's getter takes &mut self; a TextBuffer clone is a shared
        // handle to the same underlying buffer.
        self.buffer.clone().get_can_undo()
    }

    fn can_redo(&self) -> bool {
        self.buffer.clone().can_redo()
    }

    fn undo(&mut self) {
        let _ = self.buffer.undo();
    }

    fn redo(&mut self) {
        let _ = self.buffer.redo();
    }
}
