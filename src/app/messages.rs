/// All messages that can be sent through the FLTK channel.
/// Each menu/toolbar callback sends one of these; the dispatch loop in main
/// handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileQuit,
    WindowClose,

    // Edit
    EditUndo,
    EditRedo,

    // Tools
    OpenSettings,

    // Sent by the buffer modify callback so the title/status refresh
    BufferModified,
}
