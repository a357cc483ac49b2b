use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogType, NativeFileChooser};

pub fn native_open_dialog(start_dir: Option<&Path>) -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseFile, "Open File", start_dir)
}

pub fn native_save_dialog(start_dir: Option<&Path>) -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseSaveFile, "Save As", start_dir)
}

fn run_chooser(kind: FileDialogType, title: &str, start_dir: Option<&Path>) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    if let Some(dir) = start_dir {
        let _ = nfc.set_directory(&dir);
    }
    nfc.show(); // blocks until close

    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        // empty result means the user cancelled
        None
    } else {
        Some(filename)
    }
}
