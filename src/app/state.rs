use std::path::PathBuf;

use fltk::{app::Sender, frame::Frame, prelude::*, window::Window};

use super::messages::Message;
use super::settings::AppSettings;
use super::surface::{EditorSurface, TextSurface};
use super::text_ops::extract_filename;
use super::workspace::Workspace;
use crate::ui::dialogs::NativeDialogs;
use crate::ui::main_window::MainWidgets;

/// Main application coordinator: owns the workspace and the widgets whose
/// chrome (title, status line) tracks it. Each command handler builds its
/// dialogs as scoped locals, so nothing dialog-shaped outlives a handler.
pub struct AppState {
    pub workspace: Workspace<EditorSurface>,
    pub window: Window,
    pub status_bar: Frame,
    settings: AppSettings,
    /// Starting directory for the next open/save dialog.
    last_directory: Option<PathBuf>,
}

impl AppState {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>, settings: AppSettings) -> Self {
        let surface = EditorSurface::new(widgets.buffer.clone(), sender);
        let last_directory = settings.last_open_directory.clone();

        Self {
            workspace: Workspace::new(surface),
            window: widgets.wind,
            status_bar: widgets.status_bar,
            settings,
            last_directory,
        }
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        let mut ui = NativeDialogs::new(&mut self.last_directory);
        self.workspace.file_new(&mut ui);
        self.refresh_chrome();
    }

    pub fn file_open(&mut self) {
        let mut ui = NativeDialogs::new(&mut self.last_directory);
        self.workspace.file_open(&mut ui);
        self.refresh_chrome();
    }

    pub fn file_save(&mut self) {
        let mut ui = NativeDialogs::new(&mut self.last_directory);
        self.workspace.file_save(&mut ui);
        self.refresh_chrome();
    }

    pub fn file_save_as(&mut self) {
        let mut ui = NativeDialogs::new(&mut self.last_directory);
        self.workspace.file_save_as(&mut ui);
        self.refresh_chrome();
    }

    // --- Edit operations ---

    pub fn undo(&mut self) {
        self.workspace.undo();
    }

    pub fn redo(&mut self) {
        self.workspace.redo();
    }

    /// Handle a quit request. Returns `true` if the app should exit, in
    /// which case the settings have been persisted.
    pub fn request_close(&mut self) -> bool {
        let mut ui = NativeDialogs::new(&mut self.last_directory);
        let should_quit = self.workspace.request_close(&mut ui);

        if should_quit {
            self.settings.window_width = self.window.w();
            self.settings.window_height = self.window.h();
            self.settings.last_open_directory = self.last_directory.clone();
            if let Err(e) = self.settings.save() {
                eprintln!("Failed to save settings: {}", e);
            }
        }

        should_quit
    }

    /// Update the window title and status line from the workspace.
    pub fn refresh_chrome(&mut self) {
        let name = self
            .workspace
            .current_path()
            .map(|p| extract_filename(&p.to_string_lossy()))
            .unwrap_or_else(|| "Untitled".to_string());
        let marker = if self.workspace.surface().is_modified() {
            "*"
        } else {
            ""
        };
        self.window.set_label(&format!("{}{} - Tether", marker, name));

        let status = self
            .workspace
            .current_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Ready".to_string());
        self.status_bar.set_label(&status);
    }
}
