use fltk::{app, enums::Event, prelude::*};

use tether::app::{AppSettings, AppState, Message};
use tether::ui::main_window::build_main_window;
use tether::ui::menu::build_menu;

fn main() {
    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();

    let mut widgets = build_main_window(&settings, &sender);
    build_menu(&mut widgets.menu, &sender);

    // Route the window-manager close button through the same guard as Quit
    widgets.wind.set_callback({
        let s = sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    widgets.wind.end();
    widgets.wind.show();
    let _ = widgets.text_editor.take_focus();

    let mut state = AppState::new(widgets, sender, settings);
    state.refresh_chrome();

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileNew => state.file_new(),
                Message::FileOpen => state.file_open(),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::EditUndo => state.undo(),
                Message::EditRedo => state.redo(),
                // Placeholder: there is no settings window yet
                Message::OpenSettings => {}
                Message::BufferModified => state.refresh_chrome(),
                Message::FileQuit | Message::WindowClose => {
                    if state.request_close() {
                        fltk_app.quit();
                    }
                }
            }
        }
    }
}
