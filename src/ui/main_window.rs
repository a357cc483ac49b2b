use fltk::{
    app::Sender,
    button::Button,
    enums::Align,
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use crate::app::messages::Message;
use crate::app::settings::AppSettings;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
    pub status_bar: Frame,
}

pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let width = settings.window_width.max(400);
    let height = settings.window_height.max(400);

    let mut wind = Window::new(0, 0, width, height, "Untitled - Tether").center_screen();
    wind.set_xclass("Tether");
    wind.size_range(400, 400, 0, 0);

    let mut flex = Flex::new(0, 0, width, height, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // Toolbar: same messages as the Edit menu
    let mut toolbar = Flex::default().row();
    let mut undo_button = Button::default().with_label("Undo");
    undo_button.set_tooltip("Undo operation");
    undo_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::EditUndo)
    });
    toolbar.fixed(&undo_button, 70);
    let mut redo_button = Button::default().with_label("Redo");
    redo_button.set_tooltip("Redo operation");
    redo_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::EditRedo)
    });
    toolbar.fixed(&redo_button, 70);
    let _filler = Frame::default();
    toolbar.end();
    flex.fixed(&toolbar, 32);

    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(buffer.clone());

    let mut status_bar = Frame::default().with_label("Ready");
    status_bar.set_align(Align::Inside | Align::Left);
    flex.fixed(&status_bar, 24);

    flex.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        menu,
        text_editor,
        buffer,
        status_bar,
    }
}
