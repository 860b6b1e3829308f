use iced::widget::text_editor;
use iced::{Font, Subscription, Task, Theme, keyboard, window};

pub mod messages;
pub mod types;
pub mod update;
pub mod view;

pub use messages::*;
pub use types::*;

use textlite_core::Editor;
use tracing::info;

use crate::dialogs::RfdDialogs;
use crate::fonts::{FontNames, SystemFonts};
use crate::theme::Palette;

pub struct App {
    pub editor: Editor,
    /// Display copy of the document, owned by the text widget
    pub content: text_editor::Content,
    pub active_menu: Option<usize>,
    pub modal: Option<Modal>,
    /// Editing surface font
    pub font: Font,
    pub font_names: FontNames,
    /// Loaded the first time the font picker opens
    pub system_fonts: Option<SystemFonts>,
    pub clipboard: Option<arboard::Clipboard>,
    pub dialogs: RfdDialogs,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let editor = Editor::with_config(flags.config);
        let mut font_names = FontNames::new();
        let font = font_names.font(editor.appearance().font_family());
        let content = text_editor::Content::with_text(&editor.document().widget_text());

        let app = Self {
            editor,
            content,
            active_menu: None,
            modal: None,
            font,
            font_names,
            system_fonts: None,
            clipboard: None,
            dialogs: RfdDialogs,
        };

        let startup = match flags.file {
            Some(path) => {
                info!("Opening {} from the command line", path.display());
                Task::done(Message::OpenPath(path))
            }
            None => Task::none(),
        };

        (app, startup)
    }

    pub fn title(&self) -> String {
        self.editor.title()
    }

    pub fn theme(&self) -> Theme {
        Palette::iced_theme(self.editor.appearance().is_dark())
    }

    pub fn palette(&self) -> Palette {
        Palette::from_scheme(self.editor.appearance().scheme())
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = keyboard::on_key_press(|key, modifiers| {
            Some(Message::KeyPressed(key, modifiers))
        });
        let close_sub = window::close_requests().map(|_id| Message::CloseRequested);

        Subscription::batch([keyboard_sub, close_sub])
    }
}

pub fn run(flags: Flags) -> iced::Result {
    let size = iced::Size::new(
        flags.config.ui.window_width,
        flags.config.ui.window_height,
    );

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(size)
        .exit_on_close_request(false)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
