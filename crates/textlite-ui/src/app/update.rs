use std::sync::Arc;

use iced::widget::text_editor::{self, Action, Edit, Motion};
use iced::{Task, keyboard};
use textlite_buffer::Position;
use textlite_core::{Command, Key, KeyPress, Modifiers, Outcome};
use tracing::{debug, warn};

use super::{App, ColorPickerState, FontPickerState, Message, Modal};
use crate::fonts::SystemFonts;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Command(command) => {
                self.active_menu = None;
                return self.run_command(command);
            }

            Message::EditorAction(action) => {
                self.active_menu = None;
                self.perform(action);
            }

            Message::KeyPressed(key, modifiers) => {
                return self.handle_key_pressed(key, modifiers);
            }

            Message::ToggleTopMenu(index) => {
                self.active_menu = if self.active_menu == Some(index) {
                    None
                } else {
                    Some(index)
                };
            }

            Message::CloseTopMenu => {
                self.active_menu = None;
            }

            Message::OpenPath(path) => {
                if self.editor.open_path(&path, &mut self.dialogs) {
                    self.reload(Position::ZERO);
                }
            }

            Message::CloseRequested => {
                self.active_menu = None;
                self.modal = None;
                return self.run_command(Command::Exit);
            }

            Message::FontFamilySelected(index) => {
                if let Some(Modal::FontPicker(state)) = &mut self.modal {
                    state.picker.select_family(index);
                    state.preview_font = self.font_names.font(&state.picker.preview().family);
                }
            }

            Message::FontSizeSelected(index) => {
                if let Some(Modal::FontPicker(state)) = &mut self.modal {
                    state.picker.select_size(index);
                }
            }

            Message::ApplyFont => {
                if let Some(Modal::FontPicker(state)) = self.modal.take() {
                    let choice = state.picker.apply();
                    self.font = self.font_names.font(&choice.family);
                    self.editor.apply_font(choice);
                }
            }

            Message::ColorSwatchSelected(color) => {
                if let Some(Modal::ColorPicker(state)) = &mut self.modal {
                    state.select(color);
                }
            }

            Message::ColorInputChanged(input) => {
                if let Some(Modal::ColorPicker(state)) = &mut self.modal {
                    state.edit(input);
                }
            }

            Message::ApplyColor => {
                let picked = match &self.modal {
                    Some(Modal::ColorPicker(state)) => state.color(),
                    _ => None,
                };
                if let Some(color) = picked {
                    self.editor.set_font_color(color);
                    self.modal = None;
                }
            }

            Message::CloseModal => {
                self.modal = None;
            }
        }

        Task::none()
    }

    fn run_command(&mut self, command: Command) -> Task<Message> {
        let outcome = self.editor.execute(command, &mut self.dialogs);
        self.handle_outcome(outcome)
    }

    fn handle_outcome(&mut self, outcome: Outcome) -> Task<Message> {
        match outcome {
            Outcome::Handled => {}
            Outcome::Reload { cursor } => self.reload(cursor),
            Outcome::Widget(command) => self.widget_edit(command),
            Outcome::OpenFontPicker => self.open_font_picker(),
            Outcome::OpenColorPicker => {
                let current = self.editor.appearance().font_color();
                self.modal = Some(Modal::ColorPicker(ColorPickerState::new(current)));
            }
            Outcome::ShowReadme(text) => {
                self.modal = Some(Modal::Readme(text));
            }
            Outcome::Quit => return iced::exit(),
        }
        Task::none()
    }

    // ==================== Text Widget ====================

    /// Applies a widget action and hands any text change to the core.
    fn perform(&mut self, action: Action) {
        let is_edit = action.is_edit();
        self.content.perform(action);
        if is_edit {
            let lines: Vec<String> = self
                .content
                .lines()
                .map(|line| String::from(&*line))
                .collect();
            self.editor.sync_from_widget(&lines);
        }
        self.sync_cursor();
    }

    fn sync_cursor(&mut self) {
        let (line, byte_column) = self.content.cursor_position();
        let position = self
            .content
            .line(line)
            .map(|text| Position::from_byte_column(line, &text, byte_column))
            .unwrap_or(Position::new(line, 0));
        self.editor.set_cursor(position);
    }

    /// Rebuilds the widget from the core text after New, Open, Undo or Redo.
    fn reload(&mut self, cursor: Position) {
        self.content = text_editor::Content::with_text(&self.editor.document().widget_text());
        place_cursor(&mut self.content, cursor);
        self.sync_cursor();
    }

    /// Clipboard edits requested from the menu or an uncaptured accelerator.
    fn widget_edit(&mut self, command: Command) {
        match command {
            Command::Copy => {
                if let Some(selection) = self.content.selection() {
                    self.set_clipboard(selection);
                }
            }
            Command::Cut => {
                if let Some(selection) = self.content.selection() {
                    self.set_clipboard(selection);
                    self.perform(Action::Edit(Edit::Delete));
                }
            }
            Command::Paste => {
                if let Some(text) = self.clipboard_text() {
                    self.perform(Action::Edit(Edit::Paste(Arc::new(text))));
                }
            }
            Command::Delete => {
                if self.content.selection().is_some() {
                    self.perform(Action::Edit(Edit::Delete));
                }
            }
            Command::SelectAll => self.perform(Action::SelectAll),
            other => debug!("{:?} is not a widget edit", other),
        }
    }

    // ==================== Clipboard ====================

    fn clipboard(&mut self) -> Option<&mut arboard::Clipboard> {
        if self.clipboard.is_none() {
            match arboard::Clipboard::new() {
                Ok(clipboard) => self.clipboard = Some(clipboard),
                Err(err) => warn!("Clipboard unavailable: {}", err),
            }
        }
        self.clipboard.as_mut()
    }

    fn set_clipboard(&mut self, text: String) {
        if let Some(clipboard) = self.clipboard() {
            if let Err(err) = clipboard.set_text(text) {
                warn!("Failed to write clipboard: {}", err);
            }
        }
    }

    fn clipboard_text(&mut self) -> Option<String> {
        let clipboard = self.clipboard()?;
        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(err) => {
                debug!("Nothing to paste: {}", err);
                None
            }
        }
    }

    // ==================== Modals ====================

    fn open_font_picker(&mut self) {
        let catalog = self.system_fonts.get_or_insert_with(SystemFonts::load);
        let picker = self.editor.font_picker(&*catalog);
        let preview_font = self.font_names.font(&picker.preview().family);
        self.modal = Some(Modal::FontPicker(FontPickerState {
            picker,
            preview_font,
        }));
    }

    // ==================== Keyboard ====================

    /// Keys the text widget did not capture.
    pub fn handle_key_pressed(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        let Some(press) = key_press(&key, modifiers) else {
            return Task::none();
        };

        if press.key == Key::Escape {
            self.active_menu = None;
            self.modal = None;
            return Task::none();
        }

        if self.modal.is_some() {
            return Task::none();
        }

        match self.editor.keymap().lookup(&press) {
            Some(command) => {
                debug!("{} -> {:?}", press, command);
                self.active_menu = None;
                self.run_command(command)
            }
            None => Task::none(),
        }
    }
}

/// Converts an iced key event into a core key press.
pub fn key_press(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<KeyPress> {
    let key = match key {
        keyboard::Key::Character(c) => Key::Char(c.chars().next()?),
        keyboard::Key::Named(keyboard::key::Named::Escape) => Key::Escape,
        _ => return None,
    };
    let modifiers = Modifiers {
        ctrl: modifiers.control(),
        alt: modifiers.alt(),
        shift: modifiers.shift(),
        meta: modifiers.logo(),
    };
    Some(KeyPress::new(key, modifiers))
}

/// Moves the caret of freshly built content to `position`.
///
/// New content has no layout bounds yet, so vertical motions follow
/// logical lines rather than wrapped rows. `Right` moves by grapheme
/// cluster, not by char.
fn place_cursor(content: &mut text_editor::Content, position: Position) {
    let steps = content
        .line(position.line)
        .map_or(position.column, |line| position.grapheme_column(&line));

    content.perform(Action::Move(Motion::DocumentStart));
    for _ in 0..position.line {
        content.perform(Action::Move(Motion::Down));
    }
    for _ in 0..steps {
        content.perform(Action::Move(Motion::Right));
    }
}
