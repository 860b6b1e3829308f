use std::path::PathBuf;

use iced::keyboard;
use iced::widget::text_editor;
use textlite_core::{Command, Rgb};

#[derive(Debug, Clone)]
pub enum Message {
    /// A menu entry or accelerator
    Command(Command),

    // Editor
    EditorAction(text_editor::Action),
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    // Menu bar, by index into the menu list
    ToggleTopMenu(usize),
    CloseTopMenu,

    // Window
    OpenPath(PathBuf),
    CloseRequested,

    // Font picker
    FontFamilySelected(usize),
    FontSizeSelected(usize),
    ApplyFont,

    // Color picker
    ColorSwatchSelected(Rgb),
    ColorInputChanged(String),
    ApplyColor,

    CloseModal,
}
