//! Editor commands and the menu layout.
//!
//! ## Learning: The Command Pattern
//!
//! Commands are plain values. The menu bar, the keymap and the dispatcher
//! all speak `Command`, so a menu label can never point at a different
//! action than its accelerator.

/// Everything the user can ask the editor to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // File
    NewFile,
    OpenFile,
    Save,
    SaveAs,
    Exit,

    // Edit
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    Delete,
    SelectAll,

    // Format
    ToggleWordWrap,
    ChooseFont,
    ChooseFontColor,

    // View
    ZoomIn,
    ZoomOut,
    ToggleDarkMode,

    // Help
    About,
    License,
    Disclaimer,
    Copyright,
    Credits,
    Readme,
}

impl Command {
    /// Returns the command's menu label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Command::NewFile => "New",
            Command::OpenFile => "Open...",
            Command::Save => "Save",
            Command::SaveAs => "Save As...",
            Command::Exit => "Exit",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Cut => "Cut",
            Command::Copy => "Copy",
            Command::Paste => "Paste",
            Command::Delete => "Delete",
            Command::SelectAll => "Select All",
            Command::ToggleWordWrap => "Word Wrap",
            Command::ChooseFont => "Font...",
            Command::ChooseFontColor => "Font Color...",
            Command::ZoomIn => "Zoom In",
            Command::ZoomOut => "Zoom Out",
            Command::ToggleDarkMode => "Dark Mode",
            Command::About => "About",
            Command::License => "License",
            Command::Disclaimer => "Disclaimer",
            Command::Copyright => "Copyright",
            Command::Credits => "Credits",
            Command::Readme => "Readme",
        }
    }
}

/// One row of a dropdown menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Item(Command),
    Separator,
}

/// A top-level menu.
#[derive(Debug, Clone, Copy)]
pub struct Menu {
    pub title: &'static str,
    pub entries: &'static [MenuEntry],
}

use MenuEntry::{Item, Separator};

/// The menu bar, left to right.
pub const MENUS: &[Menu] = &[
    Menu {
        title: "File",
        entries: &[
            Item(Command::NewFile),
            Item(Command::OpenFile),
            Item(Command::Save),
            Item(Command::SaveAs),
            Separator,
            Item(Command::Exit),
        ],
    },
    Menu {
        title: "Edit",
        entries: &[
            Item(Command::Undo),
            Item(Command::Redo),
            Separator,
            Item(Command::Cut),
            Item(Command::Copy),
            Item(Command::Paste),
            Item(Command::Delete),
            Separator,
            Item(Command::SelectAll),
        ],
    },
    Menu {
        title: "Format",
        entries: &[
            Item(Command::ToggleWordWrap),
            Item(Command::ChooseFont),
            Item(Command::ChooseFontColor),
        ],
    },
    Menu {
        title: "View",
        entries: &[
            Item(Command::ZoomIn),
            Item(Command::ZoomOut),
            Separator,
            Item(Command::ToggleDarkMode),
        ],
    },
    Menu {
        title: "Help",
        entries: &[
            Item(Command::About),
            Item(Command::Readme),
            Separator,
            Item(Command::License),
            Item(Command::Copyright),
            Item(Command::Disclaimer),
            Item(Command::Credits),
        ],
    },
];
