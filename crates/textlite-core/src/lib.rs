//! # TextLite Core
//!
//! Toolkit-agnostic editor logic: the document, the file workflow with its
//! unsaved-changes prompt, appearance state, commands and key bindings.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        Editor                        │
//! │  ┌────────────┐  ┌────────────┐  ┌────────────────┐  │
//! │  │  Document  │  │ Appearance │  │ Keymap / Menus │  │
//! │  └─────┬──────┘  └────────────┘  └────────────────┘  │
//! │        │                                             │
//! │  ┌─────┴──────┐        ┌──────────────────────────┐  │
//! │  │ TextBuffer │        │ DialogHost (injected)    │  │
//! │  └────────────┘        └──────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The GUI owns one `Editor` and hands it a `DialogHost` whenever a
//! command may need to ask the user something. Tests script that host.

pub mod appearance;
pub mod color;
pub mod command;
pub mod config;
pub mod dialogs;
pub mod document;
pub mod editor;
pub mod fonts;
pub mod help;
pub mod keymap;
pub mod status;

pub use appearance::{Appearance, ColorScheme};
pub use color::Rgb;
pub use command::{Command, Menu, MenuEntry};
pub use config::Config;
pub use dialogs::{DialogHost, FileFilter, PromptChoice};
pub use document::{Document, LineEnding};
pub use editor::{Editor, Outcome};
pub use fonts::{FontCatalog, FontChoice, FontPicker};
pub use help::HelpTopic;
pub use keymap::{Key, KeyPress, Keymap, Modifiers};
pub use status::StatusBar;

use std::path::PathBuf;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Cannot open {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot save {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 text: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("{} not found. There may be an error in your installation.", path.display())]
    MissingReadme {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Buffer error: {0}")]
    Buffer(#[from] textlite_buffer::BufferError),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}
