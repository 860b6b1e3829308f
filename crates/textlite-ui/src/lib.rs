//! # TextLite UI
//!
//! The desktop window for TextLite, built on iced.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture:
//! - **Model**: [`App`] wraps the core `Editor` and the text widget content
//! - **Message**: everything the window can report
//! - **Update**: turns messages into core commands and widget actions
//! - **View**: draws the menu bar, the editing surface and the status bar
//!
//! The core rope is the source of truth. The iced text widget keeps its own
//! copy for display and hands every edit back to the core.

pub mod app;
pub mod dialogs;
pub mod fonts;
pub mod theme;

pub use app::{run, App, Flags};
