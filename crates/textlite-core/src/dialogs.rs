//! Blocking user dialogs, abstracted for the editor.
//!
//! Every method blocks until the user answers, which gives modal
//! semantics without any callback plumbing in the file workflow.

use std::path::{Path, PathBuf};

/// Answer to the unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    /// Save first, then continue
    Save,
    /// Throw the changes away and continue
    Discard,
    /// Abort; also the answer when the prompt is dismissed
    Cancel,
}

/// A named group of extensions for file pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    /// Extensions without the dot; `*` matches everything
    pub extensions: &'static [&'static str],
}

/// Filters offered by both the open and save pickers.
pub const FILE_FILTERS: &[FileFilter] = &[
    FileFilter {
        name: "Text files",
        extensions: &["txt"],
    },
    FileFilter {
        name: "All files",
        extensions: &["*"],
    },
];

/// The dialogs the editor needs from its host.
pub trait DialogHost {
    /// Asks for an existing file to open.
    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;

    /// Asks where to save, proposing `suggested_name`.
    fn pick_save_path(&mut self, filters: &[FileFilter], suggested_name: &str) -> Option<PathBuf>;

    /// Asks whether to save changes to `document_name` before going on.
    fn confirm_unsaved(&mut self, document_name: &str) -> PromptChoice;

    /// Reports a failure.
    fn show_error(&mut self, title: &str, message: &str);

    /// Shows an informational message.
    fn show_info(&mut self, title: &str, message: &str);
}

/// Appends `.ext` to a path whose file name has no extension.
pub fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    if path.extension().is_some() || extension.is_empty() {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    }
}
