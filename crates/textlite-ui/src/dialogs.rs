//! Native dialogs through rfd.
//!
//! rfd's synchronous dialogs block the update loop until answered, which is
//! what the unsaved-changes flow needs: a command either completes or is
//! cancelled before the next message is processed.

use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use textlite_core::document::APP_NAME;
use textlite_core::{DialogHost, FileFilter, PromptChoice};
use tracing::debug;

/// Native dialog host.
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdDialogs;

impl RfdDialogs {
    fn file_dialog(title: &str, filters: &[FileFilter]) -> FileDialog {
        filters
            .iter()
            .fold(FileDialog::new().set_title(title), |dialog, filter| {
                dialog.add_filter(filter.name, filter.extensions)
            })
    }

    fn message(level: MessageLevel, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl DialogHost for RfdDialogs {
    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        let path = Self::file_dialog("Open", filters).pick_file();
        debug!("Open dialog returned {:?}", path);
        path
    }

    fn pick_save_path(&mut self, filters: &[FileFilter], suggested_name: &str) -> Option<PathBuf> {
        let path = Self::file_dialog("Save As", filters)
            .set_file_name(suggested_name)
            .save_file();
        debug!("Save dialog returned {:?}", path);
        path
    }

    fn confirm_unsaved(&mut self, document_name: &str) -> PromptChoice {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(APP_NAME)
            .set_description(format!("Do you want to save changes to {document_name}?"))
            .set_buttons(MessageButtons::YesNoCancel)
            .show();

        prompt_choice(&result)
    }

    fn show_error(&mut self, title: &str, message: &str) {
        Self::message(MessageLevel::Error, title, message);
    }

    fn show_info(&mut self, title: &str, message: &str) {
        Self::message(MessageLevel::Info, title, message);
    }
}

/// Maps a Yes/No/Cancel answer. Closing the dialog counts as Cancel.
fn prompt_choice(result: &MessageDialogResult) -> PromptChoice {
    match result {
        MessageDialogResult::Yes => PromptChoice::Save,
        MessageDialogResult::No => PromptChoice::Discard,
        _ => PromptChoice::Cancel,
    }
}
