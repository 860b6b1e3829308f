//! Scripted dialog host and widget model shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;

use textlite_core::{DialogHost, FileFilter, PromptChoice};

/// The lines an iced text editor reports after being built from `text`.
///
/// A terminator ends a line but does not open another one, so `"a\n"` is
/// one line and only an empty text is a single empty line.
pub fn shown_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    text.lines().map(String::from).collect()
}

/// Answers dialogs from queues and records everything it was asked.
///
/// A dialog with no scripted answer panics, so an unexpected prompt fails
/// the test.
#[derive(Default)]
pub struct ScriptedDialogs {
    pub open_paths: VecDeque<Option<PathBuf>>,
    pub save_paths: VecDeque<Option<PathBuf>>,
    pub prompts: VecDeque<PromptChoice>,
    pub prompted_for: Vec<String>,
    pub suggested_names: Vec<String>,
    pub errors: Vec<(String, String)>,
    pub infos: Vec<(String, String)>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(mut self, path: impl Into<PathBuf>) -> Self {
        self.open_paths.push_back(Some(path.into()));
        self
    }

    pub fn cancel_open(mut self) -> Self {
        self.open_paths.push_back(None);
        self
    }

    pub fn save_as(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_paths.push_back(Some(path.into()));
        self
    }

    pub fn cancel_save(mut self) -> Self {
        self.save_paths.push_back(None);
        self
    }

    pub fn answer(mut self, choice: PromptChoice) -> Self {
        self.prompts.push_back(choice);
        self
    }

    /// True once every scripted answer was consumed.
    pub fn exhausted(&self) -> bool {
        self.open_paths.is_empty() && self.save_paths.is_empty() && self.prompts.is_empty()
    }
}

impl DialogHost for ScriptedDialogs {
    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        assert!(filters.iter().any(|f| f.extensions.contains(&"txt")));
        self.open_paths
            .pop_front()
            .expect("unexpected open dialog")
    }

    fn pick_save_path(&mut self, _filters: &[FileFilter], suggested_name: &str) -> Option<PathBuf> {
        self.suggested_names.push(suggested_name.to_string());
        self.save_paths
            .pop_front()
            .expect("unexpected save dialog")
    }

    fn confirm_unsaved(&mut self, document_name: &str) -> PromptChoice {
        self.prompted_for.push(document_name.to_string());
        self.prompts.pop_front().expect("unexpected prompt")
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_string(), message.to_string()));
    }

    fn show_info(&mut self, title: &str, message: &str) {
        self.infos.push((title.to_string(), message.to_string()));
    }
}
