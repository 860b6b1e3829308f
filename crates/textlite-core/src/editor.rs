//! Main editor orchestration.
//!
//! ## Learning: The Facade Pattern
//!
//! `Editor` is the one object the GUI talks to. It owns the document and
//! the appearance, runs the file workflow and turns every `Command` into an
//! `Outcome` that tells the view what, if anything, it must do next.
//!
//! Anything that needs an answer from the user goes through the
//! `DialogHost` passed into the call, so the whole workflow runs
//! synchronously and can be driven from tests.

use std::fs;
use std::path::{Path, PathBuf};

use textlite_buffer::Position;
use tracing::{debug, info, warn};

use crate::appearance::Appearance;
use crate::color::Rgb;
use crate::command::Command;
use crate::config::Config;
use crate::dialogs::{self, DialogHost, FILE_FILTERS, PromptChoice};
use crate::document::{Document, UNTITLED};
use crate::fonts::{FontCatalog, FontChoice, FontPicker};
use crate::help::HelpTopic;
use crate::keymap::Keymap;
use crate::status::StatusBar;
use crate::{CoreError, CoreResult};

/// What the view must do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed in place; redrawing is enough
    Handled,
    /// The document text was replaced or rewound; rebuild the text widget
    /// and put the caret at `cursor`
    Reload { cursor: Position },
    /// An edit the text widget performs itself
    Widget(Command),
    OpenFontPicker,
    OpenColorPicker,
    /// Show the readme contents in a read-only viewer
    ShowReadme(String),
    /// Close the application
    Quit,
}

/// The main editor state.
///
/// ## Thread Safety
///
/// `Editor` is owned by the UI thread and mutated only from its update
/// loop, one message at a time.
pub struct Editor {
    /// The open document
    document: Document,

    /// Font, colors, zoom and wrapping
    appearance: Appearance,

    /// Startup configuration
    config: Config,

    /// Key bindings
    keymap: Keymap,

    /// Transient status bar message
    status_message: Option<String>,

    /// Whether the editor should quit
    should_quit: bool,
}

impl Editor {
    /// Creates a new editor instance.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an editor with custom configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            document: Document::new(config.editor.undo_limit),
            appearance: Appearance::from_config(&config.ui, &config.editor),
            keymap: Keymap::new(),
            config,
            status_message: None,
            should_quit: false,
        }
    }

    // ==================== Dispatch ====================

    /// Runs a command.
    pub fn execute(&mut self, command: Command, dialogs: &mut dyn DialogHost) -> Outcome {
        debug!("Executing {:?}", command);

        match command {
            // File commands
            Command::NewFile => self.reload_if(|editor| editor.new_file(dialogs)),
            Command::OpenFile => self.reload_if(|editor| editor.open_file(dialogs)),
            Command::Save => {
                self.save(dialogs);
                Outcome::Handled
            }
            Command::SaveAs => {
                self.save_as(dialogs);
                Outcome::Handled
            }
            Command::Exit => {
                if self.exit(dialogs) {
                    Outcome::Quit
                } else {
                    Outcome::Handled
                }
            }

            // Edit commands
            Command::Undo => self.undo().map_or(Outcome::Handled, |cursor| Outcome::Reload { cursor }),
            Command::Redo => self.redo().map_or(Outcome::Handled, |cursor| Outcome::Reload { cursor }),
            Command::Cut
            | Command::Copy
            | Command::Paste
            | Command::Delete
            | Command::SelectAll => Outcome::Widget(command),

            // Format commands
            Command::ToggleWordWrap => {
                self.appearance.toggle_word_wrap();
                let state = if self.appearance.word_wrap() { "on" } else { "off" };
                self.set_status(format!("Word wrap {state}"));
                Outcome::Handled
            }
            Command::ChooseFont => Outcome::OpenFontPicker,
            Command::ChooseFontColor => Outcome::OpenColorPicker,

            // View commands
            Command::ZoomIn => {
                self.appearance.zoom_in();
                Outcome::Handled
            }
            Command::ZoomOut => {
                self.appearance.zoom_out();
                Outcome::Handled
            }
            Command::ToggleDarkMode => {
                self.appearance.toggle_dark_mode();
                Outcome::Handled
            }

            // Help commands
            Command::About => self.show_help(HelpTopic::About, dialogs),
            Command::License => self.show_help(HelpTopic::License, dialogs),
            Command::Disclaimer => self.show_help(HelpTopic::Disclaimer, dialogs),
            Command::Copyright => self.show_help(HelpTopic::Copyright, dialogs),
            Command::Credits => self.show_help(HelpTopic::Credits, dialogs),
            Command::Readme => match self.readme() {
                Ok(text) => Outcome::ShowReadme(text),
                Err(err) => {
                    self.report(dialogs, "Readme", &err);
                    Outcome::Handled
                }
            },
        }
    }

    fn reload_if(&mut self, op: impl FnOnce(&mut Self) -> bool) -> Outcome {
        if op(self) {
            Outcome::Reload {
                cursor: Position::ZERO,
            }
        } else {
            Outcome::Handled
        }
    }

    // ==================== File Operations ====================

    /// Starts a fresh untitled document. Returns false if the user cancelled.
    pub fn new_file(&mut self, dialogs: &mut dyn DialogHost) -> bool {
        if !self.ensure_saved(dialogs) {
            return false;
        }
        self.document = Document::new(self.config.editor.undo_limit);
        self.set_status("New document");
        info!("New document");
        true
    }

    /// Asks for a file and opens it. Returns true if a file was loaded.
    pub fn open_file(&mut self, dialogs: &mut dyn DialogHost) -> bool {
        if !self.ensure_saved(dialogs) {
            return false;
        }
        match dialogs.pick_open_path(FILE_FILTERS) {
            Some(path) => self.open_path(&path, dialogs),
            None => false,
        }
    }

    /// Opens `path` without prompting. On failure the current document is
    /// kept and the error is shown.
    pub fn open_path(&mut self, path: &Path, dialogs: &mut dyn DialogHost) -> bool {
        match Document::load(path, self.config.editor.undo_limit) {
            Ok(document) => {
                self.document = document;
                self.set_status(format!("Opened {}", self.document.display_name()));
                true
            }
            Err(err) => {
                self.report(dialogs, "Open", &err);
                false
            }
        }
    }

    /// Saves to the current path, or asks for one. Returns true on success.
    pub fn save(&mut self, dialogs: &mut dyn DialogHost) -> bool {
        match self.document.path().map(Path::to_path_buf) {
            Some(path) => self.write_to(&path, dialogs),
            None => self.save_as(dialogs),
        }
    }

    /// Asks for a path and saves there. Returns true on success.
    pub fn save_as(&mut self, dialogs: &mut dyn DialogHost) -> bool {
        let suggested = self.suggested_file_name();
        let Some(chosen) = dialogs.pick_save_path(FILE_FILTERS, &suggested) else {
            debug!("Save As cancelled");
            return false;
        };
        let path = dialogs::with_default_extension(&chosen, &self.config.files.default_extension);
        self.write_to(&path, dialogs)
    }

    /// Runs the exit flow. Returns true if the application should close.
    pub fn exit(&mut self, dialogs: &mut dyn DialogHost) -> bool {
        if self.ensure_saved(dialogs) {
            info!("Exiting");
            self.should_quit = true;
        }
        self.should_quit
    }

    /// The unsaved-changes prompt. Returns true when it is safe to drop the
    /// current document.
    ///
    /// A clean document never prompts. "Save" only continues if the save
    /// actually happened.
    pub fn ensure_saved(&mut self, dialogs: &mut dyn DialogHost) -> bool {
        if !self.document.is_modified() {
            return true;
        }
        let choice = dialogs.confirm_unsaved(&self.document.display_name());
        debug!("Unsaved changes prompt answered {:?}", choice);
        match choice {
            PromptChoice::Save => self.save(dialogs),
            PromptChoice::Discard => true,
            PromptChoice::Cancel => false,
        }
    }

    fn write_to(&mut self, path: &Path, dialogs: &mut dyn DialogHost) -> bool {
        match self.document.save_to(path) {
            Ok(()) => {
                self.set_status(format!("Saved {}", self.document.display_name()));
                true
            }
            Err(err) => {
                self.report(dialogs, "Save", &err);
                false
            }
        }
    }

    fn suggested_file_name(&self) -> String {
        match self.document.path() {
            Some(_) => self.document.display_name().into_owned(),
            None => format!("{}.{}", UNTITLED, self.config.files.default_extension),
        }
    }

    // ==================== Editing ====================

    /// Takes the text widget's lines after an edit.
    ///
    /// Returns the caret position if the text changed.
    pub fn sync_from_widget<S: AsRef<str>>(&mut self, lines: &[S]) -> Option<Position> {
        match self.document.sync_from_widget(lines) {
            Ok(position) => position,
            Err(err) => {
                warn!("Failed to sync widget edit: {}", err);
                None
            }
        }
    }

    /// Records the caret reported by the text widget.
    pub fn set_cursor(&mut self, position: Position) {
        self.document.set_cursor(position);
    }

    /// Undoes the last edit. Returns the caret, or `None` if there was
    /// nothing to undo.
    pub fn undo(&mut self) -> Option<Position> {
        self.rewind(Document::undo, "Nothing to undo")
    }

    /// Redoes the last undone edit.
    pub fn redo(&mut self) -> Option<Position> {
        self.rewind(Document::redo, "Nothing to redo")
    }

    fn rewind(
        &mut self,
        op: fn(&mut Document) -> CoreResult<Position>,
        empty_message: &str,
    ) -> Option<Position> {
        match op(&mut self.document) {
            Ok(position) => {
                self.status_message = None;
                Some(position)
            }
            Err(CoreError::Buffer(err)) => {
                debug!("{}", err);
                self.set_status(empty_message);
                None
            }
            Err(err) => {
                warn!("History step failed: {}", err);
                None
            }
        }
    }

    // ==================== Appearance ====================

    /// Opens the font picker on the current font.
    pub fn font_picker(&self, catalog: &dyn FontCatalog) -> FontPicker {
        FontPicker::open(
            catalog,
            self.appearance.font_family(),
            self.appearance.font_size(),
        )
    }

    /// Applies a font picker result.
    pub fn apply_font(&mut self, choice: FontChoice) {
        self.appearance.set_font(choice);
    }

    /// Applies a color picker result.
    pub fn set_font_color(&mut self, color: Rgb) {
        self.appearance.set_font_color(color);
    }

    // ==================== Help ====================

    fn show_help(&mut self, topic: HelpTopic, dialogs: &mut dyn DialogHost) -> Outcome {
        dialogs.show_info(topic.title(), topic.body());
        Outcome::Handled
    }

    /// Reads the readme from the configured path.
    pub fn readme(&self) -> CoreResult<String> {
        let path = &self.config.files.readme_path;
        fs::read_to_string(path).map_err(|source| CoreError::MissingReadme {
            path: path_for_message(path),
            source,
        })
    }

    // ==================== Queries ====================

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Window title.
    pub fn title(&self) -> String {
        self.document.title()
    }

    pub fn is_modified(&self) -> bool {
        self.document.is_modified()
    }

    /// Returns true once the exit flow has completed.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current status bar contents.
    pub fn status_bar(&self) -> StatusBar {
        StatusBar {
            position: self.document.cursor_position(),
            zoom_percent: self.appearance.zoom_percent(),
            line_ending: self.document.line_ending(),
            message: self.status_message.clone(),
        }
    }

    // ==================== Helpers ====================

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Logs a failure and shows it to the user. State is left as it was.
    fn report(&mut self, dialogs: &mut dyn DialogHost, title: &str, err: &CoreError) {
        warn!("{} failed: {}", title, err);
        self.set_status(format!("{title} failed"));
        dialogs.show_error(title, &err.to_string());
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

/// The readme error names the file the user is expected to have.
fn path_for_message(path: &Path) -> PathBuf {
    path.file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::FileFilter;

    /// Host that fails the test if any dialog is shown.
    struct NoDialogs;

    impl DialogHost for NoDialogs {
        fn pick_open_path(&mut self, _: &[FileFilter]) -> Option<PathBuf> {
            panic!("unexpected open dialog")
        }
        fn pick_save_path(&mut self, _: &[FileFilter], _: &str) -> Option<PathBuf> {
            panic!("unexpected save dialog")
        }
        fn confirm_unsaved(&mut self, _: &str) -> PromptChoice {
            panic!("unexpected prompt")
        }
        fn show_error(&mut self, _: &str, message: &str) {
            panic!("unexpected error: {message}")
        }
        fn show_info(&mut self, _: &str, _: &str) {}
    }

    #[test]
    fn test_clean_exit_does_not_prompt() {
        let mut editor = Editor::new();
        assert_eq!(editor.execute(Command::Exit, &mut NoDialogs), Outcome::Quit);
        assert!(editor.should_quit());
    }

    #[test]
    fn test_widget_commands_are_delegated() {
        let mut editor = Editor::new();
        for command in [Command::Cut, Command::Copy, Command::Paste, Command::SelectAll] {
            assert_eq!(editor.execute(command, &mut NoDialogs), Outcome::Widget(command));
        }
    }

    #[test]
    fn test_undo_with_empty_history() {
        let mut editor = Editor::new();
        assert_eq!(editor.execute(Command::Undo, &mut NoDialogs), Outcome::Handled);
        assert_eq!(
            editor.status_bar().message.as_deref(),
            Some("Nothing to undo")
        );
    }

    #[test]
    fn test_edit_then_undo_reloads_at_edit_site() {
        let mut editor = Editor::new();
        editor.sync_from_widget(&["abc"]);
        assert!(editor.is_modified());

        let outcome = editor.execute(Command::Undo, &mut NoDialogs);
        assert_eq!(outcome, Outcome::Reload { cursor: Position::ZERO });
        assert_eq!(editor.document().text(), "");
        assert!(editor.is_modified());
    }

    #[test]
    fn test_status_bar_tracks_cursor_and_zoom() {
        let mut editor = Editor::new();
        editor.sync_from_widget(&["one", "two"]);
        editor.set_cursor(Position::new(1, 2));
        editor.execute(Command::ZoomIn, &mut NoDialogs);

        let status = editor.status_bar();
        assert_eq!(status.position_label(), "Ln 2, Col 3");
        assert_eq!(status.zoom_percent, 118);
    }

    #[test]
    fn test_missing_readme_message() {
        let mut config = Config::default();
        config.files.readme_path = PathBuf::from("/definitely/not/here/Readme.txt");
        let editor = Editor::with_config(config);

        let err = editor.readme().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Readme.txt not found. There may be an error in your installation."
        );
    }
}
