//! The document being edited.
//!
//! ## Learning: Composition over Inheritance
//!
//! `Document` composes a `TextBuffer` with what only a file-backed document
//! needs: a path, a line-ending convention and a caret.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use textlite_buffer::{History, Position, TextBuffer};
use tracing::{debug, info};

use crate::{CoreError, CoreResult};

/// Shown when no file is associated.
pub const UNTITLED: &str = "Untitled";

/// Application name used in window titles.
pub const APP_NAME: &str = "TextLite";

/// Line ending style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix-style: \n
    Lf,
    /// Windows-style: \r\n
    CrLf,
    /// Classic Mac: \r
    Cr,
}

impl LineEnding {
    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }

    /// Short label for the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            LineEnding::Lf => "Unix (LF)",
            LineEnding::CrLf => "Windows (CRLF)",
            LineEnding::Cr => "Macintosh (CR)",
        }
    }

    /// The convention of the platform we run on.
    pub fn platform() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    /// Detects the line ending from the first terminator in `text`.
    ///
    /// Returns `None` for text without any line break.
    pub fn detect(text: &str) -> Option<Self> {
        let idx = text.find(['\n', '\r'])?;
        let ending = match &text.as_bytes()[idx..] {
            [b'\r', b'\n', ..] => LineEnding::CrLf,
            [b'\r', ..] => LineEnding::Cr,
            _ => LineEnding::Lf,
        };
        Some(ending)
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::platform()
    }
}

/// A single text document, optionally backed by a file.
#[derive(Debug, Clone)]
pub struct Document {
    /// The underlying text buffer
    buffer: TextBuffer,

    /// File path (None for untitled documents)
    path: Option<PathBuf>,

    /// Terminator used for newly typed line breaks
    line_ending: LineEnding,

    /// Caret mirrored from the text widget
    cursor: Position,

    /// History capacity for this document
    undo_limit: usize,
}

impl Document {
    /// Creates a new empty, clean, untitled document.
    pub fn new(undo_limit: usize) -> Self {
        Self {
            buffer: TextBuffer::with_history(History::new(undo_limit)),
            path: None,
            line_ending: LineEnding::platform(),
            cursor: Position::ZERO,
            undo_limit,
        }
    }

    /// Creates an untitled document holding `text`, without history.
    pub fn from_text(text: &str, undo_limit: usize) -> Self {
        let mut doc = Self::new(undo_limit);
        doc.buffer.reset(text);
        doc.line_ending = LineEnding::detect(text).unwrap_or_else(LineEnding::platform);
        doc
    }

    /// Reads a UTF-8 file into a new, clean document.
    pub fn load(path: impl AsRef<Path>, undo_limit: usize) -> CoreResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| CoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| CoreError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let mut doc = Self::from_text(&text, undo_limit);
        doc.path = Some(path.to_path_buf());
        info!(
            "Loaded {} ({} lines, {:?})",
            path.display(),
            doc.buffer.len_lines(),
            doc.line_ending
        );
        Ok(doc)
    }

    /// Writes the text byte-for-byte to `path`, then adopts that path.
    ///
    /// The file is overwritten in place: a symlink keeps pointing at its
    /// target and an existing file keeps its permissions.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> CoreResult<()> {
        let path = path.as_ref();
        fs::write(path, self.buffer.text().as_bytes()).map_err(|source| CoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        self.path = Some(path.to_path_buf());
        self.buffer.mark_saved();
        info!("Saved {} ({} bytes)", path.display(), self.buffer.len_bytes());
        Ok(())
    }

    // ==================== Getters ====================

    /// Returns the file path.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// File name for prompts, or "Untitled".
    pub fn display_name(&self) -> Cow<'_, str> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy())
            .unwrap_or(Cow::Borrowed(UNTITLED))
    }

    /// Window title. Never reflects the dirty flag.
    pub fn title(&self) -> String {
        match &self.path {
            Some(path) => format!("{} - {}", APP_NAME, path.display()),
            None => format!("{} - {}", UNTITLED, APP_NAME),
        }
    }

    /// Returns true if the document has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.buffer.is_modified()
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Returns all text.
    pub fn text(&self) -> Cow<'_, str> {
        self.buffer.text()
    }

    /// The text a text widget is built from.
    ///
    /// The widget's lines joined with `\n`, closed by one more `\n` that the
    /// widget does not turn into a line.
    pub fn widget_text(&self) -> String {
        let mut text = self.buffer.widget_lines().join("\n");
        text.push('\n');
        text
    }

    pub fn cursor_position(&self) -> Position {
        self.cursor
    }

    // ==================== Editing ====================

    /// Records the caret reported by the text widget, clamped to the text.
    pub fn set_cursor(&mut self, position: Position) {
        self.cursor = self.clamp(position);
    }

    /// Takes the text widget's lines as the new content.
    ///
    /// Returns the caret after the change, or `None` if nothing changed.
    pub fn sync_from_widget<S: AsRef<str>>(&mut self, lines: &[S]) -> CoreResult<Option<Position>> {
        let Some(idx) = self.buffer.reconcile(lines, self.line_ending.as_str())? else {
            return Ok(None);
        };
        let position = self.buffer.char_idx_to_position(idx)?;
        self.cursor = position;
        debug!("Edit synced, caret at {}", position);
        Ok(Some(position))
    }

    /// Undoes the last edit, returning the caret at the edit site.
    pub fn undo(&mut self) -> CoreResult<Position> {
        let idx = self.buffer.undo()?;
        self.land_cursor(idx)
    }

    /// Redoes the last undone edit, returning the caret at the edit site.
    pub fn redo(&mut self) -> CoreResult<Position> {
        let idx = self.buffer.redo()?;
        self.land_cursor(idx)
    }

    pub fn can_undo(&self) -> bool {
        self.buffer.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.buffer.can_redo()
    }

    fn land_cursor(&mut self, idx: usize) -> CoreResult<Position> {
        let position = self.buffer.char_idx_to_position(idx)?;
        self.cursor = position;
        Ok(position)
    }

    fn clamp(&self, position: Position) -> Position {
        let last_line = self.buffer.len_lines().saturating_sub(1);
        let line = position.line.min(last_line);
        let len = self.buffer.line_len(line).unwrap_or(0);
        Position::new(line, position.column.min(len))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(1000)
    }
}
