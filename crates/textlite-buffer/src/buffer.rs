//! The rope-backed document text.
//!
//! ## Why a Rope?
//!
//! Typing in the middle of a large file costs O(log n) instead of shifting
//! every following byte, and line lookups do not rescan the text. That
//! matters here because every keystroke is diffed against the buffer.
//!
//! ## Borrowed Views
//!
//! ```rust,ignore
//! let text = buffer.text();   // Cow borrowing the rope
//! buffer.insert(0, "x");      // rejected while `text` is alive
//! let owned = text.into_owned();
//! ```

use ropey::Rope;
use std::borrow::Cow;
use std::ops::Range;

use crate::history::{Edit, EditKind, History};
use crate::{BufferError, BufferResult, Position};

/// A text buffer backed by a rope, with undo/redo.
///
/// Line terminators are kept exactly as inserted. `\n`, `\r\n` and a lone
/// `\r` all end a line.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// Exact file contents, terminators included
    rope: Rope,

    history: History,

    /// Whether the buffer changed since it was loaded or last saved
    modified: bool,

    /// The loaded text ended with a line break. A text widget does not show
    /// a line after it, and widget edits never reach it.
    closing_break: bool,
}

impl TextBuffer {
    /// Creates a new empty buffer.
    ///
    /// # Example
    /// ```
    /// use textlite_buffer::TextBuffer;
    ///
    /// let buffer = TextBuffer::new();
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_history(History::default())
    }

    /// Creates an empty buffer with a custom history.
    pub fn with_history(history: History) -> Self {
        Self {
            rope: Rope::new(),
            history,
            modified: false,
            closing_break: false,
        }
    }

    /// Replaces the whole content without recording history.
    ///
    /// Used for loading: the result is clean and has nothing to undo.
    pub fn reset(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.closing_break = text.ends_with(['\n', '\r']);
        self.history.clear();
        self.modified = false;
    }

    // ==================== Text Access ====================

    /// Returns the entire text content.
    ///
    /// Borrowed when the rope is a single chunk, allocated otherwise.
    #[inline]
    pub fn text(&self) -> Cow<'_, str> {
        self.rope.slice(..).into()
    }

    /// Returns a specific line (0-indexed), including its terminator.
    pub fn line(&self, line_idx: usize) -> BufferResult<Cow<'_, str>> {
        if line_idx >= self.len_lines() {
            return Err(BufferError::PositionOutOfBounds {
                line: line_idx,
                column: 0,
            });
        }
        Ok(self.rope.line(line_idx).into())
    }

    /// Returns a specific line without its terminator.
    pub fn line_content(&self, line_idx: usize) -> BufferResult<String> {
        let line = self.line(line_idx)?;
        Ok(strip_terminator(&line).to_string())
    }

    // ==================== Measurements ====================

    /// Returns true if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the number of characters (Unicode scalar values).
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns the number of bytes in the buffer.
    #[inline]
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Returns the number of lines in the buffer.
    ///
    /// An empty buffer has 1 line. A buffer ending with a terminator counts
    /// the empty line after it.
    #[inline]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Number of lines a text widget shows for this buffer.
    ///
    /// Same as [`TextBuffer::len_lines`] except that the empty line after
    /// the closing break of the loaded text is not counted: `"a\n"` shows
    /// one line.
    pub fn widget_line_count(&self) -> usize {
        let lines = self.len_lines();
        if self.closing_break && lines > 1 && self.rope.line(lines - 1).len_chars() == 0 {
            lines - 1
        } else {
            lines
        }
    }

    /// Lines as a text widget shows them, without terminators.
    pub fn widget_lines(&self) -> Vec<String> {
        (0..self.widget_line_count())
            .map(|i| self.line_content(i).unwrap_or_default())
            .collect()
    }

    /// Returns the length of a line in characters, excluding its terminator.
    pub fn line_len(&self, line_idx: usize) -> BufferResult<usize> {
        Ok(self.line_content(line_idx)?.chars().count())
    }

    // ==================== Mutations ====================

    /// Inserts text at a character index.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> BufferResult<()> {
        if char_idx > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(char_idx));
        }
        if text.is_empty() {
            return Ok(());
        }

        self.history.push(Edit::insert(char_idx, text));
        self.rope.insert(char_idx, text);
        self.modified = true;

        Ok(())
    }

    /// Deletes text in a character range, returning what was removed.
    pub fn delete(&mut self, range: Range<usize>) -> BufferResult<String> {
        if range.start > range.end || range.end > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(range.end));
        }
        if range.is_empty() {
            return Ok(String::new());
        }

        let deleted: String = self.rope.slice(range.clone()).into();
        self.history.push(Edit::delete(range.start, deleted.clone()));
        self.rope.remove(range);
        self.modified = true;

        Ok(deleted)
    }

    /// Replaces text in a range with new text, as one undo step.
    ///
    /// A pure insertion or deletion is recorded as a single edit, so it can
    /// coalesce with neighbouring keystrokes.
    pub fn replace(&mut self, range: Range<usize>, text: &str) -> BufferResult<String> {
        if range.start > range.end || range.end > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(range.end));
        }
        if range.is_empty() {
            return self.insert(range.start, text).map(|()| String::new());
        }
        if text.is_empty() {
            return self.delete(range);
        }

        self.history.begin_group();
        let result = self
            .delete(range.clone())
            .and_then(|deleted| self.insert(range.start, text).map(|()| deleted));
        self.history.end_group();
        result
    }

    /// Brings the buffer in line with a widget's view of the text.
    ///
    /// `lines` are the widget's lines without terminators, compared against
    /// [`TextBuffer::widget_lines`]. The single differing span is replaced,
    /// so untouched lines keep their original terminators and the closing
    /// break of the loaded text survives; newlines inside the replacement
    /// become `newline`.
    ///
    /// Returns the character index just past the replacement, or `None`
    /// when the buffer already matches.
    pub fn reconcile<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        newline: &str,
    ) -> BufferResult<Option<usize>> {
        let old: Vec<char> = self.normalized().chars().collect();
        let new: Vec<char> = join_lines(lines).chars().collect();
        if old == new {
            return Ok(None);
        }

        let prefix = old
            .iter()
            .zip(&new)
            .take_while(|(a, b)| a == b)
            .count();
        let max_suffix = old.len().min(new.len()) - prefix;
        let suffix = old
            .iter()
            .rev()
            .zip(new.iter().rev())
            .take(max_suffix)
            .take_while(|(a, b)| a == b)
            .count();

        let start = self.normalized_to_char_idx(prefix);
        let end = self.normalized_to_char_idx(old.len() - suffix);
        let inserted: String = new[prefix..new.len() - suffix]
            .iter()
            .collect::<String>()
            .replace('\n', newline);

        self.replace(start..end, &inserted)?;
        Ok(Some(start + inserted.chars().count()))
    }

    // ==================== Undo/Redo ====================

    /// Undoes the last edit group.
    ///
    /// Returns the character index where the cursor belongs afterwards.
    pub fn undo(&mut self) -> BufferResult<usize> {
        let group = self.history.undo().ok_or(BufferError::NothingToUndo)?;

        // Apply inverses back to front WITHOUT recording to history
        let mut cursor = 0;
        for edit in group.edits.iter().rev() {
            cursor = self.apply(&edit.inverse());
        }

        self.modified = true;
        Ok(cursor)
    }

    /// Redoes the last undone edit group.
    pub fn redo(&mut self) -> BufferResult<usize> {
        let group = self.history.redo().ok_or(BufferError::NothingToRedo)?;

        let mut cursor = 0;
        for edit in &group.edits {
            cursor = self.apply(edit);
        }

        self.modified = true;
        Ok(cursor)
    }

    /// Returns true if there are edits to undo.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns true if there are edits to redo.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Applies an edit without touching history, returning the cursor index.
    fn apply(&mut self, edit: &Edit) -> usize {
        let len = edit.len_chars();
        match edit.kind {
            EditKind::Insert => {
                self.rope.insert(edit.position, &edit.content);
                edit.position + len
            }
            EditKind::Delete => {
                self.rope.remove(edit.position..edit.position + len);
                edit.position
            }
        }
    }

    // ==================== Position Conversion ====================

    /// Converts a Position (line, column) to a character index.
    ///
    /// The column may sit at the end of the line's content, but not
    /// inside its terminator.
    pub fn position_to_char_idx(&self, pos: Position) -> BufferResult<usize> {
        let line_len = self
            .line_len(pos.line)
            .map_err(|_| BufferError::PositionOutOfBounds {
                line: pos.line,
                column: pos.column,
            })?;

        if pos.column > line_len {
            return Err(BufferError::PositionOutOfBounds {
                line: pos.line,
                column: pos.column,
            });
        }

        Ok(self.rope.line_to_char(pos.line) + pos.column)
    }

    /// Converts a character index to a Position (line, column).
    pub fn char_idx_to_position(&self, char_idx: usize) -> BufferResult<Position> {
        if char_idx > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(char_idx));
        }

        let line = self.rope.char_to_line(char_idx);
        let column = char_idx - self.rope.line_to_char(line);

        Ok(Position { line, column })
    }

    /// Returns the position just past the last character.
    pub fn end_position(&self) -> Position {
        let line = self.len_lines().saturating_sub(1);
        let column = self.line_len(line).unwrap_or(0);
        Position::new(line, column)
    }

    // ==================== State Queries ====================

    /// Returns true if the buffer has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Marks the current content as saved.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    // ==================== Helpers ====================

    /// The widget's lines joined with `\n`.
    fn normalized(&self) -> String {
        join_lines(&self.widget_lines())
    }

    /// Maps an offset in `normalized()` to a rope character index.
    fn normalized_to_char_idx(&self, offset: usize) -> usize {
        let mut consumed = 0;
        for line_idx in 0..self.widget_line_count() {
            let len = self.line_len(line_idx).unwrap_or(0);
            if offset <= consumed + len {
                return self.rope.line_to_char(line_idx) + (offset - consumed);
            }
            // One unit for the folded terminator
            consumed += len + 1;
        }
        self.len_chars()
    }
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}

fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut joined = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            joined.push('\n');
        }
        joined.push_str(line.as_ref());
    }
    joined
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        let mut buffer = Self::new();
        buffer.reset(s);
        buffer
    }
}

impl From<String> for TextBuffer {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn quiet_buffer(text: &str) -> TextBuffer {
        let mut buffer = TextBuffer::with_history(History::without_coalescing(100));
        buffer.reset(text);
        buffer
    }

    #[test]
    fn test_replace_is_one_undo_step() {
        let mut buffer = quiet_buffer("Hello World");
        buffer.replace(6..11, "Rust").unwrap();
        assert_eq!(buffer.text(), "Hello Rust");

        let cursor = buffer.undo().unwrap();
        assert_eq!(buffer.text(), "Hello World");
        assert_eq!(cursor, 11);
        assert!(!buffer.can_undo());
    }

    #[test]
    fn test_reconcile_append() {
        let mut buffer = quiet_buffer("Hello\nWorld");
        let cursor = buffer.reconcile(&["Hello", "World!"], "\n").unwrap();
        assert_eq!(cursor, Some(12));
        assert_eq!(buffer.text(), "Hello\nWorld!");
    }

    #[test]
    fn test_reconcile_no_change() {
        let mut buffer = quiet_buffer("a\r\nb");
        assert_eq!(buffer.reconcile(&["a", "b"], "\r\n").unwrap(), None);
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_reconcile_keeps_crlf() {
        let mut buffer = quiet_buffer("one\r\ntwo\r\nthree");
        buffer.reconcile(&["one", "2", "three"], "\r\n").unwrap();
        assert_eq!(buffer.text(), "one\r\n2\r\nthree");

        buffer.reconcile(&["one", "2", "", "three"], "\r\n").unwrap();
        assert_eq!(buffer.text(), "one\r\n2\r\n\r\nthree");
    }

    #[test]
    fn test_reconcile_joins_lines() {
        let mut buffer = quiet_buffer("ab\r\ncd");
        buffer.reconcile(&["abcd"], "\r\n").unwrap();
        assert_eq!(buffer.text(), "abcd");

        buffer.undo().unwrap();
        assert_eq!(buffer.text(), "ab\r\ncd");
    }

    #[test]
    fn test_trailing_newline_lines() {
        let buffer = TextBuffer::from("a\n");
        assert_eq!(buffer.len_lines(), 2);
        assert_eq!(buffer.line_content(1).unwrap(), "");
        assert_eq!(buffer.end_position(), Position::new(1, 0));
    }

    #[test]
    fn test_position_round_trip() {
        let buffer = TextBuffer::from("ab\r\ncde");
        let idx = buffer.position_to_char_idx(Position::new(1, 2)).unwrap();
        assert_eq!(idx, 6);
        assert_eq!(buffer.char_idx_to_position(idx).unwrap(), Position::new(1, 2));
        assert!(buffer.position_to_char_idx(Position::new(0, 3)).is_err());
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut buffer = TextBuffer::new();
        assert!(matches!(buffer.undo(), Err(BufferError::NothingToUndo)));
        assert!(matches!(buffer.redo(), Err(BufferError::NothingToRedo)));
    }

    #[test]
    fn test_widget_line_count() {
        for (text, count) in [("", 1), ("\n", 1), ("a", 1), ("a\n", 1), ("a\n\n", 2), ("a\r\nb\r", 2)] {
            assert_eq!(TextBuffer::from(text).widget_line_count(), count, "{text:?}");
        }
        assert_eq!(TextBuffer::from("a\n\rb").widget_lines(), ["a", "", "b"]);
    }

    #[test]
    fn test_reconcile_keeps_final_newline() {
        let mut buffer = quiet_buffer("Hello\nWorld\n");
        buffer.reconcile(&[">Hello", "World"], "\n").unwrap();
        assert_eq!(buffer.text(), ">Hello\nWorld\n");

        // One keystroke, one char of history
        buffer.undo().unwrap();
        assert_eq!(buffer.text(), "Hello\nWorld\n");
        assert_eq!(buffer.redo().unwrap(), 1);
    }

    #[test]
    fn test_reconcile_leaves_mixed_tail_alone() {
        let mut buffer = quiet_buffer("a\nb\r\nc\r");
        buffer.reconcile(&["ab", "b", "c"], "\n").unwrap();
        assert_eq!(buffer.text(), "ab\nb\r\nc\r");
    }

    #[test]
    fn test_reconcile_enter_at_end() {
        let mut buffer = quiet_buffer("a\n");
        buffer.reconcile(&["a", ""], "\n").unwrap();
        assert_eq!(buffer.text(), "a\n\n");
        assert_eq!(buffer.reconcile(&["a", ""], "\n").unwrap(), None);

        let mut buffer = quiet_buffer("a");
        buffer.reconcile(&["a", ""], "\n").unwrap();
        buffer.reconcile(&["a", "b"], "\n").unwrap();
        assert_eq!(buffer.text(), "a\nb");
    }

    #[test]
    fn test_emptied_widget_keeps_closing_break() {
        let mut buffer = quiet_buffer("a\nb\n");
        buffer.reconcile(&[""], "\n").unwrap();
        assert_eq!(buffer.text(), "\n");
        assert_eq!(buffer.widget_lines(), [""]);
    }

    proptest! {
        #[test]
        fn reconcile_matches_widget_lines(
            original in "[a-c\\n]{0,12}",
            edited in "[a-c\\n]{0,12}",
        ) {
            let mut buffer = quiet_buffer(&original);
            let shown = buffer.widget_lines();
            prop_assert_eq!(buffer.reconcile(&shown, "\n").unwrap(), None);

            let lines: Vec<&str> = edited.split('\n').collect();
            buffer.reconcile(&lines, "\n").unwrap();
            prop_assert_eq!(buffer.widget_lines(), lines);
            if original.ends_with('\n') {
                prop_assert!(buffer.text().ends_with('\n'));
            }

            if buffer.can_undo() {
                buffer.undo().unwrap();
                prop_assert_eq!(buffer.text().into_owned(), original);
            }
        }
    }
}
