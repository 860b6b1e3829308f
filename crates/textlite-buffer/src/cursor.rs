//! Caret positions.

use std::cmp::Ordering;
use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

/// A position in the text buffer (line and column).
///
/// Both line and column are 0-indexed. The column counts characters, not
/// bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed, in characters)
    pub column: usize,
}

impl Position {
    /// Position at the start of the document.
    pub const ZERO: Position = Position { line: 0, column: 0 };

    /// Creates a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Builds a position from a byte offset within `line_text`.
    ///
    /// Text widgets often report the caret as a byte index. An offset that
    /// falls inside a multi-byte character counts that character; one past
    /// the end clamps to the line length.
    pub fn from_byte_column(line: usize, line_text: &str, byte_column: usize) -> Self {
        let column = line_text
            .char_indices()
            .take_while(|(idx, _)| *idx < byte_column)
            .count();
        Self { line, column }
    }

    /// Grapheme clusters on `line_text` before this column.
    ///
    /// Text widgets step the caret one cluster at a time. A column inside a
    /// cluster counts that cluster.
    pub fn grapheme_column(&self, line_text: &str) -> usize {
        let byte = line_text
            .char_indices()
            .nth(self.column)
            .map_or(line_text.len(), |(idx, _)| idx);
        line_text[..byte].graphemes(true).count()
    }

    /// 1-based line number for display.
    pub fn display_line(&self) -> usize {
        self.line + 1
    }

    /// 1-based column number for display.
    pub fn display_column(&self) -> usize {
        self.column + 1
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.column.cmp(&other.column))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // User-facing output is 1-indexed
        write!(f, "{}:{}", self.display_line(), self.display_column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        let p1 = Position::new(1, 5);
        let p2 = Position::new(2, 3);
        let p3 = Position::new(1, 10);

        assert!(p1 < p2);
        assert!(p1 < p3);
        assert!(p3 < p2);
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Position::ZERO.to_string(), "1:1");
        assert_eq!(Position::new(4, 9).to_string(), "5:10");
    }

    #[test]
    fn test_from_byte_column_counts_chars() {
        // 'é' is two bytes
        let pos = Position::from_byte_column(0, "héllo", 3);
        assert_eq!(pos.column, 2);

        // Inside a multi-byte char
        let pos = Position::from_byte_column(0, "héllo", 2);
        assert_eq!(pos.column, 2);

        let pos = Position::from_byte_column(3, "ab", 99);
        assert_eq!(pos, Position::new(3, 2));
    }

    #[test]
    fn test_grapheme_column_skips_combining_marks() {
        // 'e' + U+0301 is one cluster of two chars
        let line = "e\u{301}x";
        assert_eq!(Position::new(0, 2).grapheme_column(line), 1);
        assert_eq!(Position::new(0, 3).grapheme_column(line), 2);
        assert_eq!(Position::new(0, 1).grapheme_column(line), 1);
        assert_eq!(Position::new(0, 9).grapheme_column("abc"), 3);
    }
}
