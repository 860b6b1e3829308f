//! # TextLite Buffer
//!
//! Rope-backed text buffer with a bounded undo/redo history.
//!
//! ## Key Concepts
//!
//! ### Ownership & Borrowing
//! - `TextBuffer` owns the rope and its edit history
//! - Methods like `text()` return borrowed views (`Cow<str>`)
//! - Mutations require `&mut self` (exclusive access)
//!
//! ### Edits as Values
//! - Every mutation is recorded as an `Edit` delta
//! - Undo applies the inverse delta, redo re-applies it
//! - Line terminators are stored byte-for-byte, never normalized

mod buffer;
mod cursor;
mod history;

pub use buffer::TextBuffer;
pub use cursor::Position;
pub use history::{Edit, EditGroup, EditKind, History};

pub type BufferResult<T> = Result<T, BufferError>;

/// Buffer failures. None of them change the buffer.
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("line {line}, column {column} is outside the buffer")]
    PositionOutOfBounds { line: usize, column: usize },

    #[error("char index {0} is past the end of the buffer")]
    InvalidCharIndex(usize),

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_buffer_is_clean() {
        for buffer in [TextBuffer::new(), TextBuffer::from("déjà vu")] {
            assert!(!buffer.is_modified());
            assert!(!buffer.can_undo());
        }
        assert_eq!(TextBuffer::from("déjà vu").len_chars(), 7);
    }

    #[test]
    fn test_edits_mark_modified_until_saved() {
        let mut buffer = TextBuffer::from("abc");
        buffer.insert(3, "def").unwrap();
        buffer.delete(0..1).unwrap();
        assert_eq!(buffer.text(), "bcdef");
        assert!(buffer.is_modified());

        buffer.mark_saved();
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_out_of_range_edits_are_rejected() {
        let mut buffer = TextBuffer::from("abc");
        assert!(matches!(buffer.insert(4, "x"), Err(BufferError::InvalidCharIndex(4))));
        assert!(buffer.delete(2..9).is_err());
        assert_eq!(buffer.text(), "abc");
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut buffer = TextBuffer::with_history(History::without_coalescing(10));
        buffer.insert(0, "one").unwrap();
        buffer.insert(3, " two").unwrap();

        assert_eq!(buffer.undo().unwrap(), 3);
        assert_eq!(buffer.text(), "one");
        assert_eq!(buffer.redo().unwrap(), 7);
        assert_eq!(buffer.text(), "one two");
    }

    #[test]
    fn test_mixed_terminators() {
        let buffer = TextBuffer::from("a\nb\r\nc\rd");
        assert_eq!(buffer.len_lines(), 4);
        assert_eq!(buffer.line(1).unwrap(), "b\r\n");
        let contents: Vec<String> = (0..4).map(|i| buffer.line_content(i).unwrap()).collect();
        assert_eq!(contents, ["a", "b", "c", "d"]);
    }
}
