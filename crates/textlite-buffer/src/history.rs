//! Bounded undo/redo history of edit deltas.
//!
//! ## Deltas Instead of Snapshots
//!
//! Only the changed text is stored. Undo applies the inverse of each delta,
//! redo applies the delta again, so the cost of a step is proportional to
//! the edit and never to the document.
//!
//! Deltas are collected in steps ([`EditGroup`]). A step is what one Undo
//! reverts: a single keystroke, a burst of adjacent keystrokes, or a
//! replacement recorded as delete plus insert.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default window in which adjacent keystrokes join the same step.
const MERGE_WINDOW: Duration = Duration::from_millis(300);

/// Whether a delta added or removed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Insert,
    Delete,
}

/// One change to the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub kind: EditKind,
    /// Char index the change starts at
    pub position: usize,
    /// Added or removed text
    pub content: String,
}

impl Edit {
    pub fn insert(position: usize, content: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Insert,
            position,
            content: content.into(),
        }
    }

    pub fn delete(position: usize, content: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Delete,
            position,
            content: content.into(),
        }
    }

    /// The delta that reverts this one.
    pub fn inverse(&self) -> Self {
        let kind = match self.kind {
            EditKind::Insert => EditKind::Delete,
            EditKind::Delete => EditKind::Insert,
        };
        Self {
            kind,
            ..self.clone()
        }
    }

    pub fn len_chars(&self) -> usize {
        self.content.chars().count()
    }

    fn ends(&self) -> usize {
        self.position + self.len_chars()
    }

    /// True if `next` continues this delta: typing forward, backspacing
    /// backward or deleting forward on the same line.
    pub fn can_merge(&self, next: &Edit) -> bool {
        let breaks_line = |e: &Edit| e.content.contains(['\n', '\r']);
        if self.kind != next.kind || breaks_line(self) || breaks_line(next) {
            return false;
        }
        match self.kind {
            EditKind::Insert => self.ends() == next.position,
            EditKind::Delete => next.ends() == self.position || next.position == self.position,
        }
    }

    /// Folds `next` into this delta. Only valid after [`Edit::can_merge`].
    pub fn merge(&mut self, next: Edit) {
        if self.kind == EditKind::Delete && next.position < self.position {
            // Backspace: the removed text grows to the left
            self.position = next.position;
            self.content.insert_str(0, &next.content);
        } else {
            self.content.push_str(&next.content);
        }
    }
}

/// One undo step.
#[derive(Debug, Clone)]
pub struct EditGroup {
    /// Deltas in the order they were applied
    pub edits: Vec<Edit>,
    /// Last time a keystroke joined this step; `None` once the step is
    /// closed to merging
    pub timestamp: Option<Instant>,
}

impl EditGroup {
    pub fn new(edit: Edit) -> Self {
        Self {
            edits: vec![edit],
            timestamp: Some(Instant::now()),
        }
    }

    fn closed(edits: Vec<Edit>) -> Self {
        Self {
            edits,
            timestamp: None,
        }
    }

    /// Merges `edit` into the step if it continues a recent keystroke.
    /// Gives the edit back otherwise.
    fn try_merge(&mut self, edit: Edit, window: Duration) -> Result<(), Edit> {
        let recent = self.timestamp.is_some_and(|t| t.elapsed() < window);
        match self.edits.as_mut_slice() {
            [only] if recent && only.can_merge(&edit) => {
                only.merge(edit);
                self.timestamp = Some(Instant::now());
                Ok(())
            }
            _ => Err(edit),
        }
    }
}

/// Where an explicit group stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    Off,
    /// `begin_group` was called but nothing was pushed yet
    Pending,
    /// Further pushes extend the newest step
    Open,
}

/// Undo and redo stacks with a fixed capacity in steps.
///
/// The oldest step is forgotten once the capacity is exceeded. Pushing a
/// new edit forgets everything that could have been redone.
#[derive(Debug, Clone)]
pub struct History {
    done: VecDeque<EditGroup>,
    undone: Vec<EditGroup>,
    capacity: usize,
    merge_window: Duration,
    grouping: Grouping,
}

impl History {
    /// A history holding at most `max_size` steps.
    pub fn new(max_size: usize) -> Self {
        Self::with_coalesce_threshold(max_size, MERGE_WINDOW)
    }

    /// Every push becomes its own step.
    pub fn without_coalescing(max_size: usize) -> Self {
        Self::with_coalesce_threshold(max_size, Duration::ZERO)
    }

    pub fn with_coalesce_threshold(max_size: usize, coalesce_threshold: Duration) -> Self {
        Self {
            done: VecDeque::new(),
            undone: Vec::new(),
            capacity: max_size.max(1),
            merge_window: coalesce_threshold,
            grouping: Grouping::Off,
        }
    }

    /// Records an applied edit.
    pub fn push(&mut self, edit: Edit) {
        self.undone.clear();

        let edit = match (self.grouping, self.done.back_mut()) {
            (Grouping::Open, Some(step)) => {
                step.edits.push(edit);
                return;
            }
            (Grouping::Off, Some(step)) => match step.try_merge(edit, self.merge_window) {
                Ok(()) => return,
                Err(edit) => edit,
            },
            _ => edit,
        };

        let step = if self.grouping == Grouping::Off {
            EditGroup::new(edit)
        } else {
            self.grouping = Grouping::Open;
            EditGroup::closed(vec![edit])
        };
        self.record(step);
    }

    /// Everything pushed until [`History::end_group`] undoes as one step.
    pub fn begin_group(&mut self) {
        self.grouping = Grouping::Pending;
    }

    pub fn end_group(&mut self) {
        self.grouping = Grouping::Off;
    }

    /// Takes the newest step off the undo stack.
    ///
    /// Edits come back in application order; revert them back to front.
    pub fn undo(&mut self) -> Option<EditGroup> {
        let step = self.done.pop_back()?;
        let step = EditGroup::closed(step.edits);
        self.undone.push(step.clone());
        Some(step)
    }

    /// Takes the newest undone step back onto the undo stack.
    pub fn redo(&mut self) -> Option<EditGroup> {
        let step = self.undone.pop()?;
        self.record(step.clone());
        Some(step)
    }

    fn record(&mut self, step: EditGroup) {
        self.done.push_back(step);
        if self.done.len() > self.capacity {
            self.done.pop_front();
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Forgets both stacks.
    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
        self.grouping = Grouping::Off;
    }

    pub fn undo_count(&self) -> usize {
        self.done.len()
    }

    pub fn redo_count(&self) -> usize {
        self.undone.len()
    }

    /// Capacity in steps.
    pub fn max_size(&self) -> usize {
        self.capacity
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merging() -> History {
        History::with_coalesce_threshold(100, Duration::from_secs(60))
    }

    #[test]
    fn test_inverse_swaps_kind_only() {
        let inverse = Edit::insert(4, "word").inverse();
        assert_eq!(inverse, Edit::delete(4, "word"));
        assert_eq!(inverse.inverse(), Edit::insert(4, "word"));
    }

    #[test]
    fn test_undo_then_redo_same_step() {
        let mut history = History::without_coalescing(100);
        history.push(Edit::insert(0, "x"));
        history.push(Edit::insert(1, "y"));

        let undone = history.undo().unwrap();
        assert_eq!(undone.edits, [Edit::insert(1, "y")]);
        assert_eq!((history.undo_count(), history.redo_count()), (1, 1));

        let redone = history.redo().unwrap();
        assert_eq!(redone.edits, undone.edits);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_typing_merges_into_one_step() {
        let mut history = merging();
        for (i, c) in ["t", "e", "x", "t"].into_iter().enumerate() {
            history.push(Edit::insert(i, c));
        }
        assert_eq!(history.undo_count(), 1);
        assert_eq!(history.undo().unwrap().edits[0].content, "text");
    }

    #[test]
    fn test_backspaces_merge_leftward() {
        let mut history = merging();
        history.push(Edit::delete(5, "o"));
        history.push(Edit::delete(4, "l"));
        history.push(Edit::delete(3, "l"));

        let step = history.undo().unwrap();
        assert_eq!(step.edits, [Edit::delete(3, "llo")]);
    }

    #[test]
    fn test_line_breaks_and_gaps_start_new_steps() {
        let mut history = merging();
        history.push(Edit::insert(0, "a"));
        history.push(Edit::insert(1, "\n"));
        history.push(Edit::insert(9, "b"));
        assert_eq!(history.undo_count(), 3);
    }

    #[test]
    fn test_group_is_one_step_and_never_merges() {
        let mut history = merging();
        history.begin_group();
        history.push(Edit::delete(0, "old"));
        history.push(Edit::insert(0, "new"));
        history.end_group();
        history.push(Edit::insert(3, "!"));

        assert_eq!(history.undo_count(), 2);
        history.undo();
        let group = history.undo().unwrap();
        assert_eq!(group.edits, [Edit::delete(0, "old"), Edit::insert(0, "new")]);
    }

    #[test]
    fn test_push_after_undo_forgets_redo() {
        let mut history = History::without_coalescing(100);
        history.push(Edit::insert(0, "a"));
        history.undo();
        assert!(history.can_redo());

        history.push(Edit::insert(0, "b"));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_redo_does_not_reopen_merging() {
        let mut history = merging();
        history.push(Edit::insert(0, "a"));
        history.undo();
        history.redo();
        history.push(Edit::insert(1, "b"));
        assert_eq!(history.undo_count(), 2);
    }

    #[test]
    fn test_oldest_steps_dropped_at_capacity() {
        let mut history = History::without_coalescing(3);
        for i in 0..5 {
            history.push(Edit::insert(i * 2, "x"));
        }
        assert_eq!(history.undo_count(), 3);
        assert_eq!(history.max_size(), 3);

        let positions: Vec<usize> = std::iter::from_fn(|| history.undo())
            .map(|step| step.edits[0].position)
            .collect();
        assert_eq!(positions, [8, 6, 4]);
    }
}
