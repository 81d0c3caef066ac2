// File: formcraft/src/history.rs
// Purpose: Linear undo/redo over owned snapshots

use std::collections::VecDeque;

/// Linear undo/redo history.
///
/// Holds owned copies of every pushed snapshot and a cursor pointing at the
/// one currently shown. Pushing after an undo discards the redoable tail.
/// With a capacity set, the oldest snapshot is dropped once it is exceeded.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    cursor: Option<usize>,
    capacity: Option<usize>,
}

impl<T: Clone> History<T> {
    /// Unbounded history
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            capacity: None,
        }
    }

    /// History keeping at most `capacity` snapshots (0 = unbounded)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: (capacity > 0).then_some(capacity),
            ..Self::new()
        }
    }

    /// Record `snapshot` as the newest state
    pub fn push(&mut self, snapshot: T) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);
        self.entries.push_back(snapshot);

        if let Some(capacity) = self.capacity {
            while self.entries.len() > capacity {
                self.entries.pop_front();
            }
        }

        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step back; `None` when already at the oldest snapshot
    pub fn undo(&mut self) -> Option<&T> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                self.entries.get(c - 1)
            }
            _ => None,
        }
    }

    /// Step forward; `None` when already at the newest snapshot
    pub fn redo(&mut self) -> Option<&T> {
        match self.cursor {
            Some(c) if c + 1 < self.entries.len() => {
                self.cursor = Some(c + 1);
                self.entries.get(c + 1)
            }
            _ => None,
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.entries.len())
    }

    /// Index of the current snapshot, `None` while empty
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every snapshot, oldest first; the cursor is unaffected
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut()
    }
}

impl<T: Clone> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn history_of(items: &[i32]) -> History<i32> {
        let mut history = History::new();
        for item in items {
            history.push(*item);
        }
        history
    }

    #[test]
    fn test_empty_history() {
        let mut history: History<i32> = History::new();
        assert_eq!(history.cursor(), None);
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn test_push_moves_cursor_to_end() {
        let history = history_of(&[1, 2, 3]);
        assert_eq!(history.cursor(), Some(2));
        assert_eq!(history.current(), Some(&3));
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = history_of(&[1, 2]);
        assert_eq!(history.undo(), Some(&1));
        assert_eq!(history.redo(), Some(&2));
    }

    #[test]
    fn test_undo_stops_at_first_entry() {
        let mut history = history_of(&[1, 2]);
        history.undo();
        assert_eq!(history.undo(), None);
        assert_eq!(history.cursor(), Some(0));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_redo_stops_at_last_entry() {
        let mut history = history_of(&[1, 2]);
        assert_eq!(history.redo(), None);
        assert_eq!(history.cursor(), Some(1));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_push_after_undo_truncates_branch() {
        let mut history = history_of(&[1, 2, 3]);
        history.undo();
        history.undo();
        history.push(9);

        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), Some(&9));
        assert_eq!(history.redo(), None);
        assert_eq!(history.undo(), Some(&1));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = History::with_capacity(3);
        for item in 1..=5 {
            history.push(item);
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), Some(2));
        assert_eq!(history.undo(), Some(&4));
        assert_eq!(history.undo(), Some(&3));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn test_zero_capacity_is_unbounded() {
        let mut history = History::with_capacity(0);
        for item in 0..500 {
            history.push(item);
        }
        assert_eq!(history.len(), 500);
    }

    #[test]
    fn test_snapshots_are_independent_copies() {
        let mut fields = vec!["a".to_string()];
        let mut history = History::new();
        history.push(fields.clone());
        fields.push("b".to_string());
        history.push(fields.clone());

        assert_eq!(history.undo(), Some(&vec!["a".to_string()]));
    }

    #[test]
    fn test_iter_mut_edits_in_place() {
        let mut history = history_of(&[1, 2, 3]);
        history.undo();
        for entry in history.iter_mut() {
            *entry *= 10;
        }

        assert_eq!(history.current(), Some(&20));
        assert_eq!(history.redo(), Some(&30));
        assert_eq!(history.len(), 3);
    }
}
