/// How many edits the undo stack retains before the oldest becomes
/// non-undoable.
pub const DEFAULT_MAX_UNDO: usize = 100;

/// A single replayable edit, stored as the *inverse* of the mutation that
/// produced it. Replaying the record via [`crate::buffer::Buffer::apply`]
/// undoes the original edit; the inverse returned by that replay redoes it.
///
/// Storing inverses keeps memory proportional to edit size rather than
/// document size — no full-buffer snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditRecord {
    Insert {
        /// Character offset at which `text` is (re-)inserted.
        offset: usize,
        text: String,
    },
    Delete {
        /// Character offset at which `text` is removed again.
        offset: usize,
        text: String,
    },
}

impl EditRecord {
    /// Same offset and payload, opposite kind.
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            EditRecord::Insert { offset, text } => EditRecord::Delete { offset, text },
            EditRecord::Delete { offset, text } => EditRecord::Insert { offset, text },
        }
    }
}

/// Linear undo/redo history: two bounded stacks of [`EditRecord`]s.
///
/// Any freshly recorded mutation invalidates the redo stack; once the undo
/// stack exceeds its configured capacity the oldest record is discarded, so
/// undo stops restoring state beyond that cutoff.
#[derive(Debug)]
pub struct History {
    undo_stack: std::collections::VecDeque<EditRecord>,
    redo_stack: Vec<EditRecord>,
    max_undo: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_UNDO)
    }

    #[must_use]
    pub fn with_capacity(max_undo: usize) -> Self {
        Self {
            undo_stack: std::collections::VecDeque::new(),
            redo_stack: Vec::new(),
            max_undo,
        }
    }

    /// Pushes the inverse record of a fresh mutation.
    ///
    /// Clears the redo stack (standard linear-history invalidation) and
    /// evicts the oldest undo entry once `max_undo` is exceeded.
    pub fn record(&mut self, record: EditRecord) {
        self.redo_stack.clear();
        self.undo_stack.push_back(record);
        if self.undo_stack.len() > self.max_undo {
            self.undo_stack.pop_front();
        }
    }

    /// Reverts the most recent mutation on `buffer`.
    ///
    /// # Errors
    ///
    /// - `EmptyHistory` if there is nothing to undo.
    /// - `OutOfRange` only if the stacks and the buffer drifted apart,
    ///   which would be a bug in the caller (e.g. a mutation applied
    ///   without being recorded).
    pub fn undo(
        &mut self,
        buffer: &mut crate::buffer::Buffer,
    ) -> crate::errors::EditResult<()> {
        let record = self
            .undo_stack
            .pop_back()
            .ok_or(crate::errors::EditError::EmptyHistory)?;
        // Replay goes straight through `Buffer::apply`, never back through
        // `record`, so undoing is not itself undoable.
        let inverse = buffer.apply(&record)?;
        self.redo_stack.push(inverse);
        Ok(())
    }

    /// Re-applies the most recently undone mutation to `buffer`.
    ///
    /// # Errors
    ///
    /// Same contract as [`History::undo`], with `EmptyHistory` meaning the
    /// redo stack is empty.
    pub fn redo(
        &mut self,
        buffer: &mut crate::buffer::Buffer,
    ) -> crate::errors::EditResult<()> {
        let record = self
            .redo_stack
            .pop()
            .ok_or(crate::errors::EditError::EmptyHistory)?;
        let inverse = buffer.apply(&record)?;
        self.undo_stack.push_back(inverse);
        if self.undo_stack.len() > self.max_undo {
            self.undo_stack.pop_front();
        }
        Ok(())
    }

    /// Drops both stacks; used when a document is loaded wholesale.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    #[inline]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;

    fn record_into(history: &mut History, record: crate::errors::EditResult<EditRecord>) {
        history.record(record.expect("edit should succeed"));
    }

    #[test]
    fn test_undo_redo_inverse_law() {
        let mut buffer = Buffer::new();
        let mut history = History::new();

        let r = buffer.insert(0, "abc");
        record_into(&mut history, r);
        let r = buffer.delete(1, 2);
        record_into(&mut history, r);
        assert_eq!(buffer.text(), "ac");

        history.undo(&mut buffer).unwrap();
        assert_eq!(buffer.text(), "abc");
        history.undo(&mut buffer).unwrap();
        assert_eq!(buffer.text(), "");

        history.redo(&mut buffer).unwrap();
        assert_eq!(buffer.text(), "abc");
        history.redo(&mut buffer).unwrap();
        assert_eq!(buffer.text(), "ac");
    }

    #[test]
    fn test_undo_on_empty_history_fails() {
        let mut buffer = Buffer::new();
        let mut history = History::new();

        assert!(matches!(
            history.undo(&mut buffer),
            Err(crate::errors::EditError::EmptyHistory)
        ));
        assert!(matches!(
            history.redo(&mut buffer),
            Err(crate::errors::EditError::EmptyHistory)
        ));
    }

    #[test]
    fn test_new_mutation_clears_redo() {
        let mut buffer = Buffer::new();
        let mut history = History::new();

        let r = buffer.insert(0, "x");
        record_into(&mut history, r);
        history.undo(&mut buffer).unwrap();
        assert!(history.can_redo());

        let r = buffer.insert(0, "y");
        record_into(&mut history, r);
        assert!(!history.can_redo());
        assert!(matches!(
            history.redo(&mut buffer),
            Err(crate::errors::EditError::EmptyHistory)
        ));
    }

    #[test]
    fn test_history_bound_drops_oldest_edit() {
        let mut buffer = Buffer::new();
        let mut history = History::with_capacity(3);

        for ch in ["a", "b", "c", "d"] {
            let offset = buffer.char_len();
            let r = buffer.insert(offset, ch);
            record_into(&mut history, r);
        }
        assert_eq!(buffer.text(), "abcd");

        // Capacity 3: only the last three inserts are undoable.
        for _ in 0..3 {
            history.undo(&mut buffer).unwrap();
        }
        assert_eq!(buffer.text(), "a");
        assert!(matches!(
            history.undo(&mut buffer),
            Err(crate::errors::EditError::EmptyHistory)
        ));
    }

    #[test]
    fn test_inverted_flips_kind_only() {
        let record = EditRecord::Insert {
            offset: 4,
            text: String::from("hey"),
        };
        assert_eq!(
            record.inverted(),
            EditRecord::Delete {
                offset: 4,
                text: String::from("hey"),
            }
        );
    }

    #[test]
    fn test_clear_empties_both_stacks() {
        let mut buffer = Buffer::new();
        let mut history = History::new();

        let r = buffer.insert(0, "abc");
        record_into(&mut history, r);
        history.undo(&mut buffer).unwrap();
        history.clear();

        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
