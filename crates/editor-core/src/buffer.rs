/// # The Core Philosophies of This API
///
/// - Character-Addressed: every public offset is a character offset into the
///   document, `0..=char_len`. Byte positions are an internal concern; the
///   helpers below translate at the boundary so multi-byte text never leaks
///   broken indices to callers.
/// - Ownership of State: the `Buffer` owns both the text and the
///   [`crate::line_index::LineIndex`] so the two can never drift out of
///   sync. Every mutation rebuilds the index before returning.
/// - Inverse Records, Not Snapshots: each mutator hands back the
///   [`crate::history::EditRecord`] that undoes it. Recording (or not) is
///   the caller's decision, which is what lets undo/redo replay edits
///   without re-recording them.
#[derive(Debug)]
pub struct Buffer {
    text: String,
    line_index: crate::line_index::LineIndex,

    /// Cached character count of `text`; kept current by every mutator.
    char_len: usize,

    /// Tracks whether the buffer differs from its last persisted snapshot.
    modified: bool,

    /// The file path, if this buffer is tied to a file on disk.
    path: Option<std::path::PathBuf>,
}

/// Line, word, and character counts for the status/word-count displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferStats {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
}

/*

================================
===== CREATION & SNAPSHOTS =====
================================

*/

impl Buffer {
    /// Creates a new, empty buffer with no associated file.
    #[must_use]
    pub fn new() -> Self {
        Self::from_text(String::new())
    }

    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let line_index = crate::line_index::LineIndex::new(&text);
        let char_len = text.chars().count();
        Self {
            text,
            line_index,
            char_len,
            modified: false,
            path: None,
        }
    }

    /// Replaces the entire content, as after a successful load.
    ///
    /// The buffer comes out clean (`modified == false`); clearing any undo
    /// history to match is the caller's job, since the buffer does not own
    /// one.
    pub fn replace_contents(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.char_len = self.text.chars().count();
        self.line_index.rebuild(&self.text);
        self.modified = false;
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

/*

==========================
===== INLINE METHODS =====
==========================

*/

impl Buffer {
    /// The full current content. No side effects.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Document length in characters.
    #[inline]
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    #[inline]
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<std::path::PathBuf>) {
        self.path = Some(path.into());
    }

    /// Marks the buffer clean after a successful save.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }
}

/*

========================================
========= INSERTION & DELETION =========
========================================

*/

impl Buffer {
    /// Inserts `s` at character offset `offset`.
    ///
    /// Returns the Delete-kind [`crate::history::EditRecord`] that undoes
    /// the insertion.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `offset > char_len`.
    pub fn insert(
        &mut self,
        offset: usize,
        s: &str,
    ) -> crate::errors::EditResult<crate::history::EditRecord> {
        let byte = self.byte_of(offset)?;
        self.text.insert_str(byte, s);
        self.char_len += s.chars().count();
        self.line_index.rebuild(&self.text);
        self.modified = true;

        Ok(crate::history::EditRecord::Delete {
            offset,
            text: s.to_string(),
        })
    }

    /// Removes the half-open character range `[start, end)` and returns the
    /// Insert-kind record that puts the removed text back.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `start > end` or `end > char_len`.
    pub fn delete(
        &mut self,
        start: usize,
        end: usize,
    ) -> crate::errors::EditResult<crate::history::EditRecord> {
        if start > end {
            return Err(crate::errors::EditError::OutOfRange {
                offset: start,
                len: self.char_len,
            });
        }
        let start_byte = self.byte_of(start)?;
        let end_byte = self.byte_of(end)?;

        let removed: String = self.text.drain(start_byte..end_byte).collect();
        self.char_len -= end - start;
        self.line_index.rebuild(&self.text);
        self.modified = true;

        Ok(crate::history::EditRecord::Insert {
            offset: start,
            text: removed,
        })
    }

    /// Replays an [`crate::history::EditRecord`] and returns its inverse.
    ///
    /// This is the undo/redo entry point: it mutates exactly like
    /// [`Buffer::insert`]/[`Buffer::delete`] but leaves any history
    /// bookkeeping to the caller.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if the record no longer fits the current text, which
    /// indicates the caller applied mutations without recording them.
    pub fn apply(
        &mut self,
        record: &crate::history::EditRecord,
    ) -> crate::errors::EditResult<crate::history::EditRecord> {
        match record {
            crate::history::EditRecord::Insert { offset, text } => self.insert(*offset, text),
            crate::history::EditRecord::Delete { offset, text } => {
                let chars = text.chars().count();
                self.delete(*offset, offset + chars)
            }
        }
    }
}

/*

===========================
========= QUERIES =========
===========================

*/

impl Buffer {
    /// 1-based line and column of a character offset, for the status line.
    ///
    /// `offset == char_len` is valid and resolves to the position just past
    /// the final character.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `offset > char_len`.
    pub fn line_and_column(&self, offset: usize) -> crate::errors::EditResult<(usize, usize)> {
        if offset > self.char_len {
            return Err(crate::errors::EditError::OutOfRange {
                offset,
                len: self.char_len,
            });
        }
        let line = self.line_index.line_of(offset);
        // line_of never returns a line without a recorded start.
        let line_start = self.line_index.line_start(line).unwrap_or(0);
        Ok((line + 1, offset - line_start + 1))
    }

    /// Line, word, and character counts over the whole document.
    #[must_use]
    pub fn stats(&self) -> BufferStats {
        BufferStats {
            lines: self.line_index.line_count(),
            words: self.text.split_whitespace().count(),
            chars: self.char_len,
        }
    }

    /// Byte position of character offset `offset`; `char_len` maps to the
    /// byte length so exclusive range ends stay addressable.
    pub(crate) fn byte_of(&self, offset: usize) -> crate::errors::EditResult<usize> {
        if offset == self.char_len {
            return Ok(self.text.len());
        }
        self.text
            .char_indices()
            .nth(offset)
            .map(|(byte, _)| byte)
            .ok_or(crate::errors::EditError::OutOfRange {
                offset,
                len: self.char_len,
            })
    }
}

impl std::fmt::Display for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod buffer_editing_tests {
    use super::*;
    use crate::errors::EditError;

    #[test]
    fn test_insert_basic_and_interior() {
        let mut buffer = Buffer::new();
        buffer.insert(0, "Hello").unwrap();
        assert_eq!(buffer.text(), "Hello");

        buffer.insert(5, " World").unwrap();
        assert_eq!(buffer.text(), "Hello World");

        buffer.insert(5, ",").unwrap();
        assert_eq!(buffer.text(), "Hello, World");
        assert_eq!(buffer.char_len(), 12);
    }

    #[test]
    fn test_insert_past_end_is_out_of_range() {
        let mut buffer = Buffer::from_text("ab");
        let result = buffer.insert(3, "x");
        assert!(matches!(
            result,
            Err(EditError::OutOfRange { offset: 3, len: 2 })
        ));
        assert_eq!(buffer.text(), "ab", "failed insert must not mutate");
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_delete_half_open_range() {
        let mut buffer = Buffer::from_text("Hello World");
        let record = buffer.delete(5, 11).unwrap();
        assert_eq!(buffer.text(), "Hello");
        assert_eq!(
            record,
            crate::history::EditRecord::Insert {
                offset: 5,
                text: String::from(" World"),
            }
        );
    }

    #[test]
    fn test_delete_empty_range_is_a_recorded_noop() {
        let mut buffer = Buffer::from_text("abc");
        buffer.delete(1, 1).unwrap();
        assert_eq!(buffer.text(), "abc");
    }

    #[test]
    fn test_delete_invalid_ranges() {
        let mut buffer = Buffer::from_text("abc");
        assert!(matches!(
            buffer.delete(2, 1),
            Err(EditError::OutOfRange { .. })
        ));
        assert!(matches!(
            buffer.delete(0, 4),
            Err(EditError::OutOfRange { .. })
        ));
        assert_eq!(buffer.text(), "abc");
    }

    #[test]
    fn test_mutations_set_modified_flag() {
        let mut buffer = Buffer::from_text("abc");
        assert!(!buffer.is_modified());

        buffer.insert(0, "x").unwrap();
        assert!(buffer.is_modified());

        buffer.mark_saved();
        assert!(!buffer.is_modified());

        buffer.delete(0, 1).unwrap();
        assert!(buffer.is_modified());
    }

    #[test]
    fn test_multibyte_text_uses_character_offsets() {
        let mut buffer = Buffer::from_text("héllo");
        assert_eq!(buffer.char_len(), 5);

        buffer.insert(5, "!").unwrap();
        assert_eq!(buffer.text(), "héllo!");

        let record = buffer.delete(1, 2).unwrap();
        assert_eq!(buffer.text(), "hllo!");
        assert_eq!(
            record,
            crate::history::EditRecord::Insert {
                offset: 1,
                text: String::from("é"),
            }
        );
    }

    #[test]
    fn test_apply_insert_record_returns_delete_inverse() {
        let mut buffer = Buffer::from_text("ac");
        let record = crate::history::EditRecord::Insert {
            offset: 1,
            text: String::from("b"),
        };
        let inverse = buffer.apply(&record).unwrap();
        assert_eq!(buffer.text(), "abc");
        assert_eq!(
            inverse,
            crate::history::EditRecord::Delete {
                offset: 1,
                text: String::from("b"),
            }
        );
    }

    #[test]
    fn test_replace_contents_resets_clean() {
        let mut buffer = Buffer::from_text("old");
        buffer.insert(0, "x").unwrap();
        assert!(buffer.is_modified());

        buffer.replace_contents("fresh\ntext");
        assert_eq!(buffer.text(), "fresh\ntext");
        assert_eq!(buffer.char_len(), 10);
        assert!(!buffer.is_modified());
        assert_eq!(buffer.line_count(), 2);
    }
}

#[cfg(test)]
mod buffer_query_tests {
    use super::*;

    #[test]
    fn test_line_and_column_are_one_based() {
        let buffer = Buffer::from_text("ab\ncde\nf");
        assert_eq!(buffer.line_and_column(0).unwrap(), (1, 1));
        assert_eq!(buffer.line_and_column(1).unwrap(), (1, 2));
        assert_eq!(buffer.line_and_column(3).unwrap(), (2, 1));
        assert_eq!(buffer.line_and_column(5).unwrap(), (2, 3));
        assert_eq!(buffer.line_and_column(7).unwrap(), (3, 1));
        // One past the end is the caret's resting position.
        assert_eq!(buffer.line_and_column(8).unwrap(), (3, 2));
    }

    #[test]
    fn test_line_and_column_past_end_fails() {
        let buffer = Buffer::from_text("ab");
        assert!(matches!(
            buffer.line_and_column(3),
            Err(crate::errors::EditError::OutOfRange { offset: 3, len: 2 })
        ));
    }

    #[test]
    fn test_line_index_is_fresh_after_each_mutation() {
        let mut buffer = Buffer::from_text("ab");
        buffer.insert(1, "\n\n").unwrap();
        assert_eq!(buffer.line_count(), 3);
        assert_eq!(buffer.line_and_column(3).unwrap(), (3, 1));

        buffer.delete(1, 3).unwrap();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line_and_column(2).unwrap(), (1, 3));
    }

    #[test]
    fn test_stats_counts_lines_words_chars() {
        let buffer = Buffer::from_text("one two\nthree  four\n");
        let stats = buffer.stats();
        assert_eq!(stats.lines, 3); // trailing newline opens an empty line
        assert_eq!(stats.words, 4);
        assert_eq!(stats.chars, 20);
    }

    #[test]
    fn test_stats_on_empty_buffer() {
        let stats = Buffer::new().stats();
        assert_eq!(
            stats,
            BufferStats {
                lines: 1,
                words: 0,
                chars: 0,
            }
        );
    }
}
