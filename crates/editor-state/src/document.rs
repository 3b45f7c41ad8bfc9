/// One open document: the buffer plus everything that tracks it.
///
/// Every mutation flows through here so its inverse record lands in the
/// history, the cursor follows the edit, and the search state stays honest.
/// The UI layer owns presentation and dialogs; this type owns state.
#[derive(Debug)]
pub struct Document {
    pub buffer: editor_core::buffer::Buffer,
    pub history: editor_core::history::History,
    pub cursor: editor_core::cursor::Cursor,
    search: editor_core::search::SearchState,
    show_line_numbers: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: editor_core::buffer::Buffer::new(),
            history: editor_core::history::History::new(),
            cursor: editor_core::cursor::Cursor::default(),
            search: editor_core::search::SearchState::default(),
            show_line_numbers: false,
        }
    }
}

/*

==================================
===== OPEN, SAVE, NEW ============
==================================

*/

impl Document {
    /// Replaces this document with the contents of `path`.
    ///
    /// On success the history is cleared, the modified flag is false, and
    /// the path becomes the save target.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read.
    pub fn open_path(
        &mut self,
        path: impl AsRef<std::path::Path>,
    ) -> editor_core::errors::EditResult<()> {
        let path = path.as_ref();
        let text = io::file::load_path(path)?;
        self.buffer.replace_contents(text);
        self.buffer.set_path(path);
        self.after_load();
        tracing::info!(path = %path.display(), chars = self.buffer.char_len(), "opened document");
        Ok(())
    }

    /// Replaces this document with the contents of an arbitrary stream.
    /// The save target is left untouched; a stream has no path to record.
    ///
    /// # Errors
    ///
    /// `Io` if the stream cannot be read.
    pub fn load_from(
        &mut self,
        reader: &mut impl std::io::Read,
    ) -> editor_core::errors::EditResult<()> {
        let text = io::file::load(reader)?;
        self.buffer.replace_contents(text);
        self.after_load();
        Ok(())
    }

    /// Writes the document to its associated path.
    ///
    /// # Errors
    ///
    /// - `Io` with `InvalidInput` if no path is associated (use
    ///   [`Document::save_as`]).
    /// - `Io` if the write fails; the modified flag is left set so the
    ///   caller can retry or report.
    pub fn save(&mut self) -> editor_core::errors::EditResult<()> {
        let path = self.buffer.path().ok_or_else(|| {
            editor_core::errors::EditError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "no file path associated with this document; use save_as",
            ))
        })?;
        io::file::save_path(path, self.buffer.text())?;
        tracing::info!(path = %path.display(), chars = self.buffer.char_len(), "saved document");
        self.buffer.mark_saved();
        Ok(())
    }

    /// Points the document at a new path, then saves there.
    ///
    /// # Errors
    ///
    /// `Io` if the destination cannot be written.
    pub fn save_as(
        &mut self,
        path: impl Into<std::path::PathBuf>,
    ) -> editor_core::errors::EditResult<()> {
        self.buffer.set_path(path.into());
        self.save()
    }

    /// Writes the document to an arbitrary stream and marks it clean.
    ///
    /// # Errors
    ///
    /// `Io` if the write fails, including partial writes.
    pub fn save_to(
        &mut self,
        writer: &mut impl std::io::Write,
    ) -> editor_core::errors::EditResult<()> {
        io::file::save(writer, self.buffer.text())?;
        self.buffer.mark_saved();
        Ok(())
    }

    /// Discards everything and starts an empty, unsaved document. Whether
    /// unsaved changes should first be confirmed is the UI's decision.
    pub fn reset(&mut self) {
        self.buffer = editor_core::buffer::Buffer::new();
        self.after_load();
    }

    fn after_load(&mut self) {
        self.history.clear();
        self.cursor = editor_core::cursor::Cursor::default();
        self.search.reset();
    }
}

/*

========================================
========= EDITING ======================
========================================

*/

impl Document {
    /// Inserts `text` at `offset`, records the inverse, and parks the
    /// cursor after the inserted text.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `offset` exceeds the document length.
    pub fn insert(&mut self, offset: usize, text: &str) -> editor_core::errors::EditResult<()> {
        let record = self.buffer.insert(offset, text)?;
        self.history.record(record);
        self.cursor = editor_core::cursor::Cursor::at(offset + text.chars().count());
        Ok(())
    }

    /// Removes `[start, end)`, records the inverse, and collapses the
    /// cursor to `start`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` for an invalid range.
    pub fn delete(&mut self, start: usize, end: usize) -> editor_core::errors::EditResult<()> {
        let record = self.buffer.delete(start, end)?;
        self.history.record(record);
        self.cursor = editor_core::cursor::Cursor::at(start);
        Ok(())
    }

    /// Types `text` at the cursor; an active selection is deleted first.
    /// The deletion and insertion record independently.
    ///
    /// # Errors
    ///
    /// `OutOfRange` only if the cursor no longer fits the document, which
    /// the clamping in undo/redo and load prevents.
    pub fn insert_at_cursor(&mut self, text: &str) -> editor_core::errors::EditResult<()> {
        let target = self.cursor.start();
        if !self.cursor.no_selection() {
            let range = self.cursor.range();
            self.delete(range.start, range.end)?;
        }
        self.insert(target, text)
    }

    /// Deletes the selected range, if any. Returns whether anything was
    /// removed.
    ///
    /// # Errors
    ///
    /// Same contract as [`Document::insert_at_cursor`].
    pub fn delete_selection(&mut self) -> editor_core::errors::EditResult<bool> {
        if self.cursor.no_selection() {
            return Ok(false);
        }
        let range = self.cursor.range();
        self.delete(range.start, range.end)?;
        Ok(true)
    }

    /// # Errors
    ///
    /// `EmptyHistory` if there is nothing to undo.
    pub fn undo(&mut self) -> editor_core::errors::EditResult<()> {
        self.history.undo(&mut self.buffer)?;
        self.cursor.clamp(self.buffer.char_len());
        Ok(())
    }

    /// # Errors
    ///
    /// `EmptyHistory` if there is nothing to redo.
    pub fn redo(&mut self) -> editor_core::errors::EditResult<()> {
        self.history.redo(&mut self.buffer)?;
        self.cursor.clamp(self.buffer.char_len());
        Ok(())
    }
}

/*

========================================
========= SEARCH & REPLACE =============
========================================

*/

impl Document {
    /// Finds the next occurrence of `query`, selects it, and remembers the
    /// match end so a repeated search continues from there. Wraps to the
    /// top of the document when the end is reached.
    ///
    /// # Errors
    ///
    /// `NotFound` if `query` is empty or absent.
    pub fn find_next(
        &mut self,
        query: &str,
    ) -> editor_core::errors::EditResult<std::ops::Range<usize>> {
        let from = self.search.resume_from(query, self.buffer.char_len());
        let found = editor_core::search::find_next(&self.buffer, query, from)?;
        self.cursor = editor_core::cursor::Cursor::with_selection(found.start, found.end);
        self.search.note_match(query, found.end);
        Ok(found)
    }

    /// Replaces the next occurrence of `query` with `replacement` and
    /// leaves the cursor after the replacement.
    ///
    /// # Errors
    ///
    /// `NotFound` if `query` is empty or absent.
    pub fn replace_next(
        &mut self,
        query: &str,
        replacement: &str,
    ) -> editor_core::errors::EditResult<()> {
        let found = self.find_next(query)?;
        editor_core::search::replace_one(
            &mut self.buffer,
            &mut self.history,
            found.clone(),
            replacement,
        )?;
        let end = found.start + replacement.chars().count();
        self.cursor = editor_core::cursor::Cursor::at(end);
        self.search.note_match(query, end);
        Ok(())
    }

    /// Replaces every occurrence of `query`, forward-only from the top.
    /// Returns the number of replacements; 0 when the query is absent.
    ///
    /// # Errors
    ///
    /// `NotFound` only for an empty `query`.
    pub fn replace_all(
        &mut self,
        query: &str,
        replacement: &str,
    ) -> editor_core::errors::EditResult<usize> {
        let count = editor_core::search::replace_all(
            &mut self.buffer,
            &mut self.history,
            query,
            replacement,
        )?;
        self.cursor.clamp(self.buffer.char_len());
        self.search.reset();
        tracing::debug!(query, count, "replace all");
        Ok(count)
    }
}

/*

===========================
========= QUERIES =========
===========================

*/

impl Document {
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    #[inline]
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.buffer.is_modified()
    }

    /// 1-based line and column of the caret, for the status display.
    ///
    /// # Errors
    ///
    /// `OutOfRange` never occurs in practice: the cursor is clamped after
    /// every operation that can shrink the document.
    pub fn cursor_line_col(&self) -> editor_core::errors::EditResult<(usize, usize)> {
        self.buffer.line_and_column(self.cursor.position)
    }

    #[must_use]
    pub fn stats(&self) -> editor_core::buffer::BufferStats {
        self.buffer.stats()
    }

    /// Flips the line-number display flag and returns the new state. The
    /// rendering itself belongs to the UI.
    pub fn toggle_line_numbers(&mut self) -> bool {
        self.show_line_numbers = !self.show_line_numbers;
        self.show_line_numbers
    }

    #[inline]
    #[must_use]
    pub fn line_numbers_enabled(&self) -> bool {
        self.show_line_numbers
    }
}


#[cfg(test)]
mod search_tests {
    use super::*;
    use editor_core::errors::EditError;

    #[test]
    fn test_find_next_resumes_and_wraps() {
        let mut doc = Document::new();
        doc.insert(0, "cat bat cat").unwrap();

        assert_eq!(doc.find_next("cat").unwrap(), 0..3);
        assert_eq!(doc.cursor.range(), 0..3);

        assert_eq!(doc.find_next("cat").unwrap(), 8..11);
        // End of text: wraps back to the first match.
        assert_eq!(doc.find_next("cat").unwrap(), 0..3);
    }

    #[test]
    fn test_find_next_restarts_for_new_query() {
        let mut doc = Document::new();
        doc.insert(0, "cat bat cat").unwrap();

        doc.find_next("cat").unwrap();
        assert_eq!(doc.find_next("bat").unwrap(), 4..7);
    }

    #[test]
    fn test_replace_next_advances_past_replacement() {
        let mut doc = Document::new();
        doc.insert(0, "cat cat").unwrap();

        doc.replace_next("cat", "catalog").unwrap();
        assert_eq!(doc.text(), "catalog cat");

        // Second replace must hit the old second match, not the output of
        // the first.
        doc.replace_next("cat", "catalog").unwrap();
        assert_eq!(doc.text(), "catalog catalog");
    }

    #[test]
    fn test_replace_all_scenario() {
        let mut doc = Document::new();
        doc.insert(0, "a b a b a").unwrap();

        assert_eq!(doc.replace_all("a", "x").unwrap(), 3);
        assert_eq!(doc.text(), "x b x b x");
    }

    #[test]
    fn test_replace_all_absent_leaves_text_untouched() {
        let mut doc = Document::new();
        doc.insert(0, "a b a").unwrap();

        assert_eq!(doc.replace_all("q", "x").unwrap(), 0);
        assert_eq!(doc.text(), "a b a");
    }

    #[test]
    fn test_find_empty_query_fails() {
        let mut doc = Document::new();
        doc.insert(0, "text").unwrap();
        assert!(matches!(doc.find_next(""), Err(EditError::NotFound)));
    }
}
