//! Case-sensitive substring search over the buffer, with wraparound, plus
//! the replace operations built on top of it. Matching runs on bytes via
//! `memchr::memmem`; because both needle and haystack are valid UTF-8, a
//! byte match always lands on character boundaries.

/// Where the next `find_next` should resume from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// The substring last searched for.
    pub query: String,
    /// Offset just past the most recent match.
    pub last_match_end: usize,
}

impl SearchState {
    /// The offset a repeat search for `query` should start from, clamped to
    /// the current document length. A changed query restarts at 0.
    #[must_use]
    pub fn resume_from(&self, query: &str, char_len: usize) -> usize {
        if query == self.query {
            std::cmp::min(self.last_match_end, char_len)
        } else {
            0
        }
    }

    pub fn note_match(&mut self, query: &str, match_end: usize) {
        self.query = query.to_string();
        self.last_match_end = match_end;
    }

    pub fn reset(&mut self) {
        self.query.clear();
        self.last_match_end = 0;
    }
}

/// Finds the next occurrence of `query` at or after character offset
/// `from`, wrapping to offset 0 when nothing matches through the end of the
/// text. Returns the matched half-open character range.
///
/// # Errors
///
/// - `NotFound` if `query` is empty or occurs nowhere in the document.
/// - `OutOfRange` if `from > buffer.char_len()`.
pub fn find_next(
    buffer: &crate::buffer::Buffer,
    query: &str,
    from: usize,
) -> crate::errors::EditResult<std::ops::Range<usize>> {
    if query.is_empty() {
        return Err(crate::errors::EditError::NotFound);
    }
    if let Some(found) = find_forward(buffer, query, from)? {
        return Ok(found);
    }
    find_forward(buffer, query, 0)?.ok_or(crate::errors::EditError::NotFound)
}

/// Replaces one matched `range` with `replacement`: a delete followed by an
/// insert, each recorded into `history` independently (undo reverses them
/// one at a time, matching toolkit-default granularity).
///
/// # Errors
///
/// `OutOfRange` if `range` does not fit the current document.
pub fn replace_one(
    buffer: &mut crate::buffer::Buffer,
    history: &mut crate::history::History,
    range: std::ops::Range<usize>,
    replacement: &str,
) -> crate::errors::EditResult<()> {
    if range.end > range.start {
        let record = buffer.delete(range.start, range.end)?;
        history.record(record);
    }
    if !replacement.is_empty() {
        let record = buffer.insert(range.start, replacement)?;
        history.record(record);
    }
    Ok(())
}

/// Replaces every non-overlapping occurrence of `query`, scanning forward
/// from offset 0 with no wraparound, and returns the replacement count.
/// Match offsets are re-derived after each replacement since lengths may
/// differ.
///
/// # Errors
///
/// `NotFound` only for an empty `query`; a query absent from the text
/// yields `Ok(0)` with the buffer untouched.
pub fn replace_all(
    buffer: &mut crate::buffer::Buffer,
    history: &mut crate::history::History,
    query: &str,
    replacement: &str,
) -> crate::errors::EditResult<usize> {
    if query.is_empty() {
        return Err(crate::errors::EditError::NotFound);
    }

    let replacement_chars = replacement.chars().count();
    let mut count = 0;
    let mut from = 0;
    while let Some(found) = find_forward(buffer, query, from)? {
        // Resume just past the inserted replacement so a replacement that
        // itself contains `query` is never re-matched.
        from = found.start + replacement_chars;
        replace_one(buffer, history, found, replacement)?;
        count += 1;
    }
    Ok(count)
}

/// Forward-only match starting at `from`; `Ok(None)` when the rest of the
/// text holds no occurrence.
fn find_forward(
    buffer: &crate::buffer::Buffer,
    query: &str,
    from: usize,
) -> crate::errors::EditResult<Option<std::ops::Range<usize>>> {
    let from_byte = buffer.byte_of(from)?;
    let haystack = &buffer.text().as_bytes()[from_byte..];

    Ok(memchr::memmem::find(haystack, query.as_bytes()).map(|pos| {
        let start_byte = from_byte + pos;
        let start = buffer.text()[..start_byte].chars().count();
        start..start + query.chars().count()
    }))
}
