/// Character offsets of every line start in the current document.
///
/// A line starts at offset 0 and immediately after every `'\n'`. The index
/// is a plain sorted `Vec`, rebuilt in O(n) after each buffer mutation and
/// queried with a binary search. It must never be consulted while stale;
/// [`crate::buffer::Buffer`] owns both the text and this index so they
/// cannot drift apart.
#[derive(Debug)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut index = Self {
            line_starts: Vec::new(),
        };
        index.rebuild(text);
        index
    }

    /// Recomputes every line-start offset from scratch.
    pub fn rebuild(&mut self, text: &str) {
        self.line_starts.clear();
        self.line_starts.push(0);
        for (i, ch) in text.chars().enumerate() {
            if ch == '\n' {
                self.line_starts.push(i + 1);
            }
        }
    }

    /// Returns the 0-based line containing `offset`: the index of the
    /// greatest line start `<= offset`. An offset one past the final
    /// character resolves to the last line.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            // `insert` can never be 0 because line_starts[0] == 0.
            Err(insert) => insert - 1,
        }
    }

    /// Character offset at which `line` (0-based) starts.
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Total number of lines. An empty document has one (empty) line.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
