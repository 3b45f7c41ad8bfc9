/// A caret plus its associated selection, addressed in character offsets.
/// Uses the "anchor and position" directional selection model: the anchor
/// is the fixed end of a selection, the position is the moving end where
/// the caret blinks. The selection is the half-open range between the
/// smaller and larger of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// The fixed starting point of a selection.
    pub anchor: usize,
    /// The active, moving end of the selection.
    pub position: usize,
}

impl Cursor {
    /// A collapsed cursor (no selection) at `offset`.
    #[must_use]
    pub fn at(offset: usize) -> Self {
        Self {
            anchor: offset,
            position: offset,
        }
    }

    /// A selection from an anchor to a position, in either direction.
    #[must_use]
    pub fn with_selection(anchor: usize, position: usize) -> Self {
        Self { anchor, position }
    }

    /// Returns true if this is just a caret (no text selected).
    #[inline]
    #[must_use]
    pub fn no_selection(&self) -> bool {
        self.anchor == self.position
    }

    /// The lower bound of the selection, regardless of direction.
    #[inline]
    #[must_use]
    pub fn start(&self) -> usize {
        std::cmp::min(self.anchor, self.position)
    }

    /// The upper bound of the selection, regardless of direction.
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        std::cmp::max(self.anchor, self.position)
    }

    /// The normalized half-open selection range.
    #[inline]
    #[must_use]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start()..self.end()
    }

    /// Moves the position, extending the selection from the anchor.
    pub fn set_position(&mut self, offset: usize) {
        self.position = offset;
    }

    /// Collapses the selection onto the position.
    pub fn collapse(&mut self) {
        self.anchor = self.position;
    }

    /// Inverts the direction of the selection.
    pub fn invert(&mut self) {
        std::mem::swap(&mut self.anchor, &mut self.position);
    }

    /// Pulls both ends back inside a document of `char_len` characters,
    /// used after undo/redo or a load shrinks the text underneath the
    /// cursor.
    pub fn clamp(&mut self, char_len: usize) {
        self.anchor = std::cmp::min(self.anchor, char_len);
        self.position = std::cmp::min(self.position, char_len);
    }
}
