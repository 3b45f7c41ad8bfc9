//! The toolkit-independent document model: a mutable text buffer with
//! line/column lookups, a bounded undo/redo history, and substring search.
//!
//! Nothing in this crate knows about windows, widgets, or event loops; the
//! UI layer calls in, the model reports back via explicit `Result`s.

pub mod buffer;
pub mod cursor;
pub mod errors;
pub mod history;
pub mod line_index;
pub mod search;
