pub type EditResult<T> = Result<T, EditError>;

#[derive(Debug)]
pub enum EditError {
    /// An offset or range argument fell outside the current document.
    /// Carries the offending offset and the document length at the time.
    OutOfRange { offset: usize, len: usize },
    /// The search query was empty, or occurs nowhere in the document.
    NotFound,
    /// Undo (or redo) was requested with nothing left to replay.
    EmptyHistory,
    Io(std::io::Error),
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::OutOfRange { offset, len } => {
                write!(f, "offset {offset} out of range (len={len})")
            }
            EditError::NotFound => write!(f, "search text not found"),
            EditError::EmptyHistory => write!(f, "nothing to undo or redo"),
            EditError::Io(e) => write!(f, "i/o failure: {e}"),
        }
    }
}

impl std::error::Error for EditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EditError {
    fn from(value: std::io::Error) -> Self {
        EditError::Io(value)
    }
}
