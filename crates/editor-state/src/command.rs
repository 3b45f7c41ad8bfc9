/// The closed set of operations the UI layer can dispatch. Fixed and known
/// at build time, so dispatch is a plain `match` — no callback registration
/// table keyed to widget signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Open(std::path::PathBuf),
    Save,
    SaveAs(std::path::PathBuf),
    Undo,
    Redo,
    Find(String),
    Replace {
        query: String,
        replacement: String,
    },
    ReplaceAll {
        query: String,
        replacement: String,
    },
    ToggleLineNumbers,
    WordCount,
    Quit,
}

/// What a dispatched [`Command`] produced, for the UI to present.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Found(std::ops::Range<usize>),
    Replaced(usize),
    Stats(editor_core::buffer::BufferStats),
    LineNumbers(bool),
    Quit,
}

impl crate::document::Document {
    /// Dispatches a [`Command`] onto this document.
    ///
    /// Confirm-discard prompts for `New`/`Open`/`Quit` over a modified
    /// document are the UI's responsibility; the core executes what it is
    /// told.
    ///
    /// # Errors
    ///
    /// Whatever the underlying operation reports: `Io` for `Open`/`Save`/
    /// `SaveAs`, `EmptyHistory` for `Undo`/`Redo`, `NotFound` for the
    /// search commands.
    pub fn apply(&mut self, command: Command) -> editor_core::errors::EditResult<Outcome> {
        match command {
            Command::New => {
                self.reset();
                Ok(Outcome::Done)
            }
            Command::Open(path) => {
                self.open_path(path)?;
                Ok(Outcome::Done)
            }
            Command::Save => {
                self.save()?;
                Ok(Outcome::Done)
            }
            Command::SaveAs(path) => {
                self.save_as(path)?;
                Ok(Outcome::Done)
            }
            Command::Undo => {
                self.undo()?;
                Ok(Outcome::Done)
            }
            Command::Redo => {
                self.redo()?;
                Ok(Outcome::Done)
            }
            Command::Find(query) => {
                let found = self.find_next(&query)?;
                Ok(Outcome::Found(found))
            }
            Command::Replace { query, replacement } => {
                self.replace_next(&query, &replacement)?;
                Ok(Outcome::Replaced(1))
            }
            Command::ReplaceAll { query, replacement } => {
                let count = self.replace_all(&query, &replacement)?;
                Ok(Outcome::Replaced(count))
            }
            Command::ToggleLineNumbers => Ok(Outcome::LineNumbers(self.toggle_line_numbers())),
            Command::WordCount => Ok(Outcome::Stats(self.stats())),
            Command::Quit => Ok(Outcome::Quit),
        }
    }
}
