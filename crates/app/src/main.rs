//! Line-oriented driver for the document model. Owns the single
//! [`editor_state::document::Document`] instance and passes it explicitly
//! wherever it is needed — no ambient global editor state.
//!
//! One thread reads stdin and forwards lines over a channel; the event
//! loop selects between those lines and auto-save ticks, so saves and
//! edits always run on the same execution context.

use editor_state::command::{Command, Outcome};

const AUTOSAVE_INTERVAL: std::time::Duration = std::time::Duration::from_secs(30);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut document = editor_state::document::Document::new();
    if let Some(path) = std::env::args().nth(1)
        && let Err(e) = document.open_path(&path)
    {
        eprintln!("cannot open {path}: {e}");
        std::process::exit(1);
    }

    let lines = spawn_stdin_reader();
    let autosave = util::autosave::AutosaveTicker::new(AUTOSAVE_INTERVAL);

    loop {
        crossbeam_channel::select! {
            recv(lines) -> line => {
                let Ok(line) = line else { break };
                if !handle_line(&mut document, &line) {
                    break;
                }
            }
            recv(autosave.receiver()) -> _ => {
                autosave_if_due(&mut document);
            }
        }
    }
}

fn spawn_stdin_reader() -> crossbeam_channel::Receiver<String> {
    let (tx, rx) = crossbeam_channel::bounded(1);
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Saves in the background only when there is something to save and
/// somewhere to save it; a new unsaved document keeps accumulating changes
/// until the user picks a path.
fn autosave_if_due(document: &mut editor_state::document::Document) {
    if document.is_modified() && document.buffer.path().is_some() {
        match document.save() {
            Ok(()) => tracing::info!("auto-saved"),
            Err(e) => tracing::warn!(error = %e, "auto-save failed"),
        }
    }
}

/// Executes one typed line; returns false when the session should end.
fn handle_line(document: &mut editor_state::document::Document, line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() {
        return true;
    }

    let (verb, rest) = match line.split_once(' ') {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    // Direct mutation calls sit outside the Command set.
    let result = match verb {
        "type" => document.insert_at_cursor(rest).map(|()| Outcome::Done),
        "del" => match parse_range(rest) {
            Some((start, end)) => document.delete(start, end).map(|()| Outcome::Done),
            None => {
                eprintln!("usage: del <start> <end>");
                return true;
            }
        },
        "show" => {
            println!("{}", document.text());
            print_status(document);
            return true;
        }
        _ => match parse_command(verb, rest) {
            Some(command) => document.apply(command),
            None => {
                eprintln!("unknown command: {verb}");
                return true;
            }
        },
    };

    match result {
        Ok(Outcome::Quit) => return false,
        Ok(outcome) => print_outcome(document, &outcome),
        Err(e) => eprintln!("error: {e}"),
    }
    print_status(document);
    true
}

fn parse_command(verb: &str, rest: &str) -> Option<Command> {
    match verb {
        "new" => Some(Command::New),
        "open" => Some(Command::Open(std::path::PathBuf::from(rest))),
        "save" => Some(Command::Save),
        "saveas" => Some(Command::SaveAs(std::path::PathBuf::from(rest))),
        "undo" => Some(Command::Undo),
        "redo" => Some(Command::Redo),
        "find" => Some(Command::Find(rest.to_string())),
        "replace" => {
            let (query, replacement) = rest.split_once(' ')?;
            Some(Command::Replace {
                query: query.to_string(),
                replacement: replacement.to_string(),
            })
        }
        "replaceall" => {
            let (query, replacement) = rest.split_once(' ')?;
            Some(Command::ReplaceAll {
                query: query.to_string(),
                replacement: replacement.to_string(),
            })
        }
        "ln" => Some(Command::ToggleLineNumbers),
        "wc" => Some(Command::WordCount),
        "quit" => Some(Command::Quit),
        _ => None,
    }
}

fn parse_range(rest: &str) -> Option<(usize, usize)> {
    let (start, end) = rest.split_once(' ')?;
    Some((start.trim().parse().ok()?, end.trim().parse().ok()?))
}

fn print_outcome(document: &editor_state::document::Document, outcome: &Outcome) {
    match outcome {
        Outcome::Done => {}
        Outcome::Found(range) => println!("match at [{}, {})", range.start, range.end),
        Outcome::Replaced(count) => println!("{count} replacement(s)"),
        Outcome::Stats(stats) => println!(
            "{} lines, {} words, {} characters",
            stats.lines, stats.words, stats.chars
        ),
        Outcome::LineNumbers(on) => {
            println!("line numbers {}", if *on { "on" } else { "off" });
            if *on {
                for (i, line) in document.text().lines().enumerate() {
                    println!("{:>4} {line}", i + 1);
                }
            }
        }
        Outcome::Quit => {}
    }
}

fn print_status(document: &editor_state::document::Document) {
    if let Ok((line, column)) = document.cursor_line_col() {
        let marker = if document.is_modified() { " [modified]" } else { "" };
        println!("Ln {line}, Col {column}{marker}");
    }
}
