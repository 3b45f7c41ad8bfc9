use std::io::{Read, Write};

/// Reads the entire stream and decodes it as UTF-8, replacing any invalid
/// sequences. The source format is plain text with no header; bytes are
/// taken as-is.
///
/// # Errors
///
/// Any `std::io::Error` from the underlying reader.
pub fn load(reader: &mut impl Read) -> std::io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(decode(&bytes))
}

/// Writes `text` verbatim and flushes. A partial write surfaces as the
/// error; nothing is retried.
///
/// # Errors
///
/// Any `std::io::Error` from the underlying writer.
pub fn save(writer: &mut impl Write, text: &str) -> std::io::Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

/// Reads a whole file into a `String` through a read-only memory map.
///
/// # Errors
///
/// Returns an error if the file does not exist, lacks read permissions, or
/// the mapping fails.
pub fn load_path(path: impl AsRef<std::path::Path>) -> std::io::Result<String> {
    let file = std::fs::File::open(path)?;

    // A zero-length mapping is invalid on every platform we care about.
    if file.metadata()?.len() == 0 {
        return Ok(String::new());
    }

    // SAFETY:
    // - The file is opened read-only and the map is dropped before return.
    // - Only this function sees the mapped bytes; the decoded String owns
    //   its own copy.
    let mmap = unsafe { memmap2::Mmap::map(&file)? };
    Ok(decode(&mmap))
}

/// Overwrites `path` with `text` and syncs it to disk.
///
/// # Errors
///
/// Returns an error if the file cannot be created, written, or synced.
pub fn save_path(path: impl AsRef<std::path::Path>, text: &str) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut file = std::io::BufWriter::new(file);
    file.write_all(text.as_bytes())?;
    file.flush()?;
    file.get_ref().sync_all()
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
