//! Whole-document persistence: read an entire stream or file into memory,
//! write it back verbatim. File reads go through a read-only memory map so
//! the OS pages data in lazily; writes are plain overwrites of the target
//! (no temp-file/atomic-rename dance, so a crash mid-write can leave a
//! truncated file — an accepted trade-off for this editor).

pub mod file;
