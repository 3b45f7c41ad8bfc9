//! Holds the complete in-memory state for one open document and the closed
//! command set the UI layer dispatches onto it.
//!
//! - [`document::Document`] ties together the buffer, the undo history,
//!   the cursor, and the search state so every mutation is recorded and
//!   every index stays fresh.
//! - [`command::Command`] is the fixed operation set (New, Open, Save, ...)
//!   known at build time; no runtime registration table.

pub mod command;
pub mod document;
