//! Timestamped care notes and their plain-text export.

mod entry;
mod export;

pub use entry::{NoteEntry, NoteKind, NoteLog};
pub use export::{export_notes, notes_file_name};
