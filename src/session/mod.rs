//! Interactive frontend: a page selector standing in for a sidebar, with
//! per-session state kept in [`SessionState`].

mod page;
mod runner;
mod state;
mod ui;

pub use page::{NotesField, Page, PageAction};
pub use runner::InteractiveSession;
pub use state::{ModuleError, QaEntry, SessionState};
