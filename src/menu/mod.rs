//! Line-mode frontend: a numbered menu read from stdin.

mod choice;
mod runner;

pub use choice::{MENU_ITEMS, MenuChoice, parse_choice};
pub use runner::MenuRunner;

use anyhow::Result;
use std::io;
use std::path::PathBuf;

use crate::completion::CompletionClient;

/// Runs the menu on the process's stdin/stdout until the user quits.
pub async fn run_menu(client: &dyn CompletionClient, notes_dir: PathBuf) -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    let mut runner = MenuRunner::new(client, stdin, stdout, notes_dir);
    runner.run().await
}
