//! Applies the abbreviation table to a file or stdin.

use anyhow::{Result, bail};
use std::io::{self, Write};
use std::path::Path;

use crate::abbrev::abbreviate;
use crate::input::InputReader;

pub fn run(file: Option<&Path>) -> Result<()> {
    let text = InputReader::read(file)?;
    if text.trim().is_empty() {
        bail!("Input is empty");
    }

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", abbreviate(&text))?;
    if !text.ends_with('\n') {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}
