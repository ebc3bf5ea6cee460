use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Largest note accepted by `nurse abbreviate`.
pub const MAX_INPUT_SIZE: usize = 256 * 1024;

pub struct InputReader;

impl InputReader {
    /// Reads `file_path`, or stdin when no path is given.
    pub fn read(file_path: Option<&Path>) -> Result<String> {
        file_path.map_or_else(|| Self::read_from(io::stdin().lock()), Self::read_file)
    }

    fn read_file(path: &Path) -> Result<String> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to access file: {}", path.display()))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(too_large(size));
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    fn read_from(reader: impl Read) -> Result<String> {
        let mut buffer = Vec::new();
        // One byte past the limit is enough to detect oversize input.
        reader
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;

        if buffer.len() > MAX_INPUT_SIZE {
            bail!(too_large(buffer.len()));
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

fn too_large(size: usize) -> String {
    format!(
        "Input size ({:.1} KB) exceeds maximum allowed size ({} KB).\n\n\
         Split the notes into smaller parts.",
        size as f64 / 1024.0,
        MAX_INPUT_SIZE / 1024
    )
}
