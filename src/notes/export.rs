use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use super::entry::NoteLog;

/// Timestamp format embedded in export file names.
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Builds `notes_<patient_name>_<yyyyMMddHHmmss>.txt`.
///
/// Path separators and control characters in the name become `_`.
pub fn notes_file_name(patient_name: &str, now: DateTime<Local>) -> String {
    let name: String = patient_name
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    format!("notes_{name}_{}.txt", now.format(FILE_TIMESTAMP_FORMAT))
}

/// Writes every note as one newline-terminated line into `dir`.
///
/// An existing file with the same name is overwritten.
pub fn export_notes(
    log: &NoteLog,
    patient_name: &str,
    dir: &Path,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    let path = dir.join(notes_file_name(patient_name, now));

    let contents: String = log
        .iter()
        .map(|entry| format!("{}\n", entry.to_line()))
        .collect();

    fs::write(&path, contents)
        .with_context(|| format!("Failed to write notes file: {}", path.display()))?;

    tracing::info!(path = %path.display(), notes = log.len(), "exported notes");
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::notes::{NoteEntry, NoteKind};
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, 8, 30, 1).unwrap()
    }

    fn sample_log() -> NoteLog {
        let mut log = NoteLog::new();
        log.push(NoteEntry::at(
            fixed_time(),
            NoteKind::Symptom,
            Some("fever".to_string()),
            "1. Infection\n2. Dehydration\n3. Medication reaction",
        ));
        log.push(NoteEntry::at(
            fixed_time(),
            NoteKind::Documentation,
            None,
            "pt c/o SOB",
        ));
        log.push(NoteEntry::at(
            fixed_time(),
            NoteKind::Education,
            Some("diabetes".to_string()),
            "Diabetes Ed: Monitor BG.",
        ));
        log
    }

    #[test]
    fn test_notes_file_name_format() {
        assert_eq!(
            notes_file_name("Jane Doe", fixed_time()),
            "notes_Jane Doe_20261019083001.txt"
        );
    }

    #[test]
    fn test_notes_file_name_replaces_separators() {
        assert_eq!(
            notes_file_name("../etc/x\\y", fixed_time()),
            "notes_.._etc_x_y_20261019083001.txt"
        );
    }

    #[test]
    fn test_export_writes_one_line_per_note() {
        let temp_dir = TempDir::new().unwrap();
        let log = sample_log();

        let path = export_notes(&log, "Jane", temp_dir.path(), fixed_time()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();

        assert!(contents.ends_with('\n'));
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), log.len());
        assert!(lines[0].contains("SYMPTOM: fever"));
        assert!(lines[1].ends_with("DOC: pt c/o SOB"));
        assert!(lines[2].contains("PT ED (diabetes)"));
    }

    #[test]
    fn test_export_file_name_embeds_patient_and_timestamp() {
        let temp_dir = TempDir::new().unwrap();

        let path = export_notes(&sample_log(), "Jane", temp_dir.path(), fixed_time()).unwrap();
        let file_name = path.file_name().unwrap().to_str().unwrap();

        assert_eq!(file_name, "notes_Jane_20261019083001.txt");
    }

    #[test]
    fn test_export_empty_log_creates_empty_file() {
        let temp_dir = TempDir::new().unwrap();

        let path = export_notes(&NoteLog::new(), "Jane", temp_dir.path(), fixed_time()).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }

    #[test]
    fn test_export_missing_directory_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let result = export_notes(&sample_log(), "Jane", &missing, fixed_time());

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to write notes file"));
    }
}
