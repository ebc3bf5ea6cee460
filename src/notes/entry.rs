use std::fmt;

use chrono::{DateTime, Local};

/// Display format of note timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separator used when a multi-line body is written on one line.
const LINE_JOIN: &str = " | ";

/// Which module produced a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Symptom,
    Documentation,
    Education,
}

/// A single timestamped note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub timestamp: DateTime<Local>,
    pub kind: NoteKind,
    /// The symptom or education topic the note is about.
    pub subject: Option<String>,
    pub body: String,
}

impl NoteEntry {
    pub fn new(kind: NoteKind, subject: Option<String>, body: impl Into<String>) -> Self {
        Self::at(Local::now(), kind, subject, body)
    }

    pub fn at(
        timestamp: DateTime<Local>,
        kind: NoteKind,
        subject: Option<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            kind,
            subject,
            body: body.into(),
        }
    }

    fn heading(&self) -> String {
        let stamp = self.timestamp.format(TIMESTAMP_FORMAT);
        match (self.kind, self.subject.as_deref()) {
            (NoteKind::Symptom, Some(symptom)) => format!("{stamp} SYMPTOM: {symptom}"),
            (NoteKind::Symptom, None) => format!("{stamp} SYMPTOM"),
            (NoteKind::Documentation, _) => format!("{stamp} DOC"),
            (NoteKind::Education, Some(topic)) => format!("{stamp} PT ED ({topic})"),
            (NoteKind::Education, None) => format!("{stamp} PT ED"),
        }
    }

    /// Single-line rendering used for export.
    ///
    /// Line breaks in the body are collapsed so one note is one line.
    pub fn to_line(&self) -> String {
        let body = self
            .body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(LINE_JOIN);

        match self.kind {
            NoteKind::Symptom => format!("{}{LINE_JOIN}{body}", self.heading()),
            NoteKind::Documentation | NoteKind::Education => {
                format!("{}: {body}", self.heading())
            }
        }
    }
}

impl fmt::Display for NoteEntry {
    /// Multi-line rendering used on screen.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NoteKind::Documentation => write!(f, "{}: {}", self.heading(), self.body),
            NoteKind::Symptom | NoteKind::Education => {
                write!(f, "{}\n{}", self.heading(), self.body)
            }
        }
    }
}

/// Append-only list of notes in insertion order.
#[derive(Debug, Clone, Default)]
pub struct NoteLog {
    entries: Vec<NoteEntry>,
}

impl NoteLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: NoteEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[NoteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &NoteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
