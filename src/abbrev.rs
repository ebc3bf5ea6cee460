//! Nurse-style abbreviation of free-text documentation.
//!
//! Replacement is literal and ordered: each pair is applied to the whole text
//! before the next pair is tried, so later pairs see the output of earlier
//! ones. There is no word-boundary handling ("outpatient" becomes "outpt").

/// Ordered (long phrase, short phrase) pairs.
///
/// "shortness of breath" must stay ahead of the bare "shortness" entry.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("patient", "pt"),
    ("blood pressure", "BP"),
    ("shortness of breath", "SOB"),
    ("complains of", "c/o"),
    ("history of", "h/o"),
    ("shortness", "SOB"),
];

/// Applies [`ABBREVIATIONS`] to `note` in table order.
pub fn abbreviate(note: &str) -> String {
    ABBREVIATIONS
        .iter()
        .fold(note.to_string(), |text, (long, short)| {
            text.replace(long, short)
        })
}
