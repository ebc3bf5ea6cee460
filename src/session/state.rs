use thiserror::Error;

use crate::abbrev::abbreviate;
use crate::assistant;
use crate::completion::{CompletionClient, CompletionError, prompt};
use crate::notes::NoteEntry;
use crate::patient::PatientProfile;

use super::page::{NotesField, Page};

/// Why a page's module produced no note.
#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("Save a patient profile on the Patient Intake page first.")]
    NoProfile,
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// One CuraAI question and its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaEntry {
    pub query: String,
    pub response: String,
}

/// Everything the interactive session remembers between pages.
///
/// Created when the session starts and cleared when it ends; nothing is
/// written to disk.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    profile: Option<PatientProfile>,
    patient_notes: String,
    symptom_notes: String,
    documentation_notes: String,
    education_notes: String,
    qa_history: Vec<QaEntry>,
    feedback: Vec<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all state at the end of the session.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub const fn profile(&self) -> Option<&PatientProfile> {
        self.profile.as_ref()
    }

    pub fn save_profile(&mut self, profile: PatientProfile) {
        self.profile = Some(profile);
    }

    pub fn notes(&self, field: NotesField) -> &str {
        match field {
            NotesField::Patient => &self.patient_notes,
            NotesField::Symptom => &self.symptom_notes,
            NotesField::Documentation => &self.documentation_notes,
            NotesField::Education => &self.education_notes,
        }
    }

    fn notes_mut(&mut self, field: NotesField) -> &mut String {
        match field {
            NotesField::Patient => &mut self.patient_notes,
            NotesField::Symptom => &mut self.symptom_notes,
            NotesField::Documentation => &mut self.documentation_notes,
            NotesField::Education => &mut self.education_notes,
        }
    }

    /// Replaces a notes field with edited text.
    pub fn set_notes(&mut self, field: NotesField, text: String) {
        *self.notes_mut(field) = text;
    }

    /// Appends a module's note, separated from earlier text by a blank line.
    pub fn append_note(&mut self, field: NotesField, entry: &NoteEntry) {
        let notes = self.notes_mut(field);
        let trimmed_len = notes.trim_end().len();
        notes.truncate(trimmed_len);
        if !notes.is_empty() {
            notes.push_str("\n\n");
        }
        notes.push_str(&entry.to_string());
    }

    /// Abbreviates the documentation notes in place.
    pub fn abbreviate_documentation(&mut self) {
        self.documentation_notes = abbreviate(&self.documentation_notes);
    }

    /// Runs the module behind `page` on `input` and appends its note to the
    /// page's notes. Pages without a notes field do nothing.
    pub async fn run_module(
        &mut self,
        client: &dyn CompletionClient,
        page: Page,
        input: &str,
    ) -> Result<(), ModuleError> {
        let Some(field) = page.notes_field() else {
            return Ok(());
        };

        let note = match page {
            Page::SymptomChecker => {
                let profile = self.profile.as_ref().ok_or(ModuleError::NoProfile)?;
                assistant::check_symptom(client, profile, input).await?
            }
            Page::DocumentationHelper => assistant::document(input),
            Page::PatientEducation => assistant::educate(client, input).await?,
            _ => return Ok(()),
        };

        self.append_note(field, &note);
        Ok(())
    }

    /// Sends a CuraAI question and records the answer in the history.
    ///
    /// Nothing is recorded when the call fails.
    pub async fn ask_curaai(
        &mut self,
        client: &dyn CompletionClient,
        query: &str,
    ) -> Result<(), CompletionError> {
        let answer = assistant::ask(client, &prompt::clinical_question_prompt(query)).await?;
        self.record_answer(query.to_string(), answer);
        Ok(())
    }

    pub fn record_answer(&mut self, query: String, response: String) {
        self.qa_history.push(QaEntry { query, response });
    }

    /// History in insertion order.
    pub fn qa_history(&self) -> &[QaEntry] {
        &self.qa_history
    }

    /// History as displayed, most recent first.
    pub fn qa_history_newest_first(&self) -> impl Iterator<Item = &QaEntry> {
        self.qa_history.iter().rev()
    }

    pub fn record_feedback(&mut self, feedback: String) {
        self.feedback.push(feedback);
    }

    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }
}
