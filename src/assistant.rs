//! Nurse assistant modules shared by both frontends.
//!
//! Each module takes already-collected input and returns the note it
//! produced; prompting and printing stay in the frontends.

use crate::abbrev::abbreviate;
use crate::completion::{CompletionClient, CompletionError, prompt};
use crate::education::education_for;
use crate::notes::{NoteEntry, NoteKind};
use crate::patient::PatientProfile;

/// Asks for the three most likely causes of `symptom`.
pub async fn check_symptom(
    client: &dyn CompletionClient,
    profile: &PatientProfile,
    symptom: &str,
) -> Result<NoteEntry, CompletionError> {
    let suggestions = client
        .complete(&prompt::symptom_prompt(profile, symptom))
        .await?;
    Ok(NoteEntry::new(
        NoteKind::Symptom,
        Some(symptom.to_string()),
        suggestions,
    ))
}

/// Abbreviates documentation notes.
pub fn document(notes: &str) -> NoteEntry {
    NoteEntry::new(NoteKind::Documentation, None, abbreviate(notes))
}

/// Produces patient education for `topic`.
pub async fn educate(
    client: &dyn CompletionClient,
    topic: &str,
) -> Result<NoteEntry, CompletionError> {
    let content = education_for(client, topic).await?;
    Ok(NoteEntry::new(
        NoteKind::Education,
        Some(topic.trim().to_string()),
        content.text(),
    ))
}

/// Sends `prompt` as-is and returns the answer.
pub async fn ask(client: &dyn CompletionClient, prompt: &str) -> Result<String, CompletionError> {
    client.complete(prompt).await
}
