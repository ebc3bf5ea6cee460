//! Prompt templates sent to the completion service.

use crate::patient::PatientProfile;

/// Prompt asking for the three most likely causes of `symptom`.
pub fn symptom_prompt(profile: &PatientProfile, symptom: &str) -> String {
    let gender = profile.gender.as_deref().unwrap_or("patient");
    format!(
        "A {} year old {gender} with the following main symptom: {symptom}. \
         Give me the 3 most likely nursing-relevant causes \
         (not dramatic WebMD stuff, just common issues):",
        profile.age
    )
}

/// Prompt asking for bullet-point patient education on `topic`.
pub fn education_prompt(topic: &str) -> String {
    format!(
        "Summarize education for a nurse to give a patient on '{topic}', \
         simple and clear, bullet points."
    )
}

/// Prompt used by the interactive CuraAI page.
pub fn clinical_question_prompt(query: &str) -> String {
    format!("Clinical question: {query}")
}
