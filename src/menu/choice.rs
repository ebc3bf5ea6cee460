/// Menu entries in display order; the number is the position plus one.
pub const MENU_ITEMS: &[&str] = &[
    "Symptom Checker",
    "Documentation Helper",
    "Patient Education",
    "CuraAI (Ask the AI anything)",
    "View/Export Patient Notes",
    "Quit",
];

/// A parsed menu selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    SymptomChecker,
    DocumentationHelper,
    PatientEducation,
    CuraAi,
    ViewNotes,
    Quit,
    Invalid(String),
}

pub fn parse_choice(input: &str) -> MenuChoice {
    match input.trim() {
        "1" => MenuChoice::SymptomChecker,
        "2" => MenuChoice::DocumentationHelper,
        "3" => MenuChoice::PatientEducation,
        "4" => MenuChoice::CuraAi,
        "5" => MenuChoice::ViewNotes,
        "6" => MenuChoice::Quit,
        other => MenuChoice::Invalid(other.to_string()),
    }
}
