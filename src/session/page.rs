use std::fmt;

/// Pages reachable from the selector, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    PatientIntake,
    SymptomChecker,
    DocumentationHelper,
    PatientEducation,
    CuraAi,
    CustomQuestion,
    Feedback,
}

/// Editable free-text note fields owned by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesField {
    Patient,
    Symptom,
    Documentation,
    Education,
}

/// Actions offered on pages that own a notes field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Run the page's assistant module and append the result to the notes.
    Run,
    /// Abbreviate the page's notes in place.
    Abbreviate,
    EditNotes,
    Back,
}

impl Page {
    pub const ALL: [Self; 7] = [
        Self::PatientIntake,
        Self::SymptomChecker,
        Self::DocumentationHelper,
        Self::PatientEducation,
        Self::CuraAi,
        Self::CustomQuestion,
        Self::Feedback,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::PatientIntake => "Patient Intake",
            Self::SymptomChecker => "Symptom Checker",
            Self::DocumentationHelper => "Documentation Helper",
            Self::PatientEducation => "Patient Education",
            Self::CuraAi => "CuraAI",
            Self::CustomQuestion => "Custom Question",
            Self::Feedback => "Feedback",
        }
    }

    /// Heading printed when the page opens.
    pub const fn title(self) -> &'static str {
        match self {
            Self::CuraAi => "CuraAI: AI-Powered Clinical Assistant",
            Self::CustomQuestion => "Custom Clinical Question",
            other => other.name(),
        }
    }

    pub const fn notes_field(self) -> Option<NotesField> {
        match self {
            Self::PatientIntake => Some(NotesField::Patient),
            Self::SymptomChecker => Some(NotesField::Symptom),
            Self::DocumentationHelper => Some(NotesField::Documentation),
            Self::PatientEducation => Some(NotesField::Education),
            Self::CuraAi | Self::CustomQuestion | Self::Feedback => None,
        }
    }

    /// Action menu for the module pages; empty for the others.
    pub const fn actions(self) -> &'static [PageAction] {
        match self {
            Self::SymptomChecker | Self::PatientEducation => {
                &[PageAction::Run, PageAction::EditNotes, PageAction::Back]
            }
            Self::DocumentationHelper => &[
                PageAction::Run,
                PageAction::Abbreviate,
                PageAction::EditNotes,
                PageAction::Back,
            ],
            _ => &[],
        }
    }

    pub const fn action_label(self, action: PageAction) -> &'static str {
        match (self, action) {
            (Self::SymptomChecker, PageAction::Run) => "Check a symptom",
            (Self::DocumentationHelper, PageAction::Run) => "Add documentation",
            (Self::PatientEducation, PageAction::Run) => "Look up an education topic",
            (_, PageAction::Run) => "Run",
            (_, PageAction::Abbreviate) => "Abbreviate notes (nurse talk)",
            (_, PageAction::EditNotes) => "Edit notes",
            (_, PageAction::Back) => "Back to pages",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl NotesField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Patient => "Patient Notes",
            Self::Symptom => "Symptom Checker Notes",
            Self::Documentation => "Documentation Helper Notes",
            Self::Education => "Patient Education Notes",
        }
    }
}
