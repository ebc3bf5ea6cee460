use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, Editor, InquireError, Select, Text};

use super::page::{NotesField, Page, PageAction};
use super::state::{ModuleError, SessionState};
use super::ui;
use crate::completion::CompletionClient;
use crate::patient::{Age, MAX_AGE, MIN_AGE, PatientProfile};
use crate::ui::{Spinner, is_prompt_cancelled};

/// An interactive session over the seven pages.
pub struct InteractiveSession<'a> {
    client: &'a dyn CompletionClient,
    state: SessionState,
    render_config: RenderConfig<'static>,
}

/// True when the error is the user pressing Esc or Ctrl+C inside a page.
fn is_cancelled(err: &anyhow::Error) -> bool {
    err.downcast_ref::<InquireError>()
        .is_some_and(is_prompt_cancelled)
}

impl<'a> InteractiveSession<'a> {
    pub fn new(client: &'a dyn CompletionClient) -> Self {
        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        Self {
            client,
            state: SessionState::new(),
            render_config,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        loop {
            let selection = Select::new("Go to...", Page::ALL.to_vec())
                .with_render_config(self.render_config)
                .with_page_size(Page::ALL.len())
                .prompt();

            let page = match selection {
                Ok(page) => page,
                Err(err) if is_prompt_cancelled(&err) => break,
                Err(err) => return Err(err.into()),
            };

            tracing::debug!(page = page.name(), "opening page");
            ui::print_title(page.title());

            match self.show(page).await {
                Ok(()) => {}
                // Esc inside a page goes back to the page list.
                Err(err) if is_cancelled(&err) => println!(),
                Err(err) => return Err(err),
            }

            ui::print_profile(self.state.profile());
        }

        self.state.clear();
        ui::print_goodbye();
        Ok(())
    }

    async fn show(&mut self, page: Page) -> Result<()> {
        match page {
            Page::PatientIntake => self.patient_intake(),
            Page::SymptomChecker | Page::DocumentationHelper | Page::PatientEducation => {
                self.module_page(page).await
            }
            Page::CuraAi => self.curaai().await,
            Page::CustomQuestion => {
                println!("Coming soon! Build your own Q&A modules.");
                Ok(())
            }
            Page::Feedback => self.feedback(),
        }
    }

    fn patient_intake(&mut self) -> Result<()> {
        let name = Text::new("Patient Name")
            .with_render_config(self.render_config)
            .with_validator(|input: &str| {
                Ok(if input.trim().is_empty() {
                    Validation::Invalid("Patient name is required".into())
                } else {
                    Validation::Valid
                })
            })
            .prompt()?;

        let age = CustomType::<i64>::new("Patient Age")
            .with_render_config(self.render_config)
            .with_error_message("Please type a whole number")
            .with_help_message(&format!("{MIN_AGE}-{MAX_AGE}"))
            .with_validator(|years: &i64| {
                Ok(match Age::new(*years) {
                    Ok(_) => Validation::Valid,
                    Err(err) => Validation::Invalid(err.to_string().into()),
                })
            })
            .prompt()?;

        let save = Confirm::new("Save Patient Profile?")
            .with_render_config(self.render_config)
            .with_default(true)
            .prompt()?;

        if save {
            let age = Age::new(age)?;
            self.state
                .save_profile(PatientProfile::new(name.trim(), age));
            ui::print_success("Patient profile saved!");
        }

        self.edit_notes_if_wanted(NotesField::Patient)
    }

    fn edit_notes_if_wanted(&mut self, field: NotesField) -> Result<()> {
        ui::print_notes(field.label(), self.state.notes(field));
        let edit = Confirm::new(&format!("Edit {}?", field.label()))
            .with_render_config(self.render_config)
            .with_default(false)
            .prompt()?;
        if edit {
            self.edit_notes(field)?;
        }
        Ok(())
    }

    fn edit_notes(&mut self, field: NotesField) -> Result<()> {
        let text = Editor::new(field.label())
            .with_render_config(self.render_config)
            .with_predefined_text(self.state.notes(field))
            .with_file_extension(".txt")
            .prompt()?;
        self.state.set_notes(field, text);
        ui::print_success("Notes updated.");
        Ok(())
    }

    async fn module_page(&mut self, page: Page) -> Result<()> {
        let Some(field) = page.notes_field() else {
            return Ok(());
        };

        loop {
            ui::print_notes(field.label(), self.state.notes(field));

            let actions = page.actions();
            let labels: Vec<&str> = actions.iter().map(|a| page.action_label(*a)).collect();
            let choice = Select::new("Action", labels)
                .with_render_config(self.render_config)
                .raw_prompt()?;

            match actions[choice.index] {
                PageAction::Run => self.run_module(page, field).await?,
                PageAction::Abbreviate => {
                    self.state.abbreviate_documentation();
                    ui::print_success("Notes abbreviated.");
                }
                PageAction::EditNotes => self.edit_notes(field)?,
                PageAction::Back => return Ok(()),
            }
        }
    }

    async fn run_module(&mut self, page: Page, field: NotesField) -> Result<()> {
        let (message, warning) = match page {
            Page::SymptomChecker => {
                if self.state.profile().is_none() {
                    ui::print_warning(&ModuleError::NoProfile.to_string());
                    return Ok(());
                }
                ("Main symptom", "Please enter a symptom.")
            }
            Page::DocumentationHelper => ("Documentation", "Please enter documentation notes."),
            Page::PatientEducation => (
                "Education topic (CHF, diabetes, or custom)",
                "Please enter a topic.",
            ),
            _ => return Ok(()),
        };
        let Some(input) = self.ask_required(message, warning)? else {
            return Ok(());
        };

        let spinner = (page != Page::DocumentationHelper).then(Spinner::asking);
        let result = self.state.run_module(self.client, page, &input).await;
        if let Some(spinner) = spinner {
            spinner.stop();
        }

        match result {
            Ok(()) => ui::print_success(&format!("Added to {}.", field.label())),
            Err(err) => {
                tracing::warn!(error = %err, page = page.name(), "module failed");
                ui::print_error(&err.to_string());
            }
        }
        Ok(())
    }

    /// Prompts for text; prints `warning` and returns `None` when blank.
    fn ask_required(&self, message: &str, warning: &str) -> Result<Option<String>> {
        let text = Text::new(message)
            .with_render_config(self.render_config)
            .prompt()?;
        let text = text.trim();
        if text.is_empty() {
            ui::print_warning(warning);
            return Ok(None);
        }
        Ok(Some(text.to_string()))
    }

    async fn curaai(&mut self) -> Result<()> {
        if let Some(query) = self.ask_required(
            "Enter any clinical question or request here:",
            "Please enter a question.",
        )? {
            let spinner = Spinner::asking();
            let result = self.state.ask_curaai(self.client, &query).await;
            spinner.stop();

            match result {
                Ok(()) => ui::print_success("CuraAI response added to history."),
                Err(err) => {
                    tracing::warn!(error = %err, "completion failed");
                    ui::print_error(&err.to_string());
                }
            }
        }

        ui::print_history(self.state.qa_history_newest_first());
        Ok(())
    }

    fn feedback(&mut self) -> Result<()> {
        let feedback = Text::new("We want your feedback:")
            .with_render_config(self.render_config)
            .prompt()?;
        if !feedback.trim().is_empty() {
            self.state.record_feedback(feedback.trim().to_string());
            tracing::info!(
                len = feedback.len(),
                total = self.state.feedback().len(),
                "feedback received"
            );
        }
        ui::print_success("Thanks for your feedback!");
        Ok(())
    }
}
