use anyhow::Result;
use chrono::Local;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::choice::{MENU_ITEMS, MenuChoice, parse_choice};
use crate::assistant;
use crate::completion::{CompletionClient, CompletionError};
use crate::notes::{NoteLog, export_notes};
use crate::patient::{Age, PatientProfile};
use crate::ui::{Spinner, Style, error_line};

/// Drives the numbered menu over any line reader and writer.
///
/// End of input is treated like choosing Quit.
pub struct MenuRunner<'a, R, W> {
    client: &'a dyn CompletionClient,
    input: R,
    output: W,
    notes_dir: PathBuf,
    notes: NoteLog,
}

impl<'a, R: BufRead, W: Write> MenuRunner<'a, R, W> {
    pub fn new(client: &'a dyn CompletionClient, input: R, output: W, notes_dir: PathBuf) -> Self {
        Self {
            client,
            input,
            output,
            notes_dir,
            notes: NoteLog::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "{}\n",
            Style::header("Welcome to the Nurse Assistant CLI!")
        )?;

        let Some(profile) = self.collect_profile()? else {
            return self.goodbye();
        };
        tracing::debug!(age = profile.age.years(), "patient profile collected");

        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter a number: ")? else {
                break;
            };

            match parse_choice(&line) {
                MenuChoice::SymptomChecker => self.symptom_checker(&profile).await?,
                MenuChoice::DocumentationHelper => self.documentation_helper()?,
                MenuChoice::PatientEducation => self.patient_education().await?,
                MenuChoice::CuraAi => self.custom_question().await?,
                MenuChoice::ViewNotes => self.view_notes(&profile)?,
                MenuChoice::Quit => break,
                MenuChoice::Invalid(choice) => {
                    tracing::debug!(%choice, "invalid menu choice");
                    writeln!(self.output, "{}", Style::warning("Invalid choice."))?;
                }
            }
        }

        self.goodbye()
    }

    fn goodbye(&mut self) -> Result<()> {
        writeln!(self.output, "{}", Style::success("Goodbye!"))?;
        Ok(())
    }

    /// Writes `label` and reads one line, without the line terminator.
    ///
    /// Returns `None` at end of input. Bytes that are not UTF-8 are
    /// replaced rather than rejected.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Like [`Self::prompt`], but warns and returns `None` for blank input.
    fn prompt_required(&mut self, label: &str, what: &str) -> Result<Option<String>> {
        match self.prompt(label)? {
            Some(text) if !text.trim().is_empty() => Ok(Some(text.trim().to_string())),
            Some(_) => {
                writeln!(
                    self.output,
                    "{}",
                    Style::warning(format!("Please enter {what}."))
                )?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn collect_profile(&mut self) -> Result<Option<PatientProfile>> {
        writeln!(
            self.output,
            "{}",
            Style::header("--- Patient General Information ---")
        )?;

        let name = loop {
            let Some(name) = self.prompt("Patient Name: ")? else {
                return Ok(None);
            };
            if !name.trim().is_empty() {
                break name.trim().to_string();
            }
            writeln!(self.output, "{}", Style::warning("Patient name is required."))?;
        };

        let age = loop {
            let Some(age) = self.prompt("Age: ")? else {
                return Ok(None);
            };
            match Age::parse(&age) {
                Ok(age) => break age,
                Err(err) => writeln!(self.output, "{}", Style::warning(err))?,
            }
        };

        let mut fields = Vec::with_capacity(3);
        for label in ["Gender: ", "Known Allergies: ", "Other relevant info: "] {
            let Some(value) = self.prompt(label)? else {
                return Ok(None);
            };
            fields.push(value);
        }

        Ok(Some(
            PatientProfile::new(name, age)
                .with_gender(&fields[0])
                .with_allergies(&fields[1])
                .with_other(&fields[2]),
        ))
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", Style::header("Choose a module:"))?;
        for (index, item) in MENU_ITEMS.iter().enumerate() {
            writeln!(self.output, "{}. {item}", Style::command(index + 1))?;
        }
        Ok(())
    }

    fn report_failure(&mut self, err: &CompletionError) -> Result<()> {
        tracing::warn!(error = %err, "completion failed");
        writeln!(self.output, "{}", error_line(err))?;
        Ok(())
    }

    async fn symptom_checker(&mut self, profile: &PatientProfile) -> Result<()> {
        writeln!(self.output, "\n{}", Style::header("--- Symptom Checker ---"))?;
        let Some(symptom) = self.prompt_required("Enter the main symptom: ", "a symptom")? else {
            return Ok(());
        };

        let spinner = Spinner::asking();
        let result = assistant::check_symptom(self.client, profile, &symptom).await;
        spinner.stop();

        match result {
            Ok(note) => {
                writeln!(self.output, "\n{}", Style::header("Top 3 likely causes:"))?;
                writeln!(self.output, "{}", Style::answer(&note.body))?;
                self.notes.push(note);
            }
            Err(err) => self.report_failure(&err)?,
        }
        Ok(())
    }

    fn documentation_helper(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\n{}",
            Style::header("--- Documentation Helper ---")
        )?;
        let Some(text) =
            self.prompt_required("Enter your documentation notes: ", "documentation notes")?
        else {
            return Ok(());
        };

        let note = assistant::document(&text);
        writeln!(
            self.output,
            "\n{}\n{}",
            Style::header("Abbreviated (nurse talk) notes:"),
            note.body
        )?;
        self.notes.push(note);
        Ok(())
    }

    async fn patient_education(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", Style::header("--- Patient Education ---"))?;
        let Some(topic) = self.prompt_required(
            "Enter education topic (CHF, diabetes, meds, or custom): ",
            "a topic",
        )?
        else {
            return Ok(());
        };

        let spinner = Spinner::asking();
        let result = assistant::educate(self.client, &topic).await;
        spinner.stop();

        match result {
            Ok(note) => {
                writeln!(
                    self.output,
                    "\n{}\n{}",
                    Style::header("Patient Education Points:"),
                    Style::answer(&note.body)
                )?;
                self.notes.push(note);
            }
            Err(err) => self.report_failure(&err)?,
        }
        Ok(())
    }

    /// Free-form question; answers are never added to the notes.
    async fn custom_question(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\n{}",
            Style::header("--- Ask CuraAI (Nurse AI Assistant) ---")
        )?;
        let Some(query) = self.prompt_required("Ask your question: ", "a question")? else {
            return Ok(());
        };

        let spinner = Spinner::asking();
        let result = assistant::ask(self.client, &query).await;
        spinner.stop();

        match result {
            Ok(answer) => writeln!(
                self.output,
                "\n{}\n{}",
                Style::header("CuraAI says:"),
                Style::answer(answer)
            )?,
            Err(err) => self.report_failure(&err)?,
        }
        Ok(())
    }

    fn view_notes(&mut self, profile: &PatientProfile) -> Result<()> {
        writeln!(self.output, "\n{}", Style::header("--- Patient Notes ---"))?;
        if self.notes.is_empty() {
            writeln!(self.output, "{}", Style::secondary("No notes yet."))?;
        }
        for note in self.notes.iter() {
            writeln!(self.output, "{note}\n")?;
        }

        let Some(answer) = self.prompt("Save notes to file? (y/n): ")? else {
            return Ok(());
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }

        match export_notes(&self.notes, &profile.name, &self.notes_dir, Local::now()) {
            Ok(path) => writeln!(
                self.output,
                "{} Notes saved to {}",
                Style::success("✓"),
                Style::value(path.display())
            )?,
            Err(err) => {
                tracing::warn!("{err:#}");
                writeln!(self.output, "{}", error_line(format!("{err:#}")))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::completion::test_support::RecordingClient;
    use crate::notes::NoteKind;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    const PROFILE: &str = "Jane\n54\nfemale\npenicillin\n\n";

    async fn run_script(client: &RecordingClient, script: &str, dir: &Path) -> (String, NoteLog) {
        let input = Cursor::new(script.to_string());
        let mut runner = MenuRunner::new(client, input, Vec::new(), dir.to_path_buf());
        runner.run().await.unwrap();
        let output = String::from_utf8(runner.output.clone()).unwrap();
        (output, runner.notes.clone())
    }

    fn exported_files(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect()
    }

    #[tokio::test]
    async fn test_quit_after_profile() {
        let temp_dir = TempDir::new().unwrap();
        let client = RecordingClient::replying("unused");

        let (output, notes) = run_script(&client, &format!("{PROFILE}6\n"), temp_dir.path()).await;

        assert!(output.contains("Welcome to the Nurse Assistant CLI!"));
        assert!(output.contains("View/Export Patient Notes"));
        assert!(output.contains("Goodbye!"));
        assert!(notes.is_empty());
        assert!(client.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_age_is_reprompted_until_valid() {
        let temp_dir = TempDir::new().unwrap();
        let client = RecordingClient::replying("1. Anxiety");
        let script = "Jane\n-1\n121\nold\n54\nfemale\n\n\n1\nchest tightness\n6\n";

        let (output, notes) = run_script(&client, script, temp_dir.path()).await;

        assert_eq!(output.matches("between 0 and 120").count(), 3);
        assert_eq!(notes.len(), 1);
        assert!(client.prompts()[0].starts_with("A 54 year old female"));
    }

    #[tokio::test]
    async fn test_blank_name_is_reprompted() {
        let temp_dir = TempDir::new().unwrap();
        let client = RecordingClient::replying("unused");

        let (output, _) =
            run_script(&client, "\n  \nJane\n54\n\n\n\n6\n", temp_dir.path()).await;

        assert_eq!(output.matches("Patient name is required.").count(), 2);
        assert!(output.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn test_documentation_then_export() {
        let temp_dir = TempDir::new().unwrap();
        let client = RecordingClient::replying("unused");
        let script =
            format!("{PROFILE}2\npatient complains of shortness of breath\n5\ny\n6\n");

        let (output, notes) = run_script(&client, &script, temp_dir.path()).await;

        assert!(output.contains("pt c/o SOB"));
        assert!(output.contains("Notes saved to"));
        assert_eq!(notes.len(), 1);
        assert_eq!(notes.entries()[0].kind, NoteKind::Documentation);

        let files = exported_files(temp_dir.path());
        assert_eq!(files.len(), 1);
        let file_name = files[0].file_name().unwrap().to_str().unwrap().to_string();
        assert!(file_name.starts_with("notes_Jane_"));
        assert!(file_name.ends_with(".txt"));

        let contents = fs::read_to_string(&files[0]).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.trim_end().ends_with("DOC: pt c/o SOB"));
        assert!(client.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_export_declined_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let client = RecordingClient::replying("unused");
        let script = format!("{PROFILE}2\npatient stable\n5\nn\n6\n");

        let (output, _) = run_script(&client, &script, temp_dir.path()).await;

        assert!(output.contains("DOC: pt stable"));
        assert!(exported_files(temp_dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_export_keeps_note_order() {
        let temp_dir = TempDir::new().unwrap();
        let client = RecordingClient::replying("1. Viral\n2. Allergies\n3. Reflux");
        let script = format!("{PROFILE}1\ncough\n3\nCHF\n2\nhistory of falls\n5\nY\n6\n");

        let (_, notes) = run_script(&client, &script, temp_dir.path()).await;

        assert_eq!(notes.len(), 3);
        let files = exported_files(temp_dir.path());
        let contents = fs::read_to_string(&files[0]).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("SYMPTOM: cough | 1. Viral | 2. Allergies | 3. Reflux"));
        assert!(lines[1].contains("PT ED (CHF): CHF Education"));
        assert!(lines[2].ends_with("DOC: h/o falls"));
    }

    #[tokio::test]
    async fn test_education_canned_and_generated() {
        let temp_dir = TempDir::new().unwrap();
        let client = RecordingClient::replying("- Check INR regularly");
        let script = format!("{PROFILE}3\nchf\n3\nwarfarin\n6\n");

        let (output, notes) = run_script(&client, &script, temp_dir.path()).await;

        assert!(output.contains("CHF Education: Watch salt"));
        assert!(output.contains("- Check INR regularly"));
        assert_eq!(notes.len(), 2);
        let prompts = client.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("'warfarin'"));
    }

    #[tokio::test]
    async fn test_curaai_answer_not_added_to_notes() {
        let temp_dir = TempDir::new().unwrap();
        let client = RecordingClient::replying("Hold if HR < 60.");
        let script = format!("{PROFILE}4\nWhen do I hold metoprolol?\n6\n");

        let (output, notes) = run_script(&client, &script, temp_dir.path()).await;

        assert!(output.contains("CuraAI says:"));
        assert!(output.contains("Hold if HR < 60."));
        assert!(notes.is_empty());
        assert_eq!(client.prompts(), vec!["When do I hold metoprolol?".to_string()]);
    }

    #[tokio::test]
    async fn test_completion_failure_keeps_loop_running() {
        let temp_dir = TempDir::new().unwrap();
        let client = RecordingClient::failing();
        let script = format!("{PROFILE}1\nheadache\n4\nanything?\n2\npatient resting\n6\n");

        let (output, notes) = run_script(&client, &script, temp_dir.path()).await;

        assert_eq!(output.matches("Error:").count(), 2);
        assert!(output.contains("rate limiting"));
        assert!(output.contains("Goodbye!"));
        assert_eq!(notes.len(), 1);
        assert_eq!(notes.entries()[0].body, "pt resting");
    }

    #[tokio::test]
    async fn test_empty_input_skips_ai_call() {
        let temp_dir = TempDir::new().unwrap();
        let client = RecordingClient::replying("unused");
        let script = format!("{PROFILE}4\n   \n1\n\n6\n");

        let (output, notes) = run_script(&client, &script, temp_dir.path()).await;

        assert!(output.contains("Please enter a question."));
        assert!(output.contains("Please enter a symptom."));
        assert!(notes.is_empty());
        assert!(client.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_choice() {
        let temp_dir = TempDir::new().unwrap();
        let client = RecordingClient::replying("unused");

        let (output, _) = run_script(&client, &format!("{PROFILE}9\n6\n"), temp_dir.path()).await;

        assert!(output.contains("Invalid choice."));
    }

    #[tokio::test]
    async fn test_end_of_input_ends_session() {
        let temp_dir = TempDir::new().unwrap();
        let client = RecordingClient::replying("unused");

        let (output, _) = run_script(&client, &format!("{PROFILE}2\npatient ok\n"), temp_dir.path()).await;
        assert!(output.contains("Goodbye!"));

        let (output, _) = run_script(&client, "Jane\n", temp_dir.path()).await;
        assert!(output.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn test_non_utf8_line_is_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let client = RecordingClient::replying("unused");
        let mut script = format!("{PROFILE}2\npatient ok\n").into_bytes();
        script.extend_from_slice(&[0xff, 0xfe, b'\n']);
        script.extend_from_slice(b"5\ny\n6\n");

        let mut runner = MenuRunner::new(
            &client,
            Cursor::new(script),
            Vec::new(),
            temp_dir.path().to_path_buf(),
        );
        runner.run().await.unwrap();
        let output = String::from_utf8(runner.output).unwrap();

        assert!(output.contains("Invalid choice."));
        assert!(output.contains("Notes saved to"));
        assert!(output.contains("Goodbye!"));
        assert_eq!(exported_files(temp_dir.path()).len(), 1);
    }

    #[tokio::test]
    async fn test_view_notes_when_empty() {
        let temp_dir = TempDir::new().unwrap();
        let client = RecordingClient::replying("unused");

        let (output, _) = run_script(&client, &format!("{PROFILE}5\nn\n6\n"), temp_dir.path()).await;

        assert!(output.contains("No notes yet."));
    }

    #[tokio::test]
    async fn test_export_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let client = RecordingClient::replying("unused");
        let script = format!("{PROFILE}2\npatient ok\n5\ny\n6\n");

        let (output, notes) = run_script(&client, &script, &missing).await;

        assert!(output.contains("Failed to write notes file"));
        assert!(output.contains("Goodbye!"));
        assert_eq!(notes.len(), 1);
    }
}
