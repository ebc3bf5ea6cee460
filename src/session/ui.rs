//! Output helpers for the interactive session.

use crate::patient::PatientProfile;
use crate::ui::{Style, error_line};

use super::state::QaEntry;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Interactive Session",
        Style::header("nurse"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::hint("Pick a page to open it; Esc on the page list ends the session.")
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_title(title: &str) {
    println!();
    println!("{}", Style::header(title));
}

/// Shows the saved profile after each page.
pub fn print_profile(profile: Option<&PatientProfile>) {
    let Some(profile) = profile else {
        return;
    };
    println!("{}", Style::secondary("---"));
    println!("{}", Style::header("Current Patient Profile:"));
    for (label, value) in profile.summary() {
        println!("  {:10} {}", Style::label(label), Style::value(value));
    }
    println!();
}

pub fn print_notes(label: &str, notes: &str) {
    println!("{}", Style::label(label));
    if notes.trim().is_empty() {
        println!("  {}", Style::secondary("(empty)"));
    } else {
        for line in notes.lines() {
            println!("  {line}");
        }
    }
    println!();
}

pub fn print_history<'a>(history: impl Iterator<Item = &'a QaEntry>) {
    let mut history = history.peekable();
    if history.peek().is_none() {
        return;
    }
    println!();
    println!("{}", Style::header("CuraAI History"));
    for entry in history {
        println!("{} {}", Style::label("Query:"), entry.query);
        println!("{} {}", Style::label("Response:"), Style::answer(&entry.response));
        println!("{}", Style::secondary("---"));
    }
}

pub fn print_success(message: &str) {
    println!("{} {message}", Style::success("✓"));
}

pub fn print_warning(message: &str) {
    println!("{}", Style::warning(message));
}

pub fn print_error(message: &str) {
    println!("{}", error_line(message));
    println!();
}
