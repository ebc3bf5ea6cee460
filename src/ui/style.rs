//! Consistent styling for terminal output, using owo-colors.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Section and page titles (e.g. "Patient Intake")
    pub fn header<T: Display>(text: T) -> String {
        format!("{}", text.bold())
    }

    /// Field labels (e.g. "name", "age")
    pub fn label<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// Field values
    pub fn value<T: Display>(text: T) -> String {
        format!("{}", text.cyan())
    }

    pub fn secondary<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    pub fn success<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    pub fn error<T: Display>(text: T) -> String {
        format!("{}", text.red().bold())
    }

    pub fn warning<T: Display>(text: T) -> String {
        format!("{}", text.yellow())
    }

    /// Menu numbers and command names
    pub fn command<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    /// Text produced by the AI service
    pub fn answer<T: Display>(text: T) -> String {
        format!("{}", text.italic())
    }

    pub fn hint<T: Display>(text: T) -> String {
        format!("{}", text.dimmed().italic())
    }

    pub fn version<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }
}
