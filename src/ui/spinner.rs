use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner drawn on stderr while waiting for the AI service.
///
/// Clears itself when dropped.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let progress_bar = ProgressBar::new_spinner();
        // The template is a constant, so only a typo here could fail.
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(TICKS)
            .template("{spinner} {msg}")
        {
            progress_bar.set_style(style);
        }
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }

    /// Spinner shown while a completion request is in flight.
    pub fn asking() -> Self {
        Self::new("Asking CuraAI...")
    }

    pub fn stop(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
