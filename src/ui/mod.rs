//! Terminal UI helpers shared by both frontends.

use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// `Error: <message>` line printed to stdout by both frontends when a
/// request fails.
pub fn error_line(message: impl std::fmt::Display) -> String {
    format!("{} {message}", Style::error("Error:"))
}

/// Check if the inquire error is a user cancellation/interruption.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}
