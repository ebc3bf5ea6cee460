//! # nurse-assist - Nurse Assistant CLI
//!
//! `nurse` is a small demo assistant for nurses built on an OpenAI-compatible
//! chat completion endpoint. It has two frontends:
//!
//! - **Menu** (`nurse` / `nurse menu`): a numbered line-mode menu that
//!   collects a patient profile, runs the assistant modules and exports the
//!   resulting notes to a text file.
//! - **Session** (`nurse session`): an interactive page selector with
//!   editable notes per page and a CuraAI question history.
//!
//! ## Quick Start
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//!
//! # Line-mode menu
//! nurse
//!
//! # Interactive session
//! nurse session
//!
//! # Nurse shorthand without any AI call
//! echo "patient complains of shortness of breath" | nurse abbreviate
//! ```
//!
//! ## Configuration
//!
//! Optional settings live in `~/.config/nurse-assist/config.toml`:
//!
//! ```toml
//! [assistant]
//! model = "gpt-3.5-turbo"
//! endpoint = "https://api.openai.com"
//! api_key_env = "OPENAI_API_KEY"
//! max_tokens = 200
//! notes_dir = "."
//! ```

/// Nurse-style abbreviation table.
pub mod abbrev;

/// Assistant modules shared by both frontends.
pub mod assistant;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Completion client for OpenAI-compatible APIs.
pub mod completion;

/// Configuration file management.
pub mod config;

/// Patient education topics.
pub mod education;

/// Input reading from files and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// Line-mode menu frontend.
pub mod menu;

/// Timestamped notes and export.
pub mod notes;

/// XDG-style path utilities.
pub mod paths;

/// Patient profile and validation.
pub mod patient;

/// Interactive session frontend.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;
