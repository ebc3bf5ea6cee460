use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nurse")]
#[command(about = "Nurse assistant CLI: symptom checks, documentation shorthand and patient education")]
#[command(version)]
pub struct Args {
    /// Model name
    #[arg(short = 'm', long, global = true)]
    pub model: Option<String>,

    /// API endpoint URL (OpenAI-compatible)
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Directory exported notes are written to
    #[arg(long, global = true)]
    pub notes_dir: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Numbered menu read from stdin (default)
    Menu,
    /// Interactive session with a page selector
    Session,
    /// Abbreviate notes from a file or stdin into nurse shorthand
    Abbreviate {
        /// File to read (reads from stdin if not provided)
        file: Option<PathBuf>,
    },
    /// List built-in patient education topics
    Topics,
}
