use anyhow::Result;
use clap::Parser;

use nurse_assist::cli::commands::{abbreviate, menu, session, topics};
use nurse_assist::cli::{Args, Command, exit_code};
use nurse_assist::config::ResolveOptions;
use nurse_assist::logging;
use nurse_assist::ui::Style;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the key may come from the real environment.
    let dotenv = dotenvy::dotenv();

    let args = Args::parse();
    logging::init(args.verbose);

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

async fn run(args: Args) -> Result<()> {
    let options = ResolveOptions {
        model: args.model,
        endpoint: args.endpoint,
        notes_dir: args.notes_dir,
    };

    match args.command {
        None | Some(Command::Menu) => menu::run(&options).await,
        Some(Command::Session) => session::run(&options).await,
        Some(Command::Abbreviate { file }) => abbreviate::run(file.as_deref()),
        Some(Command::Topics) => {
            topics::print_topics();
            Ok(())
        }
    }
}
