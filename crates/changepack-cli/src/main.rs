//! changepack CLI
//!
//! Compares two folders, writes the orphan manifest and packs changed files.

mod cli;
mod error;
mod interactive;
mod logging;
mod output;

use clap::Parser;
use colored::Colorize;

use changepack_core::{Settings, Workflow};
use cli::Cli;
use error::{CliError, Result};
use interactive::ConsoleConfirm;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: could not initialise logging: {}", "warning".yellow(), e);
    }

    let pause = !cli.no_pause;
    let code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            output::print_failure(&e);
            e.exit_code()
        }
    };

    if pause {
        interactive::pause();
    }
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) if !path.is_file() => {
            return Err(CliError::user(format!(
                "Settings file not found: {}",
                path.display()
            )));
        }
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let source = match cli.source {
        Some(source) => source,
        None => interactive::ask_folder("Enter path of the source folder")?,
    };
    let destination = match cli.destination {
        Some(destination) => destination,
        None => interactive::ask_folder("Enter path of the destination folder")?,
    };

    let workflow = Workflow::new(settings);
    let mut confirm = ConsoleConfirm::new(cli.overwrite, cli.ignore_lock);
    let report = workflow.run(&source, &destination, &mut confirm)?;

    if cli.json {
        output::print_json(&report)
    } else {
        output::print_report(&report);
        Ok(())
    }
}
