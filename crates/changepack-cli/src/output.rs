//! Report rendering

use changepack_core::{ChangeKind, ErrorKind, Report};
use colored::Colorize;

use crate::error::{CliError, Result};

/// Print the human-readable summary and the final status line.
pub fn print_report(report: &Report) {
    println!(
        "{} {} orphaned file(s) listed in {}",
        "Manifest".blue().bold(),
        report.orphans.len(),
        report.manifest.display().to_string().yellow()
    );
    for name in &report.orphans {
        println!("  {} {}", "-".red(), name);
    }

    println!(
        "{} {} changed or new file(s)",
        "Changes".blue().bold(),
        report.changed.len()
    );
    for file in &report.changed {
        let (prefix, label) = match file.kind {
            ChangeKind::New => ("+".green(), file.relative.as_str().green()),
            ChangeKind::Modified => ("~".yellow(), file.relative.as_str().yellow()),
        };
        println!("  {} {}", prefix, label);
    }

    println!();
    println!("{}", archive_status(report));
}

/// Print the report as pretty JSON.
///
/// The status line goes to stderr so stdout stays parseable.
pub fn print_json(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    eprintln!("{}", archive_status(report));
    Ok(())
}

fn archive_status(report: &Report) -> String {
    format!("Zip file created at: {}", report.package.archive.display())
}

/// Print the final status line for a failed run.
pub fn print_failure(error: &CliError) {
    match error.kind() {
        ErrorKind::UserCancelled => eprintln!("{}", error.to_string().yellow()),
        _ => eprintln!("{}: {}", "error".red().bold(), error),
    }
}
