//! Console interaction: folder prompts, archive confirmations, exit pause
//!
//! On a terminal, folders are read with dialoguer and confirmations with a
//! single key press. When stdin is not a terminal every answer is the first
//! character of one line, so scripted input (or a closed stdin) behaves
//! predictably.

use std::io::{self, BufRead, Write};
use std::path::Path;

use changepack_core::{ConfirmationPort, Decision, Prompt};
use colored::Colorize;
use console::{Key, Term};
use dialoguer::Input;

use crate::error::Result;

/// Ask for a folder path.
pub fn ask_folder(question: &str) -> Result<String> {
    let term = Term::stdout();
    if term.is_term() {
        let answer: String = Input::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?;
        return Ok(answer);
    }

    println!("{question}:");
    Ok(read_line()?)
}

/// Print the exit hint and wait for a key (or a line).
pub fn pause() {
    let term = Term::stderr();
    let _ = term.write_line("Press any key to exit.");
    if Term::stdout().is_term() {
        let _ = Term::stdout().read_key();
    } else {
        let _ = read_line();
    }
}

fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// What the operator pressed, reduced to the keys the prompts care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Char(char),
    Escape,
    Other,
}

impl Answer {
    fn from_key(key: Key) -> Self {
        match key {
            Key::Char(c) => Self::Char(c),
            Key::Escape => Self::Escape,
            _ => Self::Other,
        }
    }

    fn from_line(line: &str) -> Self {
        match line.chars().next() {
            Some('\u{1b}') => Self::Escape,
            Some(c) => Self::Char(c),
            None => Self::Other,
        }
    }
}

/// `o`/`O` overwrites; anything else cancels.
fn overwrite_decision(answer: Answer) -> Decision {
    match answer {
        Answer::Char('o' | 'O') => Decision::Proceed,
        _ => Decision::Cancel,
    }
}

/// Escape cancels; anything else continues.
fn locked_decision(answer: Answer) -> Decision {
    match answer {
        Answer::Escape => Decision::Cancel,
        _ => Decision::Proceed,
    }
}

/// Confirmation port backed by the console.
///
/// `--overwrite` and `--ignore-lock` pre-answer the matching prompt.
#[derive(Debug)]
pub struct ConsoleConfirm {
    overwrite: bool,
    ignore_lock: bool,
}

impl ConsoleConfirm {
    pub fn new(overwrite: bool, ignore_lock: bool) -> Self {
        Self {
            overwrite,
            ignore_lock,
        }
    }

    fn read_answer(&self) -> io::Result<Answer> {
        let term = Term::stdout();
        if term.is_term() {
            let key = term.read_key()?;
            term.write_line("")?;
            Ok(Answer::from_key(key))
        } else {
            Ok(Answer::from_line(&read_line()?))
        }
    }
}

impl ConfirmationPort for ConsoleConfirm {
    fn confirm(&mut self, prompt: Prompt, archive: &Path) -> changepack_core::Result<Decision> {
        let name = archive
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| archive.display().to_string());

        let (message, preset) = match prompt {
            Prompt::ArchiveExists => (
                format!("{name} already exists. Do you want to overwrite file or cancel? (o/esc)?"),
                self.overwrite,
            ),
            Prompt::ArchiveLocked => (
                format!("{name} seems to be in use. Do you want to continue or cancel? (c/esc)"),
                self.ignore_lock,
            ),
        };

        if preset {
            tracing::debug!(%prompt, "answered by flag");
            return Ok(Decision::Proceed);
        }

        println!("{}", message.yellow());
        let _ = io::stdout().flush();
        let answer = self
            .read_answer()
            .map_err(|e| changepack_core::Error::Prompt {
                message: e.to_string(),
            })?;

        Ok(match prompt {
            Prompt::ArchiveExists => overwrite_decision(answer),
            Prompt::ArchiveLocked => locked_decision(answer),
        })
    }
}
