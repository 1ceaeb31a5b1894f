//! Archive packaging
//!
//! Writes the manifest and every changed file into the archive after two
//! operator checkpoints:
//!
//! ```text
//! NoArchive ───────────────────────────────────────────► Written
//! ArchiveExists ─┬─ Proceed ─► (lock check) ─► Overwritten ─► Written
//!                └─ Cancel ──► Cancelled
//! ArchiveLocked ─┬─ Proceed ─► Written
//!                └─ Cancel ──► Cancelled
//! ```
//!
//! The lock check runs on the existing file, so both prompts can fire in
//! one run and a cancel at either one leaves the old archive untouched.
//! The new archive is built beside the old one and replaces it only once
//! complete; a failed write leaves the old archive, or no archive, behind.

use std::path::{Path, PathBuf};

use changepack_fs::{ArchiveWriter, NormalizedPath, io};
use serde::Serialize;

use crate::{ChangedFile, Error, Result};

/// A decision point that needs the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Prompt {
    /// The archive file already exists
    ArchiveExists,
    /// The archive file seems to be held by another process
    ArchiveLocked,
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArchiveExists => write!(f, "archive already exists"),
            Self::ArchiveLocked => write!(f, "archive appears to be in use"),
        }
    }
}

/// The operator's answer to a [`Prompt`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Overwrite / continue
    Proceed,
    Cancel,
}

/// Source of operator decisions.
///
/// The CLI answers from the console; tests answer from a script.
pub trait ConfirmationPort {
    fn confirm(&mut self, prompt: Prompt, archive: &Path) -> Result<Decision>;
}

/// What to write, and where
#[derive(Debug, Clone)]
pub struct ArchivePlan<'a> {
    pub archive: PathBuf,
    pub manifest: PathBuf,
    pub files: &'a [ChangedFile],
}

impl ArchivePlan<'_> {
    /// Entry name for the manifest: its file name, at the archive root.
    pub fn manifest_entry(&self) -> NormalizedPath {
        let name = self
            .manifest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        NormalizedPath::new(name)
    }
}

/// Result of a successful packaging step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageOutcome {
    /// Absolute path of the written archive
    pub archive: PathBuf,
    /// Entry names in write order; the manifest comes first
    pub entries: Vec<NormalizedPath>,
    /// Whether a previous archive was replaced
    pub overwritten: bool,
}

fn ask(confirm: &mut dyn ConfirmationPort, prompt: Prompt, archive: &Path) -> Result<()> {
    match confirm.confirm(prompt, archive)? {
        Decision::Proceed => {
            tracing::debug!(%prompt, "operator chose to proceed");
            Ok(())
        }
        Decision::Cancel => {
            tracing::debug!(%prompt, "operator cancelled");
            Err(Error::UserCancelled { prompt })
        }
    }
}

/// Build the archive described by `plan`.
pub fn package_archive(
    plan: &ArchivePlan<'_>,
    confirm: &mut dyn ConfirmationPort,
) -> Result<PackageOutcome> {
    let archive = plan.archive.as_path();
    let existed = archive.exists();

    if existed {
        ask(confirm, Prompt::ArchiveExists, archive)?;
    }

    if io::is_locked(archive) {
        tracing::warn!(path = %archive.display(), "archive appears to be in use");
        ask(confirm, Prompt::ArchiveLocked, archive)?;
    }

    let mut writer = ArchiveWriter::create(archive)?;
    writer.add_file(&plan.manifest, &plan.manifest_entry())?;
    for file in plan.files {
        writer.add_file(&file.path, &file.relative)?;
    }
    let entries = writer.finish()?;

    let absolute = dunce::canonicalize(archive).map_err(|e| changepack_fs::Error::io(archive, e))?;
    tracing::info!(path = %absolute.display(), entries = entries.len(), "wrote archive");

    Ok(PackageOutcome {
        archive: absolute,
        entries,
        overwritten: existed,
    })
}
