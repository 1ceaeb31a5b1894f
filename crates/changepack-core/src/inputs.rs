//! Input resolution: validated source and destination roots

use std::path::{Path, PathBuf};

use changepack_fs::walk;
use serde::Serialize;

use crate::{Error, Result};

/// Which of the two roots a path belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RootRole {
    Source,
    Destination,
}

impl std::fmt::Display for RootRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// A validated pair of roots.
///
/// Paths are kept exactly as given; nothing is canonicalized, so every
/// path derived from a root begins with the root string the operator typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roots {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Validate the two roots.
///
/// Identical strings are rejected before the filesystem is touched. Each
/// root must then be a directory holding at least one file somewhere
/// below it; the source is checked first.
pub fn resolve_inputs(source: &str, destination: &str) -> Result<Roots> {
    if source == destination {
        return Err(Error::invalid_configuration(
            "Source and destination folder cannot point to the same location.",
        ));
    }

    let source = PathBuf::from(source);
    let destination = PathBuf::from(destination);

    ensure_populated(&source, RootRole::Source)?;
    ensure_populated(&destination, RootRole::Destination)?;

    tracing::debug!(
        source = %source.display(),
        destination = %destination.display(),
        "resolved roots"
    );
    Ok(Roots {
        source,
        destination,
    })
}

fn ensure_populated(root: &Path, role: RootRole) -> Result<()> {
    if !root.is_dir() {
        return Err(Error::MissingRoot {
            role,
            path: root.to_path_buf(),
        });
    }

    if walk::contains_any_file(root)? {
        return Ok(());
    }

    let path = root.to_path_buf();
    Err(match role {
        RootRole::Source => Error::EmptySource { path },
        RootRole::Destination => Error::EmptyDestination { path },
    })
}
