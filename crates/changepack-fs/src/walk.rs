//! Directory enumeration

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{Error, Result};

fn walk_error(root: &Path, source: walkdir::Error) -> Error {
    let path = source.path().unwrap_or(root).to_path_buf();
    Error::Walk { path, source }
}

/// Names of the files directly inside `dir`.
///
/// Subdirectories are skipped and nothing below depth 1 is visited. Names
/// are kept as the OS returned them.
pub fn top_level_file_names(dir: &Path) -> Result<BTreeSet<OsString>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let mut names = BTreeSet::new();

    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            names.insert(entry.file_name());
        }
    }

    Ok(names)
}

/// Every file under `root`, recursively, in a stable order.
///
/// Each returned path is `root` joined with the file's relative path, so
/// it always starts with the root exactly as it was passed in.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if entry.path().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Whether at least one file exists anywhere under `root`.
///
/// Stops at the first file found.
pub fn contains_any_file(root: &Path) -> Result<bool> {
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if entry.path().is_file() {
            return Ok(true);
        }
    }
    Ok(false)
}
