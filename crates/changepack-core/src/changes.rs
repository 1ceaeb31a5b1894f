//! Change detection: destination files that are new or differ from source

use std::path::{Path, PathBuf};

use changepack_fs::{NormalizedPath, io, walk};
use serde::Serialize;

use crate::{Exclusions, Result};

/// Why a destination file was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// No file at the same relative path in the source
    New,
    /// A source file exists there but its bytes differ
    Modified,
}

/// A destination file selected for packaging
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangedFile {
    /// Path under the destination root, as produced by the walk
    pub path: PathBuf,
    /// Destination-relative path, also used as the archive entry name
    pub relative: NormalizedPath,
    pub kind: ChangeKind,
}

/// Every destination file that is new or content-different.
///
/// The destination is walked recursively; each file's relative path is
/// joined onto `source_root` and compared with [`io::files_equal`]. Excluded
/// paths are dropped before comparison. Order follows the walk.
pub fn compute_changed_or_new(
    source_root: &Path,
    destination_root: &Path,
    exclusions: &Exclusions,
) -> Result<Vec<ChangedFile>> {
    let mut changed = Vec::new();
    let mut scanned = 0usize;

    for path in walk::walk_files(destination_root)? {
        scanned += 1;
        let (Ok(native), Some(relative)) = (
            path.strip_prefix(destination_root),
            NormalizedPath::relative_to(&path, destination_root),
        ) else {
            tracing::warn!(path = %path.display(), "walked path outside destination root");
            continue;
        };

        if exclusions.is_excluded_path(&path, destination_root) {
            tracing::debug!(path = %relative, "excluded");
            continue;
        }

        let counterpart = source_root.join(native);
        let kind = if !counterpart.is_file() {
            ChangeKind::New
        } else if !io::files_equal(&path, &counterpart)? {
            ChangeKind::Modified
        } else {
            continue;
        };

        tracing::debug!(path = %relative, ?kind, "selected");
        changed.push(ChangedFile {
            path,
            relative,
            kind,
        });
    }

    tracing::debug!(scanned, changed = changed.len(), "compared destination tree");
    Ok(changed)
}
