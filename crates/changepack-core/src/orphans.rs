//! Orphan detection: top-level names present only in the source

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::Path;

use changepack_fs::walk;

use crate::Result;

/// File names directly inside `source_root` that are not directly inside
/// `destination_root`.
///
/// Only depth-1 files are compared and only by name: nested files on
/// either side neither produce nor hide an orphan.
pub fn compute_orphans(
    source_root: &Path,
    destination_root: &Path,
) -> Result<BTreeSet<OsString>> {
    let source_names = walk::top_level_file_names(source_root)?;
    let destination_names = walk::top_level_file_names(destination_root)?;

    let orphans: BTreeSet<OsString> = source_names
        .difference(&destination_names)
        .cloned()
        .collect();

    tracing::debug!(
        source = source_names.len(),
        destination = destination_names.len(),
        orphans = orphans.len(),
        "compared top-level names"
    );
    Ok(orphans)
}
