//! Orphan manifest output

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::Path;

use changepack_fs::{LINE_ENDING, MANIFEST_HEADER, io};

use crate::{Exclusions, Result};

/// Render the manifest text: header, then one name per line.
pub fn render_manifest<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut content = String::from(MANIFEST_HEADER);
    content.push_str(LINE_ENDING);
    for name in names {
        content.push_str(name);
        content.push_str(LINE_ENDING);
    }
    content
}

/// Write the manifest to `path`, replacing any previous one.
///
/// Names become text only here, lossily for non-UTF-8 names. Excluded
/// names are dropped from the file only; the caller's set is left as it
/// is. Returns the names that were written.
pub fn write_manifest(
    path: &Path,
    orphans: &BTreeSet<OsString>,
    exclusions: &Exclusions,
) -> Result<Vec<String>> {
    let listed: Vec<String> = orphans
        .iter()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !exclusions.is_excluded(name))
        .collect();

    io::write_atomic(path, render_manifest(listed.iter().map(String::as_str)).as_bytes())?;

    tracing::info!(
        path = %path.display(),
        listed = listed.len(),
        dropped = orphans.len() - listed.len(),
        "wrote manifest"
    );
    Ok(listed)
}
