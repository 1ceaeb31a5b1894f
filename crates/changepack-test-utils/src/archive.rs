//! Read-back helpers for zip archives written under test.

use std::fs;
use std::io::Read;
use std::path::Path;

/// Entry names of the archive at `path`, in central-directory order.
///
/// # Panics
/// Panics if the file is missing or not a valid zip archive.
pub fn entry_names(path: &Path) -> Vec<String> {
    entries(path).into_iter().map(|(name, _)| name).collect()
}

/// Entry names and contents, in write order.
///
/// # Panics
/// Panics if the file is missing or not a valid zip archive.
pub fn entries(path: &Path) -> Vec<(String, Vec<u8>)> {
    let mut archive = open(path);
    (0..archive.len())
        .map(|idx| {
            let mut entry = archive.by_index(idx).unwrap();
            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes).unwrap();
            (entry.name().to_string(), bytes)
        })
        .collect()
}

/// Contents of the entry named `name`.
///
/// # Panics
/// Panics if the archive or the entry cannot be read.
pub fn entry_bytes(path: &Path, name: &str) -> Vec<u8> {
    let mut archive = open(path);
    let mut entry = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("No entry {name} in {}", path.display()));
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes).unwrap();
    bytes
}

fn open(path: &Path) -> zip::ZipArchive<fs::File> {
    let file = fs::File::open(path)
        .unwrap_or_else(|_| panic!("Could not open archive: {}", path.display()));
    zip::ZipArchive::new(file)
        .unwrap_or_else(|_| panic!("Not a zip archive: {}", path.display()))
}
