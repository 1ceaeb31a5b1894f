//! Zip archive output

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::io::temp_path_for;
use crate::{Error, NormalizedPath, Result};

/// Streams files into a zip archive that replaces `path` on success.
///
/// Entries are written to a temporary sibling of `path`. Only
/// [`ArchiveWriter::finish`] moves it over the target, so a previous
/// archive stays intact until then. Dropping the writer unfinished, or a
/// failing `finish`, removes the temporary file.
pub struct ArchiveWriter {
    path: PathBuf,
    // Declared before `partial` so the handle is closed before removal
    zip: ZipWriter<File>,
    partial: PartialFile,
    entries: Vec<NormalizedPath>,
}

/// Removes the file at `path` when dropped, unless kept.
struct PartialFile {
    path: PathBuf,
    keep: bool,
}

impl Drop for PartialFile {
    fn drop(&mut self) {
        if self.keep {
            return;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %e, "could not remove partial archive");
            }
        }
    }
}

impl ArchiveWriter {
    /// Start a new archive destined for `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let temp_path = temp_path_for(path);
        let file = File::create(&temp_path).map_err(|e| Error::io(&temp_path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            zip: ZipWriter::new(file),
            partial: PartialFile {
                path: temp_path,
                keep: false,
            },
            entries: Vec::new(),
        })
    }

    /// Copy the file at `source` into the archive as `entry`.
    pub fn add_file(&mut self, source: &Path, entry: &NormalizedPath) -> Result<()> {
        let mut input = File::open(source).map_err(|e| Error::io(source, e))?;
        let len = input.metadata().map_err(|e| Error::io(source, e))?.len();

        let options = SimpleFileOptions::default().large_file(len >= u64::from(u32::MAX));
        self.zip
            .start_file(entry.as_str(), options)
            .map_err(|e| Error::archive(&self.path, e))?;
        io::copy(&mut input, &mut self.zip).map_err(|e| Error::io(source, e))?;

        tracing::debug!(entry = %entry, bytes = len, "added archive entry");
        self.entries.push(entry.clone());
        Ok(())
    }

    /// Write the central directory, then move the archive over `path`.
    pub fn finish(self) -> Result<Vec<NormalizedPath>> {
        let Self {
            path,
            zip,
            mut partial,
            entries,
        } = self;

        let file = zip.finish().map_err(|e| Error::archive(&path, e))?;
        file.sync_all().map_err(|e| Error::io(&partial.path, e))?;
        drop(file);

        fs::rename(&partial.path, &path).map_err(|e| Error::io(&path, e))?;
        partial.keep = true;

        tracing::debug!(path = %path.display(), "archive moved into place");
        Ok(entries)
    }
}
