//! File I/O: atomic writes, byte comparison and lock probing

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result};

/// Sibling of `path` used while its replacement is being written.
///
/// Same directory as the target so the final rename stays on one
/// filesystem.
pub(crate) fn temp_path_for(path: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    path.with_file_name(temp_name)
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so an existing file is replaced whole.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_path = temp_path_for(path);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed { path: path.to_path_buf() })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .unlock()
        .map_err(|_| Error::LockFailed { path: path.to_path_buf() })?;
    drop(temp_file);

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    Ok(())
}

/// Compare two files byte for byte.
///
/// Lengths are compared from metadata first; content is only read when
/// they match. Both files are then read fully into memory.
pub fn files_equal(a: &Path, b: &Path) -> Result<bool> {
    let len_a = fs::metadata(a).map_err(|e| Error::io(a, e))?.len();
    let len_b = fs::metadata(b).map_err(|e| Error::io(b, e))?.len();
    if len_a != len_b {
        return Ok(false);
    }

    let bytes_a = fs::read(a).map_err(|e| Error::io(a, e))?;
    let bytes_b = fs::read(b).map_err(|e| Error::io(b, e))?;

    Ok(bytes_a == bytes_b)
}

/// Check whether another handle currently holds `path`.
///
/// Opens the file read-write and tries a non-blocking exclusive lock.
/// A missing file is never locked. This is a pre-flight check only:
/// the file can become locked again right after it returns.
pub fn is_locked(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }

    let file = match OpenOptions::new().read(true).write(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return false,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "could not open for read-write");
            return true;
        }
    };

    match file.try_lock_exclusive() {
        Ok(()) => {
            let _ = file.unlock();
            false
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "exclusive lock refused");
            true
        }
    }
}
