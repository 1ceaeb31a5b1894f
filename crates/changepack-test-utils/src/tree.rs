//! [`TestTree`] builder for source/destination scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Two sibling temporary directories, `source/` and `destination/`, under
/// one temp root.
///
/// # Example
///
/// ```rust,no_run
/// use changepack_test_utils::tree::TestTree;
///
/// let tree = TestTree::new();
/// tree.source_file("a.txt", "alpha");
/// tree.destination_file("sub/b.txt", "beta");
/// tree.assert_source_file_exists("a.txt");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
    source: PathBuf,
    destination: PathBuf,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create empty `source/` and `destination/` directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source");
        let destination = temp_dir.path().join("destination");
        fs::create_dir_all(&source).unwrap();
        fs::create_dir_all(&destination).unwrap();
        Self {
            temp_dir,
            source,
            destination,
        }
    }

    /// The temp root holding both trees.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// The source root as the string an operator would type.
    pub fn source_str(&self) -> &str {
        self.source.to_str().expect("temp path is not UTF-8")
    }

    /// The destination root as the string an operator would type.
    pub fn destination_str(&self) -> &str {
        self.destination.to_str().expect("temp path is not UTF-8")
    }

    /// Write `content` to `relative` under the source root, creating parents.
    pub fn source_file(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        write_file(&self.source, relative, content.as_ref())
    }

    /// Write `content` to `relative` under the destination root, creating parents.
    pub fn destination_file(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        write_file(&self.destination, relative, content.as_ref())
    }

    /// Write the same content on both sides.
    pub fn identical_file(&self, relative: &str, content: impl AsRef<[u8]>) {
        self.source_file(relative, content.as_ref());
        self.destination_file(relative, content.as_ref());
    }

    /// Assert that `relative` exists under the source root.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_source_file_exists(&self, relative: &str) {
        let full_path = self.source.join(relative);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `relative` does **not** exist under the source root.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_source_file_not_exists(&self, relative: &str) {
        let full_path = self.source.join(relative);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}

fn write_file(root: &Path, relative: &str, content: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
