//! Normalized, forward-slash paths for archive entry names

use std::path::Path;

/// A path normalized to use forward slashes internally.
///
/// Zip entry names always use `/`, so relative paths derived on any
/// platform are stored in this form. It is a display and entry name only;
/// filesystem access keeps using the native path it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Derive the path of `path` relative to `root`.
    ///
    /// The root is stripped component-wise, so `root` with or without a
    /// trailing separator yields the same result. Returns `None` when
    /// `path` does not live under `root` or equals it.
    pub fn relative_to(path: &Path, root: &Path) -> Option<Self> {
        let relative = path.strip_prefix(root).ok()?;
        if relative.as_os_str().is_empty() {
            return None;
        }
        Some(Self::new(relative))
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Iterate over the non-empty `/`-separated components.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.inner.split('/').filter(|s| !s.is_empty())
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl serde::Serialize for NormalizedPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner)
    }
}
