//! Exclusion predicate for tool metadata paths

use std::path::Path;

use changepack_fs::NormalizedPath;

use crate::config::{ExclusionMode, ExclusionSettings};

/// Decides whether a path is left out of the manifest and the archive.
///
/// In [`ExclusionMode::Substring`] a pattern matches anywhere in the path
/// string, so `.vs` also drops `.vscode/` and `plugin.vsix`.
#[derive(Debug, Clone)]
pub struct Exclusions {
    mode: ExclusionMode,
    patterns: Vec<String>,
}

impl Default for Exclusions {
    fn default() -> Self {
        Self::from_settings(&ExclusionSettings::default())
    }
}

impl Exclusions {
    pub fn new(mode: ExclusionMode, patterns: Vec<String>) -> Self {
        let patterns = patterns.into_iter().filter(|p| !p.is_empty()).collect();
        Self { mode, patterns }
    }

    pub fn from_settings(settings: &ExclusionSettings) -> Self {
        Self::new(settings.mode, settings.patterns.clone())
    }

    /// Exclusion check for a full path.
    ///
    /// Substring mode looks at the whole path string. Segment mode looks
    /// only at the components below `root`, so a root that itself sits
    /// inside a `.git` directory does not exclude everything.
    pub fn is_excluded_path(&self, path: &Path, root: &Path) -> bool {
        match self.mode {
            ExclusionMode::Substring => self.is_excluded(&path.to_string_lossy()),
            ExclusionMode::Segment => {
                let relative = NormalizedPath::relative_to(path, root)
                    .unwrap_or_else(|| NormalizedPath::new(path));
                self.is_excluded(relative.as_str())
            }
        }
    }

    /// Exclusion check for a path string or a bare file name.
    pub fn is_excluded(&self, path: &str) -> bool {
        match self.mode {
            ExclusionMode::Substring => self.patterns.iter().any(|p| path.contains(p.as_str())),
            ExclusionMode::Segment => {
                let normalized = NormalizedPath::new(path);
                normalized
                    .segments()
                    .any(|segment| self.patterns.iter().any(|p| p == segment))
            }
        }
    }
}
