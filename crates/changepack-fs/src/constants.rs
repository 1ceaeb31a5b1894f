//! Artifact names and metadata markers used across changepack.

/// Header line written at the top of the orphan manifest.
pub const MANIFEST_HEADER: &str = "Orphaned files only in source folder:";

/// Platform line terminator used for the manifest.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Platform line terminator used for the manifest.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Files changepack produces inside the source root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactName {
    /// The orphan manifest (`OrphanedFiles.txt`)
    Manifest,
    /// The changed-files archive (`ChangedFiles.zip`)
    Archive,
}

impl ArtifactName {
    /// Get the default file name of the artifact.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manifest => "OrphanedFiles.txt",
            Self::Archive => "ChangedFiles.zip",
        }
    }
}

/// Tool metadata that is never reported or packaged by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataMarker {
    /// Git metadata (`.git`, also matches `.gitignore` in substring mode)
    Git,
    /// Visual Studio metadata (`.vs`)
    VisualStudio,
}

impl MetadataMarker {
    /// All markers excluded by default.
    pub const DEFAULTS: [MetadataMarker; 2] = [Self::Git, Self::VisualStudio];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Git => ".git",
            Self::VisualStudio => ".vs",
        }
    }
}
