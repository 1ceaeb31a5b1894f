//! Run settings
//!
//! Every field has a default, so an empty settings file (or none at all)
//! reproduces the stock behaviour: `OrphanedFiles.txt`, `ChangedFiles.zip`
//! and substring exclusion of `.git` and `.vs`.

use std::path::Path;

use changepack_fs::{ArtifactName, ConfigStore, MetadataMarker};
use serde::{Deserialize, Serialize};

use crate::Result;

/// How exclusion patterns are matched against paths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExclusionMode {
    /// Literal substring of the whole path string
    #[default]
    Substring,
    /// Whole path component of the destination-relative path
    Segment,
}

/// Which paths are left out of the manifest and the archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExclusionSettings {
    pub mode: ExclusionMode,
    pub patterns: Vec<String>,
}

impl Default for ExclusionSettings {
    fn default() -> Self {
        Self {
            mode: ExclusionMode::default(),
            patterns: MetadataMarker::DEFAULTS
                .iter()
                .map(|m| m.as_str().to_string())
                .collect(),
        }
    }
}

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// File name of the manifest written into the source root
    pub manifest_file_name: String,
    /// File name of the archive written into the source root
    pub archive_file_name: String,
    pub exclusions: ExclusionSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            manifest_file_name: ArtifactName::Manifest.as_str().to_string(),
            archive_file_name: ArtifactName::Archive.as_str().to_string(),
            exclusions: ExclusionSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a `.toml`, `.json` or `.yaml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let settings: Self = ConfigStore::new().load(path)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }
}
