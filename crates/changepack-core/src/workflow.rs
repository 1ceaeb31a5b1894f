//! End-to-end run: resolve, detect orphans, detect changes, package

use std::path::PathBuf;

use serde::Serialize;

use crate::{
    ArchivePlan, ChangedFile, ConfirmationPort, Exclusions, PackageOutcome, Result, Roots,
    Settings, changes, inputs, manifest, orphans, package,
};

/// Everything a successful run produced
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub roots: Roots,
    pub manifest: PathBuf,
    /// Orphan names as written to the manifest
    pub orphans: Vec<String>,
    pub changed: Vec<ChangedFile>,
    pub package: PackageOutcome,
}

/// The four-stage pipeline, configured once.
#[derive(Debug, Clone)]
pub struct Workflow {
    settings: Settings,
    exclusions: Exclusions,
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Workflow {
    pub fn new(settings: Settings) -> Self {
        let exclusions = Exclusions::from_settings(&settings.exclusions);
        Self {
            settings,
            exclusions,
        }
    }

    pub fn manifest_path(&self, roots: &Roots) -> PathBuf {
        roots.source.join(&self.settings.manifest_file_name)
    }

    pub fn archive_path(&self, roots: &Roots) -> PathBuf {
        roots.source.join(&self.settings.archive_file_name)
    }

    /// Run every stage in order. The first error ends the run.
    pub fn run(
        &self,
        source: &str,
        destination: &str,
        confirm: &mut dyn ConfirmationPort,
    ) -> Result<Report> {
        let roots = inputs::resolve_inputs(source, destination)?;

        tracing::info!("listing files only in the source folder");
        let orphan_set = orphans::compute_orphans(&roots.source, &roots.destination)?;
        let manifest_path = self.manifest_path(&roots);
        let listed = manifest::write_manifest(&manifest_path, &orphan_set, &self.exclusions)?;

        tracing::info!("comparing destination against source");
        let changed =
            changes::compute_changed_or_new(&roots.source, &roots.destination, &self.exclusions)?;

        let plan = ArchivePlan {
            archive: self.archive_path(&roots),
            manifest: manifest_path.clone(),
            files: &changed,
        };
        let outcome = package::package_archive(&plan, confirm)?;

        Ok(Report {
            roots,
            manifest: manifest_path,
            orphans: listed,
            changed,
            package: outcome,
        })
    }
}
