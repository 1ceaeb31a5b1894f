//! Core workflow for changepack
//!
//! Compares a source and a destination tree, writes the orphan manifest
//! and packages changed/new destination files into a zip archive. Each
//! stage is a plain function; [`Workflow`] chains them.

pub mod changes;
pub mod config;
pub mod error;
pub mod exclusion;
pub mod inputs;
pub mod manifest;
pub mod orphans;
pub mod package;
pub mod workflow;

pub use changepack_fs::io::files_equal;
pub use changes::{ChangeKind, ChangedFile, compute_changed_or_new};
pub use config::{ExclusionMode, ExclusionSettings, Settings};
pub use error::{Error, ErrorKind, Result};
pub use exclusion::Exclusions;
pub use inputs::{RootRole, Roots, resolve_inputs};
pub use manifest::write_manifest;
pub use orphans::compute_orphans;
pub use package::{
    ArchivePlan, ConfirmationPort, Decision, PackageOutcome, Prompt, package_archive,
};
pub use workflow::{Report, Workflow};
