//! Filesystem primitives for changepack
//!
//! Provides tree enumeration, byte-level file comparison, advisory lock
//! probing, atomic text output and zip archive writing.

pub mod archive;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod walk;

pub use archive::ArchiveWriter;
pub use config::ConfigStore;
pub use constants::{ArtifactName, LINE_ENDING, MANIFEST_HEADER, MetadataMarker};
pub use error::{Error, Result};
pub use path::NormalizedPath;
