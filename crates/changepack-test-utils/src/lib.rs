//! Shared test utilities for the changepack workspace.
//!
//! This crate is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`]: [`tree::TestTree`], a source/destination pair of temp dirs
//! - [`archive`]: helpers to read back written zip archives

pub mod archive;
pub mod tree;
