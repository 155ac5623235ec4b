#![deny(missing_docs)]

//! # dbusmgr Patch Core
//!
//! Core library for adding `CRIO_FORCE_SYSTEM_BUS` support to CRI-O's `dbusmgr.go`.

/// Shared error types.
pub mod error;

/// Line sequence backing every edit.
pub mod source;

/// Anchor-based edits.
pub mod patcher;

pub use error::{AppError, AppResult};
pub use patcher::{apply, patch_file, PatchReport};
pub use source::SourceLines;
