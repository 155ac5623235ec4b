//! # Patch Command
//!
//! Applies the `CRIO_FORCE_SYSTEM_BUS` edits to a `dbusmgr.go` file.

use std::path::PathBuf;

use dbusmgr_patch_core::{patch_file, AppResult};
use tracing::warn;

/// Arguments for the patch command.
#[derive(clap::Args, Debug, Clone)]
pub struct PatchArgs {
    /// Path to CRI-O's dbusmgr.go. Overwritten in place.
    #[clap(value_name = "path_to_dbusmgr.go")]
    pub path: PathBuf,
}

/// Patches the file and returns the confirmation message.
///
/// Missing anchors only produce a warning; the file still counts as patched.
pub fn execute(args: &PatchArgs) -> AppResult<String> {
    let report = patch_file(&args.path)?;

    if !report.is_complete() {
        warn!(
            path = %args.path.display(),
            missed = ?report.missed(),
            "some edits found no anchor"
        );
    }

    Ok(format!("Successfully patched {}", args.path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_execute_reports_success_without_anchors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dbusmgr.go");
        fs::write(&path, "package dbusmgr\n").unwrap();

        let msg = execute(&PatchArgs { path: path.clone() }).unwrap();

        assert_eq!(msg, format!("Successfully patched {}", path.display()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "package dbusmgr\n");
    }

    #[test]
    fn test_execute_missing_file() {
        let dir = tempdir().unwrap();
        let args = PatchArgs {
            path: dir.path().join("missing.go"),
        };
        assert!(execute(&args).is_err());
    }
}
