//! # dbusmgr Patching
//!
//! Line-based edits that teach CRI-O's `dbusmgr.go` about the
//! `CRIO_FORCE_SYSTEM_BUS` environment variable.
//!
//! Each edit locates a literal anchor and splices lines around it. Nothing
//! here parses Go: when an anchor is missing the edit is skipped and the
//! caller only finds out through the returned [`PatchReport`].

use crate::error::AppResult;
use crate::source::SourceLines;
use std::path::Path;
use tracing::debug;

/// Opening line of a grouped import declaration.
pub const IMPORT_OPENER: &str = "import (";

/// Import line inserted right after [`IMPORT_OPENER`].
pub const OS_IMPORT_LINE: &str = "\t\"os\"\n";

/// Number of lines, starting at the opener, searched for an existing `"os"` import.
pub const IMPORT_LOOKAHEAD: usize = 10;

/// Call that follows the guard we extend.
pub const PANIC_ANCHOR: &str = "panic(\"can't have both root and rootless dbus\")";

/// Guard preceding [`PANIC_ANCHOR`], compared after trimming.
pub const GUARD_ANCHOR: &str = "if dbusInited && rootless != dbusRootless {";

/// Guard with the environment escape clause added.
pub const GUARD_REPLACEMENT: &str =
    "\tif dbusInited && rootless != dbusRootless && os.Getenv(\"CRIO_FORCE_SYSTEM_BUS\") != \"true\" {\n";

/// Assignment replaced by the conditional block, compared after trimming.
pub const ASSIGNMENT_ANCHOR: &str = "dbusRootless = rootless";

const INDENT: &str = "\t";

/// Outcome of [`apply`]: which edits actually changed the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchReport {
    /// Edit 1 inserted the `"os"` import.
    pub import_inserted: bool,
    /// Edit 2 added the escape clause to the guard.
    pub guard_rewritten: bool,
    /// Edit 3 replaced the bare assignment.
    pub assignment_replaced: bool,
}

impl PatchReport {
    /// True when all three edits applied.
    pub fn is_complete(&self) -> bool {
        self.missed().is_empty()
    }

    /// Names of the edits that found nothing to change.
    pub fn missed(&self) -> Vec<&'static str> {
        [
            (self.import_inserted, "os import"),
            (self.guard_rewritten, "bus guard"),
            (self.assignment_replaced, "rootless assignment"),
        ]
        .into_iter()
        .filter(|(applied, _)| !applied)
        .map(|(_, name)| name)
        .collect()
    }
}

/// Adds `"os"` to the first grouped import block.
///
/// Only the first `import (` line is looked at. The insert is skipped when one
/// of the [`IMPORT_LOOKAHEAD`] lines starting at the opener already mentions `"os"`.
pub fn insert_os_import(lines: &mut SourceLines) -> bool {
    let Some(opener) = lines.position(|l| l.trim() == IMPORT_OPENER) else {
        debug!("no import block found");
        return false;
    };

    let already_imported = lines
        .iter()
        .skip(opener)
        .take(IMPORT_LOOKAHEAD)
        .any(|l| l.contains("\"os\""));
    if already_imported {
        debug!(line = opener + 1, "\"os\" already imported");
        return false;
    }

    lines.insert(opener + 1, OS_IMPORT_LINE);
    debug!(line = opener + 2, "inserted \"os\" import");
    true
}

/// Extends the root/rootless guard so `CRIO_FORCE_SYSTEM_BUS=true` bypasses the panic.
///
/// Only the first line carrying [`PANIC_ANCHOR`] is considered, and only the line
/// right above it is rewritten. Any other shape is left alone.
pub fn rewrite_bus_guard(lines: &mut SourceLines) -> bool {
    let Some(panic_at) = lines.position(|l| l.contains(PANIC_ANCHOR)) else {
        debug!("panic anchor not found");
        return false;
    };
    let Some(guard_at) = panic_at.checked_sub(1) else {
        debug!("panic anchor on first line, nothing to rewrite");
        return false;
    };

    if lines.get(guard_at).map(str::trim) != Some(GUARD_ANCHOR) {
        debug!(line = guard_at + 1, "unexpected guard above panic");
        return false;
    }

    lines.set(guard_at, GUARD_REPLACEMENT);
    debug!(line = guard_at + 1, "rewrote bus guard");
    true
}

/// Replaces the first bare `dbusRootless = rootless` with an env-aware block.
///
/// The block falls back to the original assignment when the variable is not `"true"`.
pub fn replace_rootless_assignment(lines: &mut SourceLines) -> bool {
    let Some(at) = lines.position(|l| l.trim() == ASSIGNMENT_ANCHOR) else {
        debug!("rootless assignment not found");
        return false;
    };

    lines.splice(at, rootless_block(INDENT));
    debug!(line = at + 1, "replaced rootless assignment");
    true
}

fn rootless_block(indent: &str) -> [String; 7] {
    [
        format!("{indent}// Allow forcing system bus usage via environment variable\n"),
        format!("{indent}// This is useful for nested containers that run full systemd\n"),
        format!("{indent}if os.Getenv(\"CRIO_FORCE_SYSTEM_BUS\") == \"true\" {{\n"),
        format!("{indent}\tdbusRootless = false\n"),
        format!("{indent}}} else {{\n"),
        format!("{indent}\t{ASSIGNMENT_ANCHOR}\n"),
        format!("{indent}}}\n"),
    ]
}

/// Runs the three edits in order. Each runs whether or not the others applied.
pub fn apply(lines: &mut SourceLines) -> PatchReport {
    PatchReport {
        import_inserted: insert_os_import(lines),
        guard_rewritten: rewrite_bus_guard(lines),
        assignment_replaced: replace_rootless_assignment(lines),
    }
}

/// Patches the file at `path` in place.
///
/// The file is always rewritten, even if no edit applied. Missing anchors are
/// not an error; check the returned report.
pub fn patch_file(path: &Path) -> AppResult<PatchReport> {
    let mut lines = SourceLines::read(path)?;
    let report = apply(&mut lines);
    lines.write(path)?;
    debug!(path = %path.display(), ?report, "patch applied");
    Ok(report)
}
