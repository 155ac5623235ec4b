#![deny(missing_docs)]

//! # dbusmgr Patch CLI
//!
//! Rewrites CRI-O's `dbusmgr.go` so that `CRIO_FORCE_SYSTEM_BUS=true` forces the
//! system D-Bus even inside a user namespace.
//!
//! Usage: `patch-dbusmgr <path_to_dbusmgr.go>`

use clap::Parser;
use dbusmgr_patch_core::AppResult;

mod logging;
mod patch;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Patch dbusmgr.go to honour CRIO_FORCE_SYSTEM_BUS")]
struct Cli {
    #[clap(flatten)]
    patch: patch::PatchArgs,
}

fn main() -> AppResult<()> {
    logging::init();
    let cli = Cli::parse();

    let message = patch::execute(&cli.patch)?;
    println!("{}", message);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_requires_exactly_one_path() {
        assert!(Cli::try_parse_from(["patch-dbusmgr"]).is_err());
        assert!(Cli::try_parse_from(["patch-dbusmgr", "a.go", "b.go"]).is_err());

        let cli = Cli::try_parse_from(["patch-dbusmgr", "dbusmgr.go"]).unwrap();
        assert_eq!(cli.patch.path, std::path::PathBuf::from("dbusmgr.go"));
    }
}
