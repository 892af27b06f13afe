//! Command-line arguments for the compatibility checker.
//!
//! Uses the `clap` derive API. The checker is designed to run with no
//! arguments from the repository root as one step of the CI pipeline; the
//! optional root override exists so the same binary can be pointed at
//! another checkout.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "unbg-compat",
    version,
    about = "Checks the unbg public API surface against the recorded compatibility snapshot."
)]
pub struct CompatArgs {
    /// Repository root to check. Defaults to the current directory.
    pub root: Option<PathBuf>,
}
