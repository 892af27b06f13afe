//! The compatibility checker's command-line entry point.
//!
//! Orchestrates the core library functions: load the snapshot, read the
//! two source files, extract the current API surface, compare, report.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::Parser;
use miette::Report;

use crate::cli::args::CompatArgs;
use crate::config::CompatPaths;
use crate::diagnostics::CompatError;
use crate::{extract, report, snapshot};

pub mod args;

/// The main entry point for the CLI.
///
/// Exit code 0 when the check passes, 1 on drift or any fatal error. Drift
/// problems go to stdout one per line; fatal setup/extraction errors render
/// as miette diagnostics on stderr.
pub fn run() {
    let args = CompatArgs::parse();
    let root = args.root.unwrap_or_else(|| PathBuf::from("."));
    let paths = CompatPaths::from_root(&root);

    let problems = match check(&paths) {
        Ok(problems) => problems,
        Err(e) => {
            eprintln!("{:?}", Report::new(e));
            process::exit(1);
        }
    };

    if !problems.is_empty() {
        for problem in &problems {
            println!("{}", problem);
        }
        process::exit(1);
    }

    println!("API compatibility check passed.");
}

/// Runs one full compatibility check and returns the drift problems found.
///
/// Everything except exit-code selection and printing lives here, keyed
/// entirely off the resolved paths.
pub fn check(paths: &CompatPaths) -> Result<Vec<String>, CompatError> {
    let snapshot = snapshot::load(&paths.snapshot)?;
    let core = read_source(&paths.core_source)?;
    let bindings = read_source(&paths.tauri_bindings)?;

    let request_fields = extract::struct_fields(&core, "RemoveBackgroundRequest")?;
    let response_fields = extract::struct_fields(&core, "RemoveBackgroundResponse")?;
    let command = extract::tauri_command(&bindings)?;

    Ok(report::drift_problems(
        &command,
        &request_fields,
        &response_fields,
        &snapshot,
    ))
}

fn read_source(path: &Path) -> Result<String, CompatError> {
    fs::read_to_string(path).map_err(|source| CompatError::io(path, source))
}
