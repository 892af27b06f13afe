//! Unified, `miette`-based diagnostics for the compatibility checker.
//!
//! Every fatal failure mode is a variant of [`CompatError`]. Drift findings
//! are deliberately NOT errors: they are collected into a report by
//! [`crate::report`] so that a single run surfaces every mismatch. Only
//! environment/setup faults (unreadable inputs, malformed snapshot, source
//! shape the extractor no longer recognizes) abort the run.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Fatal failure modes of a compatibility check run.
#[derive(Debug, Error, Diagnostic)]
pub enum CompatError {
    /// An input file could not be read at all.
    #[error("failed to read {path}")]
    #[diagnostic(code(unbg_compat::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot resource exists but is not a valid snapshot document.
    ///
    /// Covers both malformed JSON and a missing or unknown key; serde
    /// reports either as a deserialization failure, which is the treatment
    /// the schema contract wants (never silently defaulted).
    #[error("snapshot {path} is malformed or does not match the expected schema")]
    #[diagnostic(
        code(unbg_compat::snapshot),
        help("the snapshot must contain exactly tauri_remove_command, request_fields, and response_fields")
    )]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No `pub struct <name>` declaration was found in the core source.
    ///
    /// Fatal by contract: an empty field list would mask real
    /// incompatibility, so a missing declaration means the source shape
    /// changed beyond what the extractor understands.
    #[error("could not find struct {name}")]
    #[diagnostic(
        code(unbg_compat::struct_not_found),
        help("the core source no longer declares this struct in a shape the checker recognizes; update the checker together with the API change")
    )]
    StructNotFound { name: String },

    /// The Tauri binding no longer carries a `removeBackground: "..."` entry.
    #[error("could not find TAURI_UNBG_COMMANDS_V1.removeBackground")]
    #[diagnostic(
        code(unbg_compat::command_not_found),
        help("the binding source must map removeBackground to a quoted command name")
    )]
    CommandNotFound,

    /// A struct-name pattern failed to compile into a regex.
    #[error("invalid struct name pattern for {name}")]
    #[diagnostic(code(unbg_compat::pattern))]
    Pattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

impl CompatError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompatError::Io {
            path: path.into(),
            source,
        }
    }
}
