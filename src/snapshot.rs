//! Loader for the golden API compatibility snapshot.
//!
//! The snapshot is the recorded public API surface: the Tauri command name
//! plus the ordered field lists of the request and response structs. It is
//! read once per run and never mutated; field order in the snapshot is
//! significant because the comparison is order-sensitive.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::diagnostics::CompatError;

/// The recorded public API surface the current sources are checked against.
///
/// `deny_unknown_fields` keeps the schema closed in both directions: a
/// snapshot missing a key and a snapshot carrying a stray key both fail the
/// run instead of being silently tolerated.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ApiSnapshot {
    pub tauri_remove_command: String,
    pub request_fields: Vec<String>,
    pub response_fields: Vec<String>,
}

/// Reads and deserializes the snapshot at `path`.
pub fn load(path: &Path) -> Result<ApiSnapshot, CompatError> {
    let raw = fs::read_to_string(path).map_err(|source| CompatError::io(path, source))?;
    serde_json::from_str(&raw).map_err(|source| CompatError::Snapshot {
        path: path.to_path_buf(),
        source,
    })
}
