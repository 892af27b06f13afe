//! Resolved locations of the three inputs a check run reads.
//!
//! The checker ships inside the unbg workspace and its inputs live at fixed
//! positions relative to the repository root. Rather than each component
//! re-deriving paths from an implicit anchor, the entry point resolves them
//! once into a [`CompatPaths`] value and passes that down.

use std::path::{Path, PathBuf};

/// Relative location of the golden snapshot inside the repository.
pub const SNAPSHOT_REL: &str = "api-snapshots/api-compat-v1.json";
/// Relative location of the core library source declaring the API structs.
pub const CORE_SOURCE_REL: &str = "crates/unbg-core/src/lib.rs";
/// Relative location of the Tauri plugin's TypeScript binding.
pub const TAURI_BINDINGS_REL: &str = "integrations/tauri-plugin-unbg/src/index.ts";

/// The three input files of one compatibility check, fully resolved.
#[derive(Debug, Clone)]
pub struct CompatPaths {
    pub snapshot: PathBuf,
    pub core_source: PathBuf,
    pub tauri_bindings: PathBuf,
}

impl CompatPaths {
    /// Resolves all input paths against a repository root.
    pub fn from_root(root: &Path) -> Self {
        Self {
            snapshot: root.join(SNAPSHOT_REL),
            core_source: root.join(CORE_SOURCE_REL),
            tauri_bindings: root.join(TAURI_BINDINGS_REL),
        }
    }
}
