pub use crate::diagnostics::CompatError;

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod extract;
pub mod report;
pub mod snapshot;
