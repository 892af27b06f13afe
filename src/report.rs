//! Drift comparison between extracted state and the snapshot.

use crate::snapshot::ApiSnapshot;

/// Compares every extracted value against the snapshot and returns one
/// problem line per mismatch.
///
/// The three checks are independent and all always run; a single invocation
/// surfaces every drift rather than only the first. Field comparison is
/// order-sensitive: the binding layer serializes structs positionally, so a
/// reorder with identical membership is still a breaking change. An empty
/// result means the surfaces are compatible.
pub fn drift_problems(
    command: &str,
    request_fields: &[String],
    response_fields: &[String],
    snapshot: &ApiSnapshot,
) -> Vec<String> {
    let mut problems = Vec::new();

    if command != snapshot.tauri_remove_command {
        problems.push(format!(
            "tauri command drift: {} != {}",
            command, snapshot.tauri_remove_command
        ));
    }
    if request_fields != snapshot.request_fields.as_slice() {
        problems.push(format!(
            "request fields drift: {:?} != {:?}",
            request_fields, snapshot.request_fields
        ));
    }
    if response_fields != snapshot.response_fields.as_slice() {
        problems.push(format!(
            "response fields drift: {:?} != {:?}",
            response_fields, snapshot.response_fields
        ));
    }

    problems
}
