//! Pattern-based structural extraction from source text.
//!
//! This is deliberately not a parser. The checker only needs to answer two
//! narrow questions about well-known declarations: which `pub` fields does a
//! named struct expose, in what order, and what command name does the Tauri
//! binding map `removeBackground` to. A pair of anchored regexes answers
//! both; anything the patterns cannot locate is a fatal error, because a
//! silently empty answer would mask a real API break.
//!
//! Known limitation, preserved on purpose: the struct body is taken up to
//! the FIRST line that looks like a standalone closing brace. A nested brace
//! block whose own `}` lands on its own line before the struct's true
//! closing brace truncates the field list at that point. The API structs
//! this checker watches are flat; the truncation behavior is pinned by a
//! regression test.

use lazy_static::lazy_static;
use regex::Regex;

use crate::diagnostics::CompatError;

lazy_static! {
    /// One `pub <ident>:` field line inside a struct body. Visibility-scoped
    /// fields (`pub(crate)` etc.) do not match and are treated as private.
    static ref PUB_FIELD: Regex = Regex::new(r"pub\s+([a-zA-Z0-9_]+)\s*:").unwrap();
    /// The binding entry mapping `removeBackground` to a quoted command name.
    /// The captured literal is taken verbatim; command names never contain
    /// embedded quotes.
    static ref TAURI_COMMAND: Regex = Regex::new(r#"removeBackground:\s*"([^"]+)""#).unwrap();
}

/// Returns the `pub` field names of `pub struct <struct_name> { ... }` in
/// declaration order.
///
/// Non-`pub` fields are omitted: they are not part of the external contract
/// this checker guards. Identifiers are returned exactly as written, with no
/// normalization.
pub fn struct_fields(source: &str, struct_name: &str) -> Result<Vec<String>, CompatError> {
    // Non-greedy body match: terminates at the first standalone `}` line.
    let header = Regex::new(&format!(
        r"(?s)pub struct {}\s*\{{(?P<body>.*?)\n\s*\}}",
        regex::escape(struct_name)
    ))
    .map_err(|source| CompatError::Pattern {
        name: struct_name.to_string(),
        source,
    })?;

    let body = header
        .captures(source)
        .and_then(|caps| caps.name("body"))
        .ok_or_else(|| CompatError::StructNotFound {
            name: struct_name.to_string(),
        })?;

    Ok(PUB_FIELD
        .captures_iter(body.as_str())
        .map(|caps| caps[1].to_string())
        .collect())
}

/// Returns the command name the Tauri binding exposes for `removeBackground`.
pub fn tauri_command(source: &str) -> Result<String, CompatError> {
    TAURI_COMMAND
        .captures(source)
        .map(|caps| caps[1].to_string())
        .ok_or(CompatError::CommandNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORE_SOURCE: &str = r#"
pub struct RemoveBackgroundRequest {
    pub image_base64: String,
    pub options: Options,
}

pub struct RemoveBackgroundResponse {
    pub image_base64: String,
    pub processing_time_ms: u64,
}
"#;

    #[test]
    fn extracts_fields_in_declaration_order() {
        let fields = struct_fields(CORE_SOURCE, "RemoveBackgroundRequest").unwrap();
        assert_eq!(fields, vec!["image_base64", "options"]);

        let fields = struct_fields(CORE_SOURCE, "RemoveBackgroundResponse").unwrap();
        assert_eq!(fields, vec!["image_base64", "processing_time_ms"]);
    }

    #[test]
    fn private_fields_are_omitted() {
        let source = r#"
pub struct Mixed {
    pub first: u32,
    hidden: String,
    pub second: bool,
}
"#;
        let fields = struct_fields(source, "Mixed").unwrap();
        assert_eq!(fields, vec!["first", "second"]);
    }

    #[test]
    fn scoped_visibility_counts_as_private() {
        let source = r#"
pub struct Scoped {
    pub visible: u32,
    pub(crate) internal: u32,
}
"#;
        let fields = struct_fields(source, "Scoped").unwrap();
        assert_eq!(fields, vec!["visible"]);
    }

    #[test]
    fn missing_struct_is_fatal() {
        let err = struct_fields(CORE_SOURCE, "NoSuchStruct").unwrap_err();
        assert!(matches!(err, CompatError::StructNotFound { ref name } if name == "NoSuchStruct"));
    }

    // Pins the known limitation: a nested brace block ending on its own line
    // truncates the field list at that point.
    #[test]
    fn nested_brace_block_truncates_extraction() {
        let source = r#"
pub struct Outer {
    pub before: u32,
    pub nested: Inline<{
        1
    }>,
    pub after: u32,
}
"#;
        let fields = struct_fields(source, "Outer").unwrap();
        assert_eq!(fields, vec!["before", "nested"]);
    }

    #[test]
    fn first_matching_declaration_wins() {
        let source = r#"
pub struct Twice {
    pub first_copy: u32,
}
pub struct Twice {
    pub second_copy: u32,
}
"#;
        let fields = struct_fields(source, "Twice").unwrap();
        assert_eq!(fields, vec!["first_copy"]);
    }

    #[test]
    fn extracts_tauri_command_name() {
        let source = r#"
export const TAURI_UNBG_COMMANDS_V1 = {
  removeBackground: "unbg_remove_background",
};
"#;
        assert_eq!(tauri_command(source).unwrap(), "unbg_remove_background");
    }

    #[test]
    fn missing_command_entry_is_fatal() {
        let err = tauri_command("export const TAURI_UNBG_COMMANDS_V1 = {};").unwrap_err();
        assert!(matches!(err, CompatError::CommandNotFound));
    }
}
