//! Namespace and namespace-path validation
//!
//! Pure string transforms: no filesystem access, no side effects. The
//! orchestrator calls these before touching the disk so a bad argument
//! never leaves a half-created project behind.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::InitError;

/// The namespace separator used in generated extension identifiers.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Root path segment reserved for the generated extension sources.
pub const RESERVED_ROOT: &str = "ext";

// Runs of non-alphanumeric characters immediately followed by a separator
// are malformed prefixes; the run and the separator are both removed.
static MALFORMED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9a-zA-Z]+\\").expect("malformed-prefix pattern"));

// A single leading `/<segment>/` is stripped from namespace paths.
static LEADING_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/([A-Za-z0-9_+-]+/)").expect("leading-segment pattern"));

/// Normalize a raw namespace argument.
///
/// Best-effort cleanup, not full validation: malformed path-like prefixes
/// are stripped wherever they occur, forward slashes become the namespace
/// separator, and the result always carries exactly one trailing separator.
///
/// # Errors
///
/// - [`InitError::EmptyNamespace`] when `raw` is empty.
/// - [`InitError::InvalidNamespace`] when stripping leaves nothing.
pub fn sanitize(raw: &str) -> Result<String, InitError> {
    if raw.is_empty() {
        return Err(InitError::EmptyNamespace);
    }

    let stripped = MALFORMED_PREFIX.replace_all(raw, "");
    if stripped.is_empty() {
        return Err(InitError::InvalidNamespace);
    }

    let normalized = stripped.replace('/', "\\");
    let trimmed = normalized.trim_matches(NAMESPACE_SEPARATOR);
    if trimmed.is_empty() {
        return Err(InitError::InvalidNamespace);
    }

    Ok(format!("{trimmed}{NAMESPACE_SEPARATOR}"))
}

/// Validate a raw namespace-path argument.
///
/// Returns `Ok(None)` when no usable value was supplied; the caller
/// performs exactly one fallback pass and must not loop further.
///
/// # Errors
///
/// - [`InitError::EmptyNamespacePath`] when stripping the leading segment
///   leaves nothing.
/// - [`InitError::ReservedPath`] when the value is rooted at `ext`.
pub fn validate_path(raw: Option<&str>) -> Result<Option<String>, InitError> {
    let raw = match raw {
        Some(value) if !value.is_empty() => value,
        _ => return Ok(None),
    };

    let stripped = LEADING_SEGMENT.replace(raw, "");
    if stripped.is_empty() {
        return Err(InitError::EmptyNamespacePath);
    }

    let reserved_prefix = format!("{RESERVED_ROOT}{}", std::path::MAIN_SEPARATOR);
    if stripped.starts_with(&reserved_prefix) {
        return Err(InitError::ReservedPath);
    }

    Ok(Some(stripped.to_lowercase()))
}

/// Derive the extension name from a sanitized namespace: separators become
/// underscores, the trailing separator is dropped, everything lowercased.
pub fn extension_name(namespace: &str) -> String {
    namespace
        .trim_matches(NAMESPACE_SEPARATOR)
        .replace(NAMESPACE_SEPARATOR, "_")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_appends_trailing_separator() {
        assert_eq!(sanitize("Foo").unwrap(), "Foo\\");
    }

    #[test]
    fn sanitize_rejects_empty_input() {
        assert_eq!(sanitize(""), Err(InitError::EmptyNamespace));
    }

    #[test]
    fn sanitize_normalizes_separators_and_trims() {
        assert_eq!(sanitize("/My\\App").unwrap(), "My\\App\\");
    }

    #[test]
    fn sanitize_strips_malformed_prefixes() {
        assert_eq!(sanitize("..\\Foo\\Bar").unwrap(), "Foo\\Bar\\");
    }

    #[test]
    fn sanitize_rejects_input_that_strips_to_nothing() {
        assert_eq!(sanitize("..\\"), Err(InitError::InvalidNamespace));
    }

    #[test]
    fn sanitize_rejects_separator_only_input() {
        assert_eq!(sanitize("/"), Err(InitError::InvalidNamespace));
    }

    #[test]
    fn validate_path_absent_stays_absent() {
        assert_eq!(validate_path(None).unwrap(), None);
        assert_eq!(validate_path(Some("")).unwrap(), None);
    }

    #[test]
    fn validate_path_strips_leading_segment_and_lowercases() {
        assert_eq!(validate_path(Some("/Foo/bar")).unwrap(), Some("bar".to_string()));
    }

    #[test]
    fn validate_path_strips_only_one_segment() {
        assert_eq!(
            validate_path(Some("/Foo/Bar/baz")).unwrap(),
            Some("bar/baz".to_string())
        );
    }

    #[test]
    fn validate_path_rejects_reserved_root() {
        assert_eq!(validate_path(Some("ext/sub")), Err(InitError::ReservedPath));
    }

    #[test]
    fn validate_path_rejects_value_that_strips_to_nothing() {
        assert_eq!(validate_path(Some("/x/")), Err(InitError::EmptyNamespacePath));
    }

    #[test]
    fn validate_path_keeps_unprefixed_values() {
        assert_eq!(
            validate_path(Some("MyApp/Lib")).unwrap(),
            Some("myapp/lib".to_string())
        );
    }

    #[test]
    fn extension_name_underscores_and_lowercases() {
        assert_eq!(extension_name("My\\App\\"), "my_app");
        assert_eq!(extension_name("Foo\\"), "foo");
    }
}
