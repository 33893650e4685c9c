//! Name conversion helpers shared by the resolver, the identifier deriver and codegen.

// ─────────────────────────────────────────────────────────────────────────────
// Display names
// ─────────────────────────────────────────────────────────────────────────────

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-case the first character and lower-case the remainder.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Canonical display identifier of a message (`hello_request` → `HelloRequest`).
///
/// Each underscore-separated segment gets its first character capitalized and the
/// segments are concatenated. This is the name used in generated type references
/// and as input to message identifier derivation.
pub fn display_name(message_name: &str) -> String {
    message_name.split('_').map(capitalize_first).collect()
}

/// Namespace derived from a dotted package (`demo.api` → `Demo.Api`).
pub fn package_namespace(package: &str) -> String {
    package
        .split('.')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(".")
}

/// File-name stem for the artifacts generated from a schema file.
///
/// `protos/hello_world.proto` → `HelloWorld`. The base name loses its last
/// extension, the remaining dotted parts are concatenated and every underscore
/// segment is capitalized.
pub fn output_stem(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let parts: Vec<&str> = base.split('.').collect();
    let without_extension = if parts.len() > 1 {
        parts[..parts.len() - 1].concat()
    } else {
        base.to_string()
    };

    without_extension.split('_').map(capitalize).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Rust identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Convert PascalCase or camelCase to snake_case.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let chars: Vec<char> = s.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 && !chars[i - 1].is_ascii_uppercase() && chars[i - 1] != '_' {
                result.push('_');
            }
            if i > 0
                && chars[i - 1].is_ascii_uppercase()
                && i + 1 < chars.len()
                && chars[i + 1].is_ascii_lowercase()
            {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// Module path segments for a resolved namespace (`Demo.Api` → `["demo", "api"]`).
pub fn namespace_modules(namespace: &str) -> Vec<String> {
    namespace
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(to_snake_case)
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
