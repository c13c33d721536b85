//! Structural checks for theme manifests
//!
//! Each rule runs independently and appends its issues in a fixed order:
//! manifest version, required fields, then theme block shape.

use serde_json::Value;
use std::path::Path;

use crate::models::Issue;

pub const EXPECTED_MANIFEST_VERSION: u64 = 3;
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "version", "theme"];
pub const THEME_CONTENT_KEYS: [&str; 2] = ["colors", "images"];

/// Run every rule against a parsed manifest
pub fn validate_manifest(path: &Path, manifest: &Value) -> Vec<Issue> {
    let mut issues = Vec::new();
    issues.extend(check_manifest_version(path, manifest));
    issues.extend(check_required_fields(path, manifest));
    issues.extend(check_theme_block(path, manifest));
    issues
}

/// `manifest_version` must be exactly the integer 3
pub fn check_manifest_version(path: &Path, manifest: &Value) -> Option<Issue> {
    let found = manifest.get("manifest_version");
    if found.and_then(Value::as_u64) == Some(EXPECTED_MANIFEST_VERSION) {
        return None;
    }

    let rendered = match found {
        Some(value) => value.to_string(),
        None => "nothing".to_string(),
    };
    Some(Issue::new(
        path,
        format!(
            "expected manifest_version {}, found {}",
            EXPECTED_MANIFEST_VERSION, rendered
        ),
    ))
}

/// One issue per absent required key. Values are not inspected.
pub fn check_required_fields(path: &Path, manifest: &Value) -> Vec<Issue> {
    REQUIRED_FIELDS
        .iter()
        .filter(|field| manifest.get(**field).is_none())
        .map(|field| Issue::new(path, format!("missing required field '{}'", field)))
        .collect()
}

/// A present `theme` must be an object holding `colors` or `images`.
///
/// When `theme` is not an object only the shape issue is reported.
pub fn check_theme_block(path: &Path, manifest: &Value) -> Option<Issue> {
    let theme = manifest.get("theme")?;

    let Some(block) = theme.as_object() else {
        return Some(Issue::new(path, "theme section must be an object"));
    };

    if THEME_CONTENT_KEYS.iter().any(|key| block.contains_key(*key)) {
        None
    } else {
        Some(Issue::new(
            path,
            "theme block should include at least 'colors' or 'images'",
        ))
    }
}
