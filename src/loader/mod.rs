//! Manifest loading
//!
//! Reads one manifest file and parses it as JSON. A missing file or bad JSON
//! becomes an [`Issue`]; any other I/O failure is returned as an error.

use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

use crate::config::DEFAULT_MANIFEST_FILE;
use crate::error::{CheckError, Result};
use crate::models::Issue;

/// Either a parsed document or the issue that prevented parsing
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Document(Value),
    Issue(Issue),
}

/// Load the manifest at `path`.
///
/// Any top-level JSON shape is accepted; shape is checked by the validator.
pub fn load_manifest(path: &Path) -> Result<LoadOutcome> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "Manifest missing");
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_MANIFEST_FILE.to_string());
            return Ok(LoadOutcome::Issue(Issue::new(path, format!("missing {name}"))));
        }
        Err(e) => return Err(CheckError::io(path, e)),
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(document) => {
            debug!(path = %path.display(), "Parsed manifest");
            Ok(LoadOutcome::Document(document))
        }
        Err(err) => {
            info!(path = %path.display(), error = %err, "Malformed manifest JSON");
            Ok(LoadOutcome::Issue(Issue::new(
                path,
                format!("invalid JSON: {err}"),
            )))
        }
    }
}
