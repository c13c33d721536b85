//! Theme directory discovery
//!
//! Lists the immediate child directories of a themes root and maps each one
//! to the manifest path it is expected to contain.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::DEFAULT_MANIFEST_FILE;
use crate::error::{CheckError, Result};

/// Theme directories found under a root, sorted by directory name
#[derive(Debug, Clone)]
pub struct ThemeDirectories {
    dirs: Vec<PathBuf>,
    manifest_file: String,
}

impl ThemeDirectories {
    /// Read the directory listing of `root`.
    ///
    /// Hidden entries (leading `.`) and anything that is not a directory are
    /// skipped. The existence of the manifest files is not checked here.
    pub fn scan(root: &Path) -> Result<Self> {
        Self::scan_with(root, DEFAULT_MANIFEST_FILE)
    }

    pub fn scan_with(root: &Path, manifest_file: &str) -> Result<Self> {
        let entries = fs::read_dir(root).map_err(|e| CheckError::io(root, e))?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CheckError::io(root, e))?;
            let path = entry.path();

            if entry.file_name().to_string_lossy().starts_with('.') {
                debug!(path = %path.display(), "Skipping hidden entry");
                continue;
            }
            if !path.is_dir() {
                debug!(path = %path.display(), "Skipping non-directory entry");
                continue;
            }
            dirs.push(path);
        }
        dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        Ok(Self {
            dirs,
            manifest_file: manifest_file.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// One expected manifest path per directory. Can be called repeatedly.
    pub fn manifest_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.dirs.iter().map(|dir| dir.join(&self.manifest_file))
    }
}

/// Convenience wrapper returning the expected manifest paths under `root`
pub fn iter_manifest_paths(root: &Path) -> Result<Vec<PathBuf>> {
    Ok(ThemeDirectories::scan(root)?.manifest_paths().collect())
}
