//! Error types for themecheck
//!
//! Only failures that stop a run live here. Anything wrong with an
//! individual manifest is reported as an [`Issue`](crate::models::Issue).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    /// The themes root itself is absent; nothing can be scanned.
    #[error("themes directory not found: {}", path.display())]
    ThemesRootMissing { path: PathBuf },

    /// An I/O failure outside the anticipated missing-file case
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl CheckError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CheckError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
