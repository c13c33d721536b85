//! Data models for a themecheck run
//!
//! An [`Issue`] is one validation failure tied to a manifest path. A
//! [`Report`] is everything a single run found, ready to print.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Exit code when every manifest passed
pub const EXIT_OK: i32 = 0;
/// Exit code when at least one issue was found
pub const EXIT_ISSUES: i32 = 1;
/// Exit code when the themes root is missing
pub const EXIT_ROOT_MISSING: i32 = 2;

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub path: PathBuf,
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Path shown to the user, relative to `root` when it lives under it
    pub fn display_path(&self, root: &Path) -> String {
        self.path
            .strip_prefix(root)
            .unwrap_or(&self.path)
            .display()
            .to_string()
    }

    /// `<path>: <message>` with the path made relative to `root`
    pub fn format_relative(&self, root: &Path) -> String {
        format!("{}: {}", self.display_path(root), self.message)
    }
}

/// Outcome of scanning one themes root
#[derive(Debug, Clone)]
pub struct Report {
    pub root: PathBuf,
    pub checked: usize,
    pub issues: Vec<Issue>,
}

#[derive(Serialize)]
struct IssueRecord<'a> {
    path: String,
    message: &'a str,
}

#[derive(Serialize)]
struct ReportRecord<'a> {
    root: String,
    checked: usize,
    issues: Vec<IssueRecord<'a>>,
}

impl Report {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            checked: 0,
            issues: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            EXIT_OK
        } else {
            EXIT_ISSUES
        }
    }

    /// Human-readable summary, one line per issue
    pub fn render_summary(&self) -> String {
        if self.is_clean() {
            return "All theme manifests look good.\n".to_string();
        }

        let mut out = String::from("Theme manifest validation failed:\n");
        for issue in &self.issues {
            out.push_str("  - ");
            out.push_str(&issue.format_relative(&self.root));
            out.push('\n');
        }
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        let record = ReportRecord {
            root: self.root.display().to_string(),
            checked: self.checked,
            issues: self
                .issues
                .iter()
                .map(|issue| IssueRecord {
                    path: issue.display_path(&self.root),
                    message: &issue.message,
                })
                .collect(),
        };
        let mut json = serde_json::to_string_pretty(&record)?;
        json.push('\n');
        Ok(json)
    }
}
