//! The check command: scan a themes root, validate, report

use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

use crate::config::CheckPaths;
use crate::error::CheckError;
use crate::loader::{load_manifest, LoadOutcome};
use crate::locator::ThemeDirectories;
use crate::models::{Report, EXIT_ROOT_MISSING};
use crate::validation::validate_manifest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Summary,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid format: {}. Use: summary, json", s)),
        }
    }
}

/// Scan every theme directory and collect all issues.
///
/// A problem in one directory never stops the others from being checked.
pub fn check(paths: &CheckPaths) -> std::result::Result<Report, CheckError> {
    let root = &paths.themes_root;
    if !root.is_dir() {
        return Err(CheckError::ThemesRootMissing { path: root.clone() });
    }

    let themes = ThemeDirectories::scan_with(root, &paths.manifest_file)?;
    info!(root = %root.display(), count = themes.len(), "Scanning theme directories");

    let mut report = Report::new(root);
    for manifest_path in themes.manifest_paths() {
        debug!(path = %manifest_path.display(), "Checking manifest");
        report.checked += 1;
        match load_manifest(&manifest_path)? {
            LoadOutcome::Issue(issue) => report.issues.push(issue),
            LoadOutcome::Document(document) => {
                report
                    .issues
                    .extend(validate_manifest(&manifest_path, &document));
            }
        }
    }

    info!(
        checked = report.checked,
        issues = report.issues.len(),
        "Theme manifest check finished"
    );
    Ok(report)
}

/// Run a check and print the outcome, returning the process exit code.
///
/// Only a missing themes root is written to `err`; everything else goes to
/// `out`.
pub fn run<O: Write, E: Write>(
    paths: &CheckPaths,
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> Result<i32> {
    let report = match check(paths) {
        Ok(report) => report,
        Err(e @ CheckError::ThemesRootMissing { .. }) => {
            writeln!(err, "error: {}", e).context("Failed to write to stderr")?;
            return Ok(EXIT_ROOT_MISSING);
        }
        Err(e) => return Err(e.into()),
    };

    let rendered = match format {
        OutputFormat::Summary => report.render_summary(),
        OutputFormat::Json => report.render_json().context("Failed to serialize report")?,
    };
    out.write_all(rendered.as_bytes())
        .context("Failed to write report")?;

    Ok(report.exit_code())
}
