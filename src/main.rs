//! themecheck - Static checks for Chromium theme extension manifests
//!
//! Walks the themes directory, checks every `manifest.json` and exits
//! non-zero when anything is wrong.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{fmt, EnvFilter};

use themecheck::commands::{self, OutputFormat};
use themecheck::config::{self, CheckPaths};

/// Exit code for failures outside the anticipated set
const EXIT_UNEXPECTED: i32 = 3;

#[derive(Parser)]
#[command(name = "themecheck")]
#[command(author, version, about = "Validate Chromium theme manifests under the themes directory")]
struct Cli {
    /// Themes root to scan (defaults to extensions/themes next to the crate)
    #[arg(long, env = "THEMECHECK_ROOT")]
    root: Option<PathBuf>,

    /// Config file (defaults to themecheck.toml next to the crate)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: summary or json
    #[arg(long, default_value = "summary")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug); THEMECHECK_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {:#}", e);
            process::exit(EXIT_UNEXPECTED);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = match cli.config {
        Some(path) => config::load_config_file(&path)?,
        None => config::load_config(&config::default_config_path())?,
    };
    let paths = CheckPaths::resolve(cli.root, config);

    let stdout = io::stdout();
    let stderr = io::stderr();
    commands::run(&paths, cli.format, &mut stdout.lock(), &mut stderr.lock())
}

/// Logs go to stderr so the report on stdout stays stable
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    // THEMECHECK_LOG rather than RUST_LOG, so a shell-wide setting stays off stderr
    let filter = EnvFilter::try_from_env("THEMECHECK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("themecheck={}", level)));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
