//! CLI for resume-scout.
//!
//! Scans a résumé PDF, follows its GitHub profile links and prints a JSON
//! report of the ecosystems found in the candidate's repositories. The
//! report is the only thing written to stdout; diagnostics go to stderr.

use clap::Parser;
use resume_scout::{FinalReport, Runner, RunnerConfig, RunnerError, ScanSettings};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Resume Scout - Correlate a résumé with the candidate's public GitHub repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the résumé PDF.
    document: Option<PathBuf>,

    /// GitHub Personal Access Token (optional, raises the API rate limit).
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Path to a TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Repositories of one user scanned concurrently (overrides the settings file).
    #[arg(long)]
    concurrency: Option<usize>,

    /// Include résumé sections, detected skills and parsed manifests.
    #[arg(long)]
    detailed: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Prefer aws-lc-rs when several rustls providers are linked in
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    let Some(document) = args.document.clone() else {
        print_error("No PDF path provided");
        return ExitCode::from(1);
    };

    // Run the main logic
    match run(args, document).await {
        Ok(report) => match serde_json::to_string(&report) {
            Ok(output) => {
                println!("{output}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                print_error(&e.to_string());
                ExitCode::from(1)
            }
        },
        Err(e) => {
            error!(error = %e, "Critical failure");
            print_error(&e.to_string());
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr, keeping stdout
///   free for the JSON report
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args, document: PathBuf) -> Result<FinalReport, RunnerError> {
    let mut settings = match &args.config {
        Some(path) => ScanSettings::load(path)?,
        None => ScanSettings::default(),
    };
    if let Some(concurrency) = args.concurrency {
        settings.concurrency = concurrency;
        settings.validate("--concurrency")?;
    }

    let config = RunnerConfig::new(document, args.token)
        .with_settings(settings)
        .with_detailed(args.detailed);
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints a structured error to stdout.
fn print_error(message: &str) {
    println!("{}", json!({ "error": message }));
}
