use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod checks;
mod report;

/// Verifies that the front page has everything it needs before deploying.
#[derive(Parser, Debug)]
#[command(name = "deploy-check", version, about)]
struct Cli {
    /// Directory holding index.html, the stylesheets and the deploy configs
    #[arg(long, env = "DEPLOY_CHECK_ROOT", default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<ExitCode> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if !cli.root.is_dir() {
        bail!("{} is not a directory", cli.root.display());
    }
    let root = cli
        .root
        .canonicalize()
        .with_context(|| format!("resolving {}", cli.root.display()))?;
    info!(root = %root.display(), "running deployment checks");

    println!("🚀 Venipak Front Page - Deployment Check\n");
    let report = checks::run(&root);
    println!("{}", report);

    if report.passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        info!(
            failures = report.count(checks::Status::Fail),
            warnings = report.count(checks::Status::Warn),
            "deployment checks failed"
        );
        Ok(ExitCode::FAILURE)
    }
}
