mod config;
mod errors;
mod latex;
mod models;
mod sections;
mod source;
mod sync;
mod writer;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::source::{select_source, SourceMode};
use crate::sync::{run_sync, SectionOutcome, SyncReport};
use crate::writer::SectionWriter;

#[derive(Parser, Debug)]
#[command(name = "resume-sync", version)]
#[command(about = "Sync portfolio résumé JSON into LaTeX section fragments")]
struct Cli {
    /// Where to read the résumé data from
    #[arg(long, value_enum)]
    source: Option<SourceMode>,

    /// Local data file, used by `--source local` and `--source auto`
    #[arg(long, value_name = "PATH")]
    local_path: Option<PathBuf>,

    /// Remote data URL, used by `--source remote` and `--source auto`
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Directory receiving the .tex fragments (must exist)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// JSON file overriding the render rules
    #[arg(long, value_name = "PATH")]
    rules: Option<PathBuf>,

    /// Verbose output (-v for debug logging)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = resolve_config(Config::from_env()?, &cli);

    tracing_subscriber::registry()
        .with(log_filter(cli.verbose, &config.rust_log))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    info!("resume-sync v{}", env!("CARGO_PKG_VERSION"));

    let rules = config.render_rules()?;
    let source = select_source(config.source_mode, &config.local_data_path, &config.data_url);
    let writer = SectionWriter::new(&config.sections_dir);

    let code = match run_sync(source.as_ref(), &writer, &rules).await {
        Ok(report) => {
            log_summary(&report);
            report.exit_code()
        }
        Err(failure) => {
            error!("{failure}");
            failure.exit_code()
        }
    };

    Ok(ExitCode::from(code as u8))
}

/// Command-line flags win over environment configuration.
fn resolve_config(mut config: Config, cli: &Cli) -> Config {
    if let Some(mode) = cli.source {
        config.source_mode = mode;
    }
    if let Some(path) = &cli.local_path {
        config.local_data_path = path.clone();
    }
    if let Some(url) = &cli.url {
        config.data_url = url.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.sections_dir = dir.clone();
    }
    if let Some(rules) = &cli.rules {
        config.rules_file = Some(rules.clone());
    }
    config
}

/// `-v` forces debug for this crate; otherwise `RUST_LOG` applies as a full filter,
/// falling back to `<crate>=<rust_log>`.
fn log_filter(verbose: u8, rust_log: &str) -> EnvFilter {
    let crate_level =
        |level: &str| EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME")));
    if verbose > 0 {
        return crate_level("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| crate_level(rust_log))
}

fn log_summary(report: &SyncReport) {
    info!(
        "Sections synced from {}: {} written, {} skipped, {} failed",
        report.source,
        report.written().count(),
        report.skipped().count(),
        report.failed().count()
    );
    for entry in &report.sections {
        match &entry.outcome {
            SectionOutcome::Written { path, bytes } => {
                info!("  {:<15} written  {} ({bytes} bytes)", entry.section, path.display())
            }
            SectionOutcome::Skipped { reason } => {
                warn!("  {:<15} skipped  {reason}", entry.section)
            }
            SectionOutcome::Failed { error } => {
                error!("  {:<15} failed   [{}] {error}", entry.section, error.code())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_config() -> Config {
        Config::from_lookup(|_| None).unwrap()
    }

    #[test]
    fn test_cli_flags_override_environment() {
        let cli = Cli::parse_from([
            "resume-sync",
            "--source",
            "local",
            "--local-path",
            "fixtures/data.json",
            "-o",
            "out",
            "--rules",
            "rules.json",
        ]);
        let config = resolve_config(env_config(), &cli);
        assert_eq!(config.source_mode, SourceMode::Local);
        assert_eq!(config.local_data_path, PathBuf::from("fixtures/data.json"));
        assert_eq!(config.sections_dir, PathBuf::from("out"));
        assert_eq!(config.rules_file, Some(PathBuf::from("rules.json")));
        assert_eq!(config.data_url, crate::source::DEFAULT_DATA_URL);
    }

    #[test]
    fn test_no_flags_keep_environment() {
        let cli = Cli::parse_from(["resume-sync"]);
        let config = resolve_config(env_config(), &cli);
        assert_eq!(config.source_mode, SourceMode::Auto);
        assert_eq!(config.sections_dir, PathBuf::from("src/sections"));
    }

    #[test]
    fn test_verbose_flag_overrides_rust_log() {
        let cli = Cli::parse_from(["resume-sync", "-v"]);
        let filter = log_filter(cli.verbose, "warn").to_string();
        assert!(filter.contains(&format!("{}=debug", env!("CARGO_CRATE_NAME"))), "{filter}");
    }

    #[test]
    fn test_unknown_source_mode_is_rejected() {
        assert!(Cli::try_parse_from(["resume-sync", "--source", "ftp"]).is_err());
    }
}
