//! CLI entrypoint for tablevote
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use chrono::{DateTime, Utc};
use clap::Parser;
use std::sync::Arc;
use tablevote_application::{Clock, FixedClock, RankGroupInput, RankGroupUseCase, RankingAuditLog};
use tablevote_domain::OutputFormat;
use tablevote_infrastructure::{
    ConfigLoader, FileConfig, JsonFileSnapshotSource, JsonlRankingAuditLog, SystemClock,
};
use tablevote_presentation::{Cli, ConsoleFormatter};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;

    let Some(snapshot_path) = cli.snapshot.clone() else {
        bail!("A snapshot file is required. Use --show-config to inspect configuration.");
    };

    info!("Starting tablevote for {}", snapshot_path.display());

    // === Dependency Injection ===
    let clock: Arc<dyn Clock> = match &cli.now {
        Some(now) => {
            let now = DateTime::parse_from_rfc3339(now)
                .with_context(|| format!("Invalid --now timestamp: {}", now))?
                .with_timezone(&Utc);
            Arc::new(FixedClock(now))
        }
        None => Arc::new(SystemClock),
    };

    let source = Arc::new(JsonFileSnapshotSource::new(snapshot_path));
    let mut use_case = RankGroupUseCase::new(source, clock);

    if let Some(path) = &cli.audit_log {
        match JsonlRankingAuditLog::new(path) {
            Some(log) => {
                let log: Arc<dyn RankingAuditLog> = Arc::new(log);
                use_case = use_case.with_audit_log(log);
            }
            None => warn!("Audit logging disabled: could not open {}", path.display()),
        }
    }

    let mut input = RankGroupInput::new(config.group.to_ranking_defaults());
    if cli.no_recommendations {
        input = input.without_recommendations();
    }

    let output = use_case.execute(input).await?;

    ConsoleFormatter::set_color(config.output.color);
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    let text = match format {
        OutputFormat::Full => ConsoleFormatter::format(&output),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&output),
        OutputFormat::Json => ConsoleFormatter::format_json(&output),
    };

    println!("{}", text);

    Ok(())
}

/// Load and validate file configuration according to CLI flags
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        if !cli.quiet {
            eprintln!("warning: {}", issue.message);
        }
    }
    if let Some(issue) = issues.iter().find(|i| i.is_error()) {
        bail!("Invalid configuration: {}", issue.message);
    }

    Ok(config)
}
