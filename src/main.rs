// Standard library imports
use std::io;
use std::path::PathBuf;

// External crate imports
use anyhow::{bail, Result};
use clap::Parser;
use dotenv::dotenv;
use log::info;

// Internal crate imports
use market_depth::analysis::market_depth::run_depth_report;
use market_depth::config_loader::{AppConfig, RunConfig};
use market_depth::infrastructure::exchange;

/// Market depth ratio calculator.
#[derive(Parser, Debug)]
#[command(name = "market_depth", version)]
struct Cli {
    /// Pair(s) to use: the base currency followed by one or more quote currencies
    #[arg(long = "pair", num_args = 1.., value_name = "CURRENCY")]
    pairs: Option<Vec<String>>,

    /// Exchange to use [default: bittrex]
    #[arg(long)]
    exchange: Option<String>,

    /// Market depth window in percentage [default: 10]
    #[arg(long = "window-percentage", visible_alias = "wp", allow_negative_numbers = true)]
    window_percentage: Option<i64>,

    /// TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

/// Accepts the single-dash `-wp` spelling by rewriting it to `--wp`
fn normalize_args<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    args.into_iter()
        .map(|arg| match arg.strip_prefix("-wp") {
            Some(rest) if rest.is_empty() || rest.starts_with('=') => format!("--wp{}", rest),
            _ => arg,
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse_from(normalize_args(std::env::args()));

    let config = AppConfig::load_or_default(&cli.config)?;
    let run_config = RunConfig::resolve(&config, cli.pairs, cli.exchange, cli.window_percentage)?;
    info!(
        "Computing depth ratio on {} for {} pair(s) within {}%",
        run_config.exchange,
        run_config.pairs.len(),
        run_config.window_percent
    );

    let source = exchange::connect(run_config.exchange, &config.exchange)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run_depth_report(&*source, &run_config, &mut out).await?;

    if summary.all_failed() {
        bail!("depth ratio could not be computed for any of {} pair(s)", summary.failed);
    }

    Ok(())
}
