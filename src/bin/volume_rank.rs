use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;

use market_depth::analysis::volume_rank::run_volume_rank;
use market_depth::config_loader::AppConfig;
use market_depth::infrastructure::coinmarketcap::CoinMarketCapClient;

/// Ranks coins by 24h volume relative to market cap.
#[derive(Parser, Debug)]
#[command(name = "volume_rank", version)]
struct Cli {
    /// Number of coins to show
    #[arg(long)]
    limit: Option<usize>,

    /// TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(&cli.config)?.volume_rank;
    if let Some(limit) = cli.limit {
        config.display_limit = limit;
    }

    let client = CoinMarketCapClient::from_config(&config)?;
    let table = run_volume_rank(&client, &config).await?;
    println!("{}", table);

    Ok(())
}
