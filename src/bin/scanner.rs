//! ETF Scanner
//!
//! Classifies the regime of the market proxy, labels each target ticker
//! BUY/SELL/HOLD, and prints the report as JSON on stdout.

use std::sync::Arc;

use dotenvy::dotenv;
use etf_signals::config::{get_environment, ScannerConfig};
use etf_signals::core::Scanner;
use etf_signals::logging;
use etf_signals::services::{JsonFileProvider, MarketDataProvider, RetryingProvider};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = ScannerConfig::from_env()?;
    info!(environment = %get_environment(), "Starting ETF scanner");
    info!(
        proxy = %config.proxy_ticker,
        targets = ?config.target_tickers,
        lookback = config.lookback_period,
        data_dir = %config.data_dir.display(),
        policy = ?config.policy,
        "Configuration loaded"
    );

    let provider: Arc<dyn MarketDataProvider> = Arc::new(RetryingProvider::new(
        JsonFileProvider::new(config.data_dir.clone()),
        config.retry.clone(),
    ));

    let scanner = Scanner::new(provider, config);
    let report = scanner.scan().await;

    println!("{}", serde_json::to_string_pretty(&report)?);

    let failed = report.results.iter().filter(|r| r.error.is_some()).count();
    info!(
        regime = %report.regime,
        scanned = report.results.len(),
        failed,
        "Scan complete"
    );

    Ok(())
}
