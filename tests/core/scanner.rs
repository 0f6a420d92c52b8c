use std::sync::Arc;

use etf_signals::config::{PipelinePolicy, ScannerConfig, UnknownRegimePolicy};
use etf_signals::core::Scanner;
use etf_signals::models::{PriceSeries, RegimeLabel, Signal};
use etf_signals::services::InMemoryProvider;

use crate::support::{falling, rising, series};

fn config(proxy: &str, targets: &[&str]) -> ScannerConfig {
    ScannerConfig {
        proxy_ticker: proxy.to_string(),
        target_tickers: targets.iter().map(|t| t.to_string()).collect(),
        lookback_period: 0,
        ..ScannerConfig::default()
    }
}

fn provider() -> InMemoryProvider {
    InMemoryProvider::new()
        .with_series("SPY", series(&rising(60)))
        .with_series("TQQQ", series(&rising(60)))
        .with_series("YINN", series(&falling(60)))
        .with_series("EURL", PriceSeries::empty())
}

#[tokio::test]
async fn test_scan_reports_every_target() {
    let scanner = Scanner::new(
        Arc::new(provider()),
        config("SPY", &["TQQQ", "YINN", "EURL", "JNUG"]),
    );
    let report = scanner.scan().await;

    assert_eq!(report.proxy_ticker, "SPY");
    assert_eq!(report.regime, RegimeLabel::Bullish);
    assert_eq!(report.regime_votes.unwrap().count(), 3);
    assert_eq!(report.results.len(), 4);

    let tqqq = report.result("TQQQ").unwrap().snapshot.as_ref().unwrap();
    assert_eq!(tqqq.signal, Signal::Buy);
    assert_eq!(tqqq.bars, 60);
    assert_eq!(tqqq.buy_count, 46);
    assert_eq!(tqqq.rsi14, Some(100.0));
    assert!(tqqq.frame.is_none());

    let yinn = report.result("YINN").unwrap().snapshot.as_ref().unwrap();
    assert_eq!(yinn.signal, Signal::Sell);

    let eurl = report.result("EURL").unwrap();
    assert!(eurl.snapshot.is_none());
    assert!(eurl.error.as_ref().unwrap().contains("insufficient data"));

    let jnug = report.result("JNUG").unwrap();
    assert!(jnug.error.as_ref().unwrap().contains("no data found"));
}

#[tokio::test]
async fn test_missing_proxy_is_unknown_and_fails_safe() {
    let scanner = Scanner::new(Arc::new(provider()), config("QQQ", &["TQQQ"]));
    let report = scanner.scan().await;

    assert_eq!(report.regime, RegimeLabel::Unknown);
    assert!(report.regime_votes.is_none());
    let tqqq = report.result("TQQQ").unwrap().snapshot.as_ref().unwrap();
    assert_eq!(tqqq.signal, Signal::Hold);
    assert_eq!(tqqq.buy_count, 0);
}

#[tokio::test]
async fn test_missing_proxy_fail_open() {
    let mut cfg = config("QQQ", &["TQQQ"]);
    cfg.policy = PipelinePolicy {
        unknown_regime: UnknownRegimePolicy::FailOpen,
        ..PipelinePolicy::default()
    };
    let report = Scanner::new(Arc::new(provider()), cfg).scan().await;

    assert_eq!(report.regime, RegimeLabel::Unknown);
    let tqqq = report.result("TQQQ").unwrap().snapshot.as_ref().unwrap();
    assert_eq!(tqqq.signal, Signal::Buy);
}

#[tokio::test]
async fn test_bearish_proxy_blocks_buys() {
    let provider = provider().with_series("SPY", series(&falling(60)));
    let report = Scanner::new(Arc::new(provider), config("SPY", &["TQQQ"])).scan().await;

    assert_eq!(report.regime, RegimeLabel::Bearish);
    let tqqq = report.result("TQQQ").unwrap().snapshot.as_ref().unwrap();
    assert_eq!(tqqq.signal, Signal::Hold);
}

#[tokio::test]
async fn test_lookback_and_frames() {
    let mut cfg = config("SPY", &["TQQQ"]);
    cfg.lookback_period = 30;
    cfg.include_frames = true;
    let report = Scanner::new(Arc::new(provider()), cfg).scan().await;

    let tqqq = report.result("TQQQ").unwrap().snapshot.as_ref().unwrap();
    assert_eq!(tqqq.bars, 30);
    assert_eq!(tqqq.close, 159.0);
    let frame = tqqq.frame.as_ref().unwrap();
    assert_eq!(frame.len(), 30);
    assert_eq!(frame.regime(), RegimeLabel::Bullish);
}

#[tokio::test]
async fn test_report_serializes() {
    let report = Scanner::new(Arc::new(provider()), config("SPY", &["TQQQ"]))
        .scan()
        .await;
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["regime"], "Bullish");
    assert_eq!(json["results"][0]["ticker"], "TQQQ");
    assert_eq!(json["results"][0]["snapshot"]["signal"], "BUY");
    assert!(json["results"][0].get("error").is_none());
}
