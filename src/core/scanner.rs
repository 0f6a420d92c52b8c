//! Scans a list of target tickers against the regime of a market proxy.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::ScannerConfig;
use crate::models::regime::RegimeLabel;
use crate::models::series::PriceSeries;
use crate::models::signal::{Signal, SignalFrame};
use crate::regime::classifier::{RegimeAssessment, RegimeVotes};
use crate::services::market_data::{MarketDataProvider, ProviderError};
use crate::signals::engine::SignalEngine;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("insufficient data for {ticker}: series is empty")]
    InsufficientData { ticker: String },

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Latest values for one ticker, as read by a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSnapshot {
    pub as_of: NaiveDate,
    pub bars: usize,
    pub signal: Signal,
    pub close: f64,
    pub ema20: Option<f64>,
    pub ema50: Option<f64>,
    pub rsi14: Option<f64>,
    pub macd: Option<f64>,
    pub volume_ratio: Option<f64>,
    pub buy_count: usize,
    pub sell_count: usize,
    pub hold_count: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub frame: Option<SignalFrame>,
}

impl TickerSnapshot {
    /// `None` for an empty frame.
    pub fn from_frame(frame: &SignalFrame, include_frame: bool) -> Option<Self> {
        let last = frame.last()?;
        Some(Self {
            as_of: last.indicators.timestamp,
            bars: frame.len(),
            signal: last.signal,
            close: last.indicators.close,
            ema20: last.indicators.ema20,
            ema50: last.indicators.ema50,
            rsi14: last.indicators.rsi14,
            macd: last.indicators.macd,
            volume_ratio: last.indicators.volume_ratio,
            buy_count: frame.count(Signal::Buy),
            sell_count: frame.count(Signal::Sell),
            hold_count: frame.count(Signal::Hold),
            frame: include_frame.then(|| frame.clone()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerReport {
    pub ticker: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub snapshot: Option<TickerSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub generated_at: DateTime<Utc>,
    pub proxy_ticker: String,
    pub regime: RegimeLabel,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub regime_votes: Option<RegimeVotes>,
    pub results: Vec<TickerReport>,
}

impl ScanReport {
    pub fn result(&self, ticker: &str) -> Option<&TickerReport> {
        self.results.iter().find(|r| r.ticker == ticker)
    }
}

pub struct Scanner {
    provider: Arc<dyn MarketDataProvider>,
    config: ScannerConfig,
    engine: SignalEngine,
}

impl Scanner {
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: ScannerConfig) -> Self {
        let engine = SignalEngine::new(config.policy);
        Self {
            provider,
            config,
            engine,
        }
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    async fn load(&self, ticker: &str) -> Result<PriceSeries, ProviderError> {
        let series = self.provider.fetch_series(ticker).await?;
        Ok(series.tail(self.config.lookback_period))
    }

    fn assess_proxy(&self, loaded: Result<PriceSeries, ProviderError>) -> RegimeAssessment {
        match loaded {
            Ok(series) => self.engine.assess_proxy(&series),
            Err(e) => {
                warn!(ticker = %self.config.proxy_ticker, error = %e, "proxy unavailable, regime unknown");
                RegimeAssessment::unknown(0)
            }
        }
    }

    /// Signals for one already-loaded target series.
    pub fn evaluate_series(
        &self,
        ticker: &str,
        series: &PriceSeries,
        regime: RegimeLabel,
    ) -> Result<TickerSnapshot, ScanError> {
        let frame = self.engine.evaluate(series, regime);
        TickerSnapshot::from_frame(&frame, self.config.include_frames).ok_or_else(|| {
            ScanError::InsufficientData {
                ticker: ticker.to_string(),
            }
        })
    }

    fn report(
        &self,
        ticker: &str,
        loaded: Result<PriceSeries, ProviderError>,
        regime: RegimeLabel,
    ) -> TickerReport {
        let outcome = loaded
            .map_err(ScanError::from)
            .and_then(|series| self.evaluate_series(ticker, &series, regime));

        match outcome {
            Ok(snapshot) => {
                info!(ticker, signal = %snapshot.signal, close = snapshot.close, "scanned");
                TickerReport {
                    ticker: ticker.to_string(),
                    snapshot: Some(snapshot),
                    error: None,
                }
            }
            Err(e) => {
                warn!(ticker, error = %e, "scan failed");
                TickerReport {
                    ticker: ticker.to_string(),
                    snapshot: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Fetch the proxy and every target concurrently, then classify.
    pub async fn scan(&self) -> ScanReport {
        let proxy = self.load(&self.config.proxy_ticker);
        let targets = join_all(self.config.target_tickers.iter().map(|ticker| async move {
            let loaded = self.load(ticker).await;
            (ticker.as_str(), loaded)
        }));
        let (proxy, targets) = tokio::join!(proxy, targets);

        let regime = self.assess_proxy(proxy);
        info!(
            proxy = %self.config.proxy_ticker,
            regime = %regime.label,
            bars = regime.bars,
            "market regime"
        );

        let results = targets
            .into_iter()
            .map(|(ticker, loaded)| self.report(ticker, loaded, regime.label))
            .collect();

        ScanReport {
            generated_at: Utc::now(),
            proxy_ticker: self.config.proxy_ticker.clone(),
            regime: regime.label,
            regime_votes: regime.votes,
            results,
        }
    }
}
