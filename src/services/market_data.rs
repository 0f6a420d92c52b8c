//! Market data provider interface. The pipeline itself never does I/O;
//! providers hand it ready-made series.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::indicators::error::SeriesError;
use crate::models::series::PriceSeries;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("no data found for {ticker}")]
    NotFound { ticker: String },

    #[error("insufficient history for {ticker}: {} bars", .series.len())]
    ShortHistory { ticker: String, series: PriceSeries },

    #[error("failed to read data for {ticker}: {source}")]
    Io {
        ticker: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data for {ticker}: {source}")]
    Json {
        ticker: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid series for {ticker}: {source}")]
    Series {
        ticker: String,
        #[source]
        source: SeriesError,
    },
}

impl ProviderError {
    /// Failures worth another attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::ShortHistory { .. })
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Full daily series for `ticker`, oldest bar first.
    async fn fetch_series(&self, ticker: &str) -> Result<PriceSeries, ProviderError>;
}

/// Provider over series already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    series: HashMap<String, PriceSeries>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, ticker: &str, series: PriceSeries) -> Self {
        self.series.insert(ticker.to_string(), series);
        self
    }
}

#[async_trait]
impl MarketDataProvider for InMemoryProvider {
    async fn fetch_series(&self, ticker: &str) -> Result<PriceSeries, ProviderError> {
        self.series
            .get(ticker)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound {
                ticker: ticker.to_string(),
            })
    }
}
