//! Retry wrapper for flaky data sources.

use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use tracing::warn;

use crate::config::RetryConfig;
use crate::models::series::PriceSeries;
use crate::services::market_data::{MarketDataProvider, ProviderError};

/// Fewer bars than this are treated as a partial response and refetched.
pub const MIN_FETCH_BARS: usize = 5;

/// Retries transient failures with exponential backoff.
///
/// A series that stays shorter than [`MIN_FETCH_BARS`] after the last
/// attempt is returned as is; the pipeline degrades on short input.
pub struct RetryingProvider<P> {
    inner: P,
    retry: RetryConfig,
}

impl<P: MarketDataProvider> RetryingProvider<P> {
    pub fn new(inner: P, retry: RetryConfig) -> Self {
        Self { inner, retry }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    async fn fetch_checked(&self, ticker: &str) -> Result<PriceSeries, ProviderError> {
        let series = self.inner.fetch_series(ticker).await?;
        if series.len() < MIN_FETCH_BARS {
            return Err(ProviderError::ShortHistory {
                ticker: ticker.to_string(),
                series,
            });
        }
        Ok(series)
    }
}

#[async_trait]
impl<P: MarketDataProvider> MarketDataProvider for RetryingProvider<P> {
    async fn fetch_series(&self, ticker: &str) -> Result<PriceSeries, ProviderError> {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(self.retry.delay_ms))
            .with_max_times(self.retry.max_attempts.saturating_sub(1));

        let result = (|| self.fetch_checked(ticker))
            .retry(backoff)
            .when(ProviderError::is_transient)
            .notify(|err: &ProviderError, delay: Duration| {
                warn!(ticker, error = %err, ?delay, "fetch failed, retrying");
            })
            .await;

        match result {
            Err(ProviderError::ShortHistory { ticker, series }) => {
                warn!(ticker = %ticker, bars = series.len(), "giving up on short history");
                Ok(series)
            }
            other => other,
        }
    }
}
