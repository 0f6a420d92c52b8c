//! Indicator engine: one pass from a price series to an indicator frame.

use tracing::debug;

use crate::config::{FillPolicy, PipelinePolicy};
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::trend::calculate_ema;
use crate::indicators::volume::calculate_volume_ratio;
use crate::models::indicators::{IndicatorFrame, IndicatorRow};
use crate::models::series::PriceSeries;

pub const EMA_SHORT_PERIOD: usize = 20;
pub const EMA_LONG_PERIOD: usize = 50;
pub const MACD_FAST_PERIOD: usize = 12;
pub const MACD_SLOW_PERIOD: usize = 26;
pub const MACD_SIGNAL_PERIOD: usize = 9;
pub const RSI_PERIOD: usize = 14;
pub const VOLUME_RATIO_PERIOD: usize = 20;

fn fill(value: Option<f64>, policy: FillPolicy) -> Option<f64> {
    match policy {
        FillPolicy::Undefined => value,
        FillPolicy::Sentinel => Some(value.unwrap_or(0.0)),
    }
}

/// Compute every indicator column for `series`.
///
/// Never fails: bars inside a lookback window get `None` (or 0.0 under
/// [`FillPolicy::Sentinel`]). An empty series gives an empty frame.
pub fn compute_indicators(series: &PriceSeries, policy: &PipelinePolicy) -> IndicatorFrame {
    let closes = series.closes();

    let ema20 = calculate_ema(&closes, EMA_SHORT_PERIOD);
    let ema50 = calculate_ema(&closes, EMA_LONG_PERIOD);
    let macd = calculate_macd(&closes, MACD_FAST_PERIOD, MACD_SLOW_PERIOD, MACD_SIGNAL_PERIOD);
    let rsi = calculate_rsi(&closes, RSI_PERIOD, policy.flat_rsi);
    let volume_ratio = calculate_volume_ratio(&series.volumes(), VOLUME_RATIO_PERIOD);

    let rows = series
        .bars()
        .iter()
        .enumerate()
        .map(|(i, bar)| IndicatorRow {
            index: i,
            timestamp: bar.timestamp,
            close: bar.close,
            volume: bar.volume,
            ema20: ema20.get(i).copied(),
            ema50: ema50.get(i).copied(),
            ema12: macd.fast_ema.get(i).copied(),
            ema26: macd.slow_ema.get(i).copied(),
            rsi14: fill(rsi[i], policy.fill),
            macd: macd.macd.get(i).copied(),
            macd_signal: macd.signal.get(i).copied(),
            macd_histogram: macd.histogram.get(i).copied(),
            volume_ratio: fill(volume_ratio[i], policy.fill),
        })
        .collect();

    debug!(
        bars = series.len(),
        fill = ?policy.fill,
        flat_rsi = ?policy.flat_rsi,
        "computed indicator frame"
    );

    IndicatorFrame::from_rows(rows)
}

/// [`compute_indicators`] with the default policy.
pub fn compute_indicators_default(series: &PriceSeries) -> IndicatorFrame {
    compute_indicators(series, &PipelinePolicy::default())
}
