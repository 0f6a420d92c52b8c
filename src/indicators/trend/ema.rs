//! EMA (Exponential Moving Average) indicator

use crate::common::math;

/// Warm EMA of the close series.
///
/// Seeded with the first close and defined at every bar:
/// `ema = ema_prev + 2/(period+1) * (close - ema_prev)`.
pub fn calculate_ema(closes: &[f64], period: usize) -> Vec<f64> {
    math::ema_series(closes, period)
}

/// Several EMAs over the same closes, in the order of `periods`.
pub fn calculate_emas(closes: &[f64], periods: &[usize]) -> Vec<Vec<f64>> {
    periods
        .iter()
        .map(|&period| calculate_ema(closes, period))
        .collect()
}
