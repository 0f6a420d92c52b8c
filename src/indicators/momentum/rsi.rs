//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::config::FlatRsiPolicy;

/// RSI from trailing average gain and loss.
///
/// RSI = 100 - (100 / (1 + RS)), RS = Average Gain / Average Loss.
/// A zero average loss saturates at 100; a window with neither gains nor
/// losses takes the flat policy value.
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64, flat: FlatRsiPolicy) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return flat.value();
        }
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Per-bar RSI using simple trailing averages of gains and losses.
///
/// Bar `i` uses the `period` close-to-close changes ending at bar `i`, so
/// the first `period` bars are `None`.
pub fn calculate_rsi(closes: &[f64], period: usize, flat: FlatRsiPolicy) -> Vec<Option<f64>> {
    let mut result = vec![None; closes.len()];
    if period == 0 || closes.len() <= period {
        return result;
    }

    let mut gains = Vec::with_capacity(closes.len() - 1);
    let mut losses = Vec::with_capacity(closes.len() - 1);
    for w in closes.windows(2) {
        let change = w[1] - w[0];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    // changes[j] is the move into bar j + 1
    for end in (period - 1)..gains.len() {
        let (Some(avg_gain), Some(avg_loss)) = (
            math::trailing_mean(&gains, end, period),
            math::trailing_mean(&losses, end, period),
        ) else {
            continue;
        };
        result[end + 1] = Some(rsi_from_averages(avg_gain, avg_loss, flat));
    }

    result
}
