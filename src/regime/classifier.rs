//! Majority vote over RSI strength, EMA trend and MACD sign on the latest
//! bar of the proxy frame.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::indicators::{IndicatorFrame, IndicatorRow};
use crate::models::regime::RegimeLabel;

/// Fewer bars than this always classify as `Unknown`.
pub const MIN_REGIME_BARS: usize = 20;
pub const RSI_BULLISH_THRESHOLD: f64 = 55.0;

/// The three independent conditions evaluated on the last bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeVotes {
    /// `rsi14 > 55`
    pub rsi_strong: bool,
    /// `ema20 > ema50`
    pub ema_uptrend: bool,
    /// `macd > 0`
    pub macd_positive: bool,
}

impl RegimeVotes {
    pub fn count(&self) -> usize {
        [self.rsi_strong, self.ema_uptrend, self.macd_positive]
            .iter()
            .filter(|&&v| v)
            .count()
    }

    pub fn label(&self) -> RegimeLabel {
        match self.count() {
            0 => RegimeLabel::Bearish,
            1 => RegimeLabel::Neutral,
            _ => RegimeLabel::Bullish,
        }
    }

    fn from_row(row: &IndicatorRow) -> Option<Self> {
        let finite = |v: Option<f64>| v.filter(|x| x.is_finite());
        let rsi = finite(row.rsi14)?;
        let ema20 = finite(row.ema20)?;
        let ema50 = finite(row.ema50)?;
        let macd = finite(row.macd)?;

        Some(Self {
            rsi_strong: rsi > RSI_BULLISH_THRESHOLD,
            ema_uptrend: ema20 > ema50,
            macd_positive: macd > 0.0,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeAssessment {
    pub label: RegimeLabel,
    /// `None` when the label is `Unknown`.
    pub votes: Option<RegimeVotes>,
    pub bars: usize,
}

impl RegimeAssessment {
    pub fn unknown(bars: usize) -> Self {
        Self {
            label: RegimeLabel::Unknown,
            votes: None,
            bars,
        }
    }
}

/// Classify the regime from the last bar of `frame`, keeping the votes.
pub fn assess_regime_detailed(frame: &IndicatorFrame) -> RegimeAssessment {
    let bars = frame.len();
    if bars < MIN_REGIME_BARS {
        debug!(bars, required = MIN_REGIME_BARS, "regime unknown: too few bars");
        return RegimeAssessment::unknown(bars);
    }

    let Some(votes) = frame.last().and_then(RegimeVotes::from_row) else {
        debug!(bars, "regime unknown: undefined indicator on last bar");
        return RegimeAssessment::unknown(bars);
    };

    RegimeAssessment {
        label: votes.label(),
        votes: Some(votes),
        bars,
    }
}

/// Classify the regime from the last bar of `frame`.
///
/// No smoothing across bars: a single condition flipping near its
/// threshold can flip the label from one day to the next.
pub fn assess_regime(frame: &IndicatorFrame) -> RegimeLabel {
    assess_regime_detailed(frame).label
}
