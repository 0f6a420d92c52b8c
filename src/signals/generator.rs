//! Per-bar BUY/SELL/HOLD classification.

use tracing::debug;

use crate::config::{PipelinePolicy, UnknownRegimePolicy};
use crate::models::indicators::{IndicatorFrame, IndicatorRow};
use crate::models::regime::RegimeLabel;
use crate::models::signal::{Signal, SignalFrame, SignalRow};

pub const RSI_BUY_THRESHOLD: f64 = 55.0;
pub const RSI_SELL_THRESHOLD: f64 = 45.0;

/// `close > ema20 && rsi14 > 55 && macd > 0`, before any regime gating.
/// False when a required value is undefined.
pub fn buy_condition(row: &IndicatorRow) -> bool {
    match (row.ema20, row.rsi14, row.macd) {
        (Some(ema20), Some(rsi), Some(macd)) => {
            row.close > ema20 && rsi > RSI_BUY_THRESHOLD && macd > 0.0
        }
        _ => false,
    }
}

/// `close < ema20 && rsi14 < 45 && macd < 0`. False when a required value
/// is undefined.
pub fn sell_condition(row: &IndicatorRow) -> bool {
    match (row.ema20, row.rsi14, row.macd) {
        (Some(ema20), Some(rsi), Some(macd)) => {
            row.close < ema20 && rsi < RSI_SELL_THRESHOLD && macd < 0.0
        }
        _ => false,
    }
}

/// Whether the proxy regime lets BUY signals through.
pub fn regime_permits_buy(regime: RegimeLabel, policy: UnknownRegimePolicy) -> bool {
    match regime {
        RegimeLabel::Bullish | RegimeLabel::Neutral => true,
        RegimeLabel::Bearish => false,
        RegimeLabel::Unknown => policy == UnknownRegimePolicy::FailOpen,
    }
}

/// Label one bar. BUY is written first and SELL second, so SELL wins if
/// both ever hold.
pub fn classify_bar(row: &IndicatorRow, buys_allowed: bool) -> Signal {
    let mut signal = Signal::Hold;
    if buys_allowed && buy_condition(row) {
        signal = Signal::Buy;
    }
    if sell_condition(row) {
        signal = Signal::Sell;
    }
    signal
}

/// Stateless bar-by-bar signal generator. Carries no position state; each
/// bar is labelled from its own indicator values only.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalGenerator {
    policy: PipelinePolicy,
}

impl SignalGenerator {
    pub fn new(policy: PipelinePolicy) -> Self {
        Self { policy }
    }

    pub fn generate(&self, frame: &IndicatorFrame, regime: RegimeLabel) -> SignalFrame {
        let buys_allowed = regime_permits_buy(regime, self.policy.unknown_regime);

        let rows: Vec<SignalRow> = frame
            .iter()
            .map(|row| SignalRow {
                indicators: row.clone(),
                signal: classify_bar(row, buys_allowed),
            })
            .collect();

        let signals = SignalFrame::new(regime, rows);
        debug!(
            bars = signals.len(),
            %regime,
            buys_allowed,
            buy = signals.count(Signal::Buy),
            sell = signals.count(Signal::Sell),
            "generated signals"
        );
        signals
    }
}

pub fn generate_signals(
    frame: &IndicatorFrame,
    regime: RegimeLabel,
    policy: &PipelinePolicy,
) -> SignalFrame {
    SignalGenerator::new(*policy).generate(frame, regime)
}
