use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One bar of a [`PriceSeries`](super::PriceSeries) with its derived
/// indicator values. `None` marks a value still inside its warm-up window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    /// Position of the bar in its series.
    pub index: usize,
    pub timestamp: NaiveDate,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    pub ema20: Option<f64>,
    pub ema50: Option<f64>,
    pub ema12: Option<f64>,
    pub ema26: Option<f64>,
    pub rsi14: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_histogram: Option<f64>,
    pub volume_ratio: Option<f64>,
}

impl IndicatorRow {
    /// EMAs are defined from the first bar, but a value computed before the
    /// bar count reaches the span is still dominated by the seed.
    pub fn is_warm(&self, period: usize) -> bool {
        self.index + 1 >= period
    }
}

/// Indicator columns for a whole series, aligned by position with the
/// input bars. Immutable once built.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicatorFrame {
    rows: Vec<IndicatorRow>,
}

impl IndicatorFrame {
    pub fn from_rows(rows: Vec<IndicatorRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&IndicatorRow> {
        self.rows.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndicatorRow> {
        self.rows.iter()
    }
}
