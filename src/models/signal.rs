use std::fmt;

use serde::{Deserialize, Serialize};

use super::indicators::IndicatorRow;
use super::regime::RegimeLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    #[default]
    Hold,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
            Self::Hold => "HOLD",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRow {
    #[serde(flatten)]
    pub indicators: IndicatorRow,
    pub signal: Signal,
}

/// Indicator frame labelled bar by bar, together with the regime that
/// gated it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalFrame {
    regime: RegimeLabel,
    rows: Vec<SignalRow>,
}

impl SignalFrame {
    pub fn new(regime: RegimeLabel, rows: Vec<SignalRow>) -> Self {
        Self { regime, rows }
    }

    pub fn regime(&self) -> RegimeLabel {
        self.regime
    }

    pub fn rows(&self) -> &[SignalRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&SignalRow> {
        self.rows.last()
    }

    /// Signal on the most recent bar, `Hold` for an empty frame.
    pub fn last_signal(&self) -> Signal {
        self.rows.last().map(|r| r.signal).unwrap_or_default()
    }

    pub fn signals(&self) -> Vec<Signal> {
        self.rows.iter().map(|r| r.signal).collect()
    }

    pub fn count(&self, signal: Signal) -> usize {
        self.rows.iter().filter(|r| r.signal == signal).count()
    }
}
