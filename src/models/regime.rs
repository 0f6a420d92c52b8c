use std::fmt;

use serde::{Deserialize, Serialize};

/// Trend state of the market proxy.
///
/// `Unknown` is not a market state: it means the proxy frame was too short
/// or had undefined values on its last bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegimeLabel {
    Bullish,
    Neutral,
    Bearish,
    Unknown,
}

impl RegimeLabel {
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::Neutral => "Neutral",
            Self::Bearish => "Bearish",
            Self::Unknown => "Unknown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Bullish => "At least two of RSI, EMA trend and MACD are bullish",
            Self::Neutral => "Exactly one of RSI, EMA trend and MACD is bullish",
            Self::Bearish => "None of RSI, EMA trend and MACD is bullish",
            Self::Unknown => "Not enough proxy data to classify",
        }
    }
}

impl fmt::Display for RegimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
