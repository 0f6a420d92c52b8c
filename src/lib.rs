//! Daily ETF signal pipeline.
//!
//! Turns an OHLCV series into indicator columns (EMA, RSI, MACD), classifies
//! the regime of a market proxy, and labels every bar of a target series
//! BUY, SELL or HOLD.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod regime;
pub mod services;
pub mod signals;

pub use config::{FillPolicy, FlatRsiPolicy, PipelinePolicy, ScannerConfig, UnknownRegimePolicy};
pub use indicators::{compute_indicators, compute_indicators_default, SeriesError};
pub use models::{Bar, IndicatorFrame, IndicatorRow, PriceSeries, RegimeLabel, Signal, SignalFrame};
pub use regime::{assess_regime, assess_regime_detailed};
pub use signals::{generate_signals, SignalGenerator};
