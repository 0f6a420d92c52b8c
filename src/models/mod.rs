//! Value types flowing through the pipeline.

pub mod indicators;
pub mod regime;
pub mod series;
pub mod signal;

pub use indicators::{IndicatorFrame, IndicatorRow};
pub use regime::RegimeLabel;
pub use series::{Bar, PriceSeries};
pub use signal::{Signal, SignalFrame, SignalRow};
