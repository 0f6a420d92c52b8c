//! Market regime classification of a proxy instrument.

pub mod classifier;

pub use classifier::{assess_regime, assess_regime_detailed, RegimeAssessment, RegimeVotes};
