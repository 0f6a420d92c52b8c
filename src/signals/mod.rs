//! Signal generation on top of indicator frames.

pub mod engine;
pub mod generator;

pub use engine::{PipelineOutput, SignalEngine};
pub use generator::*;
