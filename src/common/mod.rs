//! Numeric helpers shared across indicator implementations.

pub mod math;
