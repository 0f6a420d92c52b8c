//! Application services built on the pipeline.

pub mod scanner;

pub use scanner::*;
