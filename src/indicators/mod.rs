pub mod engine;
pub mod error;
pub mod parser;
pub mod validation;

pub mod momentum;
pub mod trend;
pub mod volume;

pub use engine::{compute_indicators, compute_indicators_default};
pub use error::SeriesError;
pub use parser::*;
pub use validation::*;
