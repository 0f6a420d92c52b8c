use chrono::NaiveDate;
use thiserror::Error;

/// Input rejected at the ingestion boundary.
///
/// These are caller contract violations. Short or empty series are not
/// errors; they produce undefined indicator values instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("field {0} appears more than once after normalising column names")]
    DuplicateField(String),

    #[error("invalid numeric format for {field}: {value:?}")]
    InvalidNumericFormat { field: String, value: String },

    #[error("invalid date for {field}: {value:?}")]
    InvalidDate { field: String, value: String },

    #[error("non-finite {field} at bar {index}")]
    NonFiniteValue { field: &'static str, index: usize },

    #[error("negative volume at bar {index}")]
    NegativeVolume { index: usize },

    #[error("timestamps must be strictly increasing: bar {index} ({current}) follows {previous}")]
    NonIncreasingTimestamp {
        index: usize,
        previous: NaiveDate,
        current: NaiveDate,
    },

    #[error("row {index}: {source}")]
    InvalidRow {
        index: usize,
        #[source]
        source: Box<SeriesError>,
    },
}
