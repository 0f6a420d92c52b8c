//! Row parsing at the ingestion boundary.
//!
//! Data sources disagree on column casing (`Close`, `close`, `CLOSE`) and on
//! the name of the date column. Names are normalised here, once; nothing
//! downstream looks at raw column names.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::indicators::error::SeriesError;
use crate::models::series::{Bar, PriceSeries};

const TIMESTAMP_ALIASES: [&str; 4] = ["timestamp", "date", "datetime", "time"];

pub fn parse_f64(field: &str, value: &str) -> Result<f64, SeriesError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| SeriesError::InvalidNumericFormat {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` and RFC 3339 timestamps; the
/// time of day is discarded.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, SeriesError> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.date_naive());
    }
    Err(SeriesError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn canonical_name(raw: &str) -> String {
    let lower = raw.trim().to_ascii_lowercase();
    if TIMESTAMP_ALIASES.contains(&lower.as_str()) {
        "timestamp".to_string()
    } else {
        lower
    }
}

/// Lower-case and trim column names, folding date aliases into `timestamp`.
pub fn normalize_columns(
    row: &HashMap<String, String>,
) -> Result<HashMap<String, String>, SeriesError> {
    let mut normalized = HashMap::with_capacity(row.len());
    for (key, value) in row {
        let name = canonical_name(key);
        if normalized.insert(name.clone(), value.clone()).is_some() {
            return Err(SeriesError::DuplicateField(name));
        }
    }
    Ok(normalized)
}

fn optional_f64(row: &HashMap<String, String>, field: &str) -> Result<Option<f64>, SeriesError> {
    row.get(field)
        .filter(|v| !v.trim().is_empty())
        .map(|v| parse_f64(field, v))
        .transpose()
}

pub fn parse_bar_from_map(data: &HashMap<String, String>) -> Result<Bar, SeriesError> {
    let row = normalize_columns(data)?;

    let timestamp = row
        .get("timestamp")
        .ok_or_else(|| SeriesError::MissingField("timestamp".to_string()))
        .and_then(|v| parse_date("timestamp", v))?;

    let close = row
        .get("close")
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| SeriesError::MissingField("close".to_string()))
        .and_then(|v| parse_f64("close", v))?;

    Ok(Bar {
        timestamp,
        open: optional_f64(&row, "open")?,
        high: optional_f64(&row, "high")?,
        low: optional_f64(&row, "low")?,
        close,
        volume: optional_f64(&row, "volume")?,
    })
}

/// Parse and validate a whole table. Errors name the offending row.
pub fn parse_series_from_rows(rows: &[HashMap<String, String>]) -> Result<PriceSeries, SeriesError> {
    let bars = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            parse_bar_from_map(row).map_err(|e| SeriesError::InvalidRow {
                index,
                source: Box::new(e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    PriceSeries::new(bars)
}
