//! Series stored as `<data_dir>/<TICKER>.json`.
//!
//! Each file is a JSON array of row objects such as
//! `{"Date": "2024-05-17", "Open": 50.1, "Close": 50.5, "Volume": 1200}`.
//! Column names go through the boundary parser, so casing does not matter.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use crate::indicators::parser::parse_series_from_rows;
use crate::models::series::PriceSeries;
use crate::services::market_data::{MarketDataProvider, ProviderError};

pub struct JsonFileProvider {
    data_dir: PathBuf,
}

impl JsonFileProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, ticker: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", ticker))
    }
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn row_to_strings(row: &Map<String, Value>) -> HashMap<String, String> {
    row.iter()
        .filter_map(|(k, v)| value_to_string(v).map(|s| (k.clone(), s)))
        .collect()
}

#[async_trait]
impl MarketDataProvider for JsonFileProvider {
    async fn fetch_series(&self, ticker: &str) -> Result<PriceSeries, ProviderError> {
        let path = self.path_for(ticker);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ProviderError::NotFound {
                    ticker: ticker.to_string(),
                })
            }
            Err(source) => {
                return Err(ProviderError::Io {
                    ticker: ticker.to_string(),
                    source,
                })
            }
        };

        let rows: Vec<Map<String, Value>> =
            serde_json::from_str(&content).map_err(|source| ProviderError::Json {
                ticker: ticker.to_string(),
                source,
            })?;
        let rows: Vec<HashMap<String, String>> = rows.iter().map(row_to_strings).collect();

        let series = parse_series_from_rows(&rows).map_err(|source| ProviderError::Series {
            ticker: ticker.to_string(),
            source,
        })?;

        debug!(ticker, bars = series.len(), path = %path.display(), "loaded series");
        Ok(series)
    }
}
