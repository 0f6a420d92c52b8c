//! Runtime configuration, read from the environment (and `.env` via dotenvy
//! in the binaries).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PROXY_TICKER: &str = "SPY";
pub const DEFAULT_TARGET_TICKERS: [&str; 9] = [
    "TQQQ", "YINN", "FNGU", "SOXL", "FXI", "EURL", "TNA", "GDXU", "JNUG",
];
/// Roughly three months of trading days.
pub const DEFAULT_LOOKBACK_PERIOD: usize = 63;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// Deployment environment, `sandbox` unless `APP_ENV` says otherwise.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// RSI value when both average gain and average loss are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlatRsiPolicy {
    Zero,
    #[default]
    Fifty,
}

impl FlatRsiPolicy {
    pub fn value(self) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::Fifty => 50.0,
        }
    }
}

impl FromStr for FlatRsiPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" | "0" => Ok(Self::Zero),
            "fifty" | "50" => Ok(Self::Fifty),
            _ => Err(invalid("FLAT_RSI_POLICY", s)),
        }
    }
}

/// What warm-up bars carry for indicators that are not yet defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillPolicy {
    /// Replace undefined values with 0.0. Zero RSI and MACD can satisfy the
    /// SELL rule during warm-up.
    Sentinel,
    #[default]
    Undefined,
}

impl FromStr for FillPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sentinel" | "zero" => Ok(Self::Sentinel),
            "undefined" | "none" => Ok(Self::Undefined),
            _ => Err(invalid("FILL_POLICY", s)),
        }
    }
}

/// How an `Unknown` proxy regime gates BUY signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownRegimePolicy {
    /// Unknown behaves like any non-bearish regime.
    FailOpen,
    /// Unknown blocks BUY exactly like Bearish.
    #[default]
    FailSafe,
}

impl FromStr for UnknownRegimePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "fail_open" | "open" => Ok(Self::FailOpen),
            "fail_safe" | "safe" => Ok(Self::FailSafe),
            _ => Err(invalid("UNKNOWN_REGIME_POLICY", s)),
        }
    }
}

/// Policy flags shared by the indicator engine and the signal generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PipelinePolicy {
    pub flat_rsi: FlatRsiPolicy,
    pub fill: FillPolicy,
    pub unknown_regime: UnknownRegimePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total fetch attempts per ticker, including the first.
    pub max_attempts: usize,
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    pub proxy_ticker: String,
    pub target_tickers: Vec<String>,
    /// Bars kept from the tail of each series; 0 keeps everything.
    pub lookback_period: usize,
    pub data_dir: PathBuf,
    pub include_frames: bool,
    pub retry: RetryConfig,
    pub policy: PipelinePolicy,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            proxy_ticker: DEFAULT_PROXY_TICKER.to_string(),
            target_tickers: DEFAULT_TARGET_TICKERS.iter().map(|t| t.to_string()).collect(),
            lookback_period: DEFAULT_LOOKBACK_PERIOD,
            data_dir: PathBuf::from("data"),
            include_frames: false,
            retry: RetryConfig::default(),
            policy: PipelinePolicy::default(),
        }
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| invalid(key, value))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

impl ScannerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(proxy) = lookup("PROXY_TICKER") {
            let proxy = proxy.trim().to_ascii_uppercase();
            if proxy.is_empty() {
                return Err(ConfigError::Empty("PROXY_TICKER"));
            }
            config.proxy_ticker = proxy;
        }

        if let Some(targets) = lookup("TARGET_TICKERS") {
            let tickers: Vec<String> = targets
                .split(',')
                .map(|t| t.trim().to_ascii_uppercase())
                .filter(|t| !t.is_empty())
                .collect();
            if tickers.is_empty() {
                return Err(ConfigError::Empty("TARGET_TICKERS"));
            }
            config.target_tickers = tickers;
        }

        if let Some(v) = lookup("LOOKBACK_PERIOD") {
            config.lookback_period = parse_var("LOOKBACK_PERIOD", &v)?;
        }
        if let Some(v) = lookup("DATA_DIR") {
            config.data_dir = PathBuf::from(v.trim());
        }
        if let Some(v) = lookup("INCLUDE_FRAMES") {
            config.include_frames = parse_bool("INCLUDE_FRAMES", &v)?;
        }
        if let Some(v) = lookup("FETCH_ATTEMPTS") {
            let attempts: usize = parse_var("FETCH_ATTEMPTS", &v)?;
            if attempts == 0 {
                return Err(invalid("FETCH_ATTEMPTS", &v));
            }
            config.retry.max_attempts = attempts;
        }
        if let Some(v) = lookup("FETCH_RETRY_DELAY_MS") {
            config.retry.delay_ms = parse_var("FETCH_RETRY_DELAY_MS", &v)?;
        }
        if let Some(v) = lookup("FLAT_RSI_POLICY") {
            config.policy.flat_rsi = v.parse()?;
        }
        if let Some(v) = lookup("FILL_POLICY") {
            config.policy.fill = v.parse()?;
        }
        if let Some(v) = lookup("UNKNOWN_REGIME_POLICY") {
            config.policy.unknown_regime = v.parse()?;
        }

        Ok(config)
    }
}
