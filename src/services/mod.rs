//! Data source adapters.

pub mod file_provider;
pub mod market_data;
pub mod retry;

pub use file_provider::JsonFileProvider;
pub use market_data::{InMemoryProvider, MarketDataProvider, ProviderError};
pub use retry::RetryingProvider;
