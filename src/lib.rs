pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod ohlcv;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use models::{Candlestick, Period};
pub use ohlcv::Ohlcv;
