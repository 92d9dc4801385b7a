use std::collections::HashMap;

use crate::error::{ApiError, Result};

pub const DEFAULT_REST_ENDPOINT: &str = "https://rest.coinapi.io";
pub const API_KEY_HEADER: &str = "X-CoinAPI-Key";
pub const API_KEY_ENV: &str = "COINAPI_KEY";

/// Connection settings shared by every request: where the REST API lives and
/// which headers authenticate against it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub endpoint: String,
    pub api_key: String,
    pub extra_headers: HashMap<String, String>,
}

impl ApiConfig {
    pub fn new<T: Into<String>>(api_key: T) -> Self {
        Self {
            endpoint: DEFAULT_REST_ENDPOINT.to_string(),
            api_key: api_key.into(),
            extra_headers: HashMap::new(),
        }
    }

    /// Reads the API key from the `COINAPI_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            ApiError::message(format!(
                "Environment variable {} required for API authentication is not set",
                API_KEY_ENV
            ))
        })?;
        Ok(Self::new(api_key))
    }

    pub fn with_endpoint<T: Into<String>>(mut self, endpoint: T) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.extra_headers.insert(name.into(), value.into());
        self
    }

    /// Resolves an absolute API path against the configured base endpoint.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Headers merged into every outgoing request: the API key plus any
    /// configured extras.
    pub fn request_properties(&self) -> HashMap<String, String> {
        let mut headers = self.extra_headers.clone();
        headers.insert(API_KEY_HEADER.to_string(), self.api_key.clone());
        headers
    }
}
