use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::ApiConfig;
use crate::error::Result;
use crate::fetch::{HttpTransport, RequestDescriptor, Transport};
use crate::models::{Candlestick, Period};

/// Renders a timestamp the way the service expects it on the wire:
/// RFC 3339 with millisecond precision and a `Z` suffix.
fn iso8601(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Accessor for the OHLCV endpoints of the market-data REST API.
///
/// Stateless: every method builds an independent request descriptor, hands it
/// to the transport, and decodes the reply. Concurrent calls from a shared
/// instance are safe.
#[derive(Debug, Clone)]
pub struct Ohlcv<T = HttpTransport> {
    config: ApiConfig,
    transport: T,
}

impl Ohlcv<HttpTransport> {
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self::with_transport(config, HttpTransport::new()?))
    }
}

impl<T: Transport> Ohlcv<T> {
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Full list of time periods supported for OHLCV timeseries requests.
    pub async fn list_all_periods(&self) -> Result<Vec<Period>> {
        let request = RequestDescriptor::get(self.config.endpoint_url("/v1/ohlcv/periods"))
            .properties(self.config.request_properties());
        let value = self.transport.execute(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Latest OHLCV timeseries for the requested symbol and period, returned
    /// by the service in time-descending order.
    ///
    /// `limit` accepts 1..=100000 per the service (default 100); values are
    /// forwarded unchecked and out-of-range requests are rejected remotely.
    pub async fn latest_data(
        &self,
        symbol_id: &str,
        period_id: &str,
        include_empty_items: Option<bool>,
        limit: Option<u32>,
    ) -> Result<Vec<Candlestick>> {
        let request = RequestDescriptor::get(
            self.config
                .endpoint_url(&format!("/v1/ohlcv/{}/latest", symbol_id)),
        )
        .properties(self.config.request_properties())
        .query("period_id", period_id)
        .query_opt("include_empty_items", include_empty_items)
        .body_opt("limit", limit);
        let value = self.transport.execute(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Historical OHLCV timeseries for the requested symbol and period,
    /// starting at `time_start`, returned by the service in time-ascending
    /// order. When `time_end` is absent the series runs until the limit is
    /// reached or data ends.
    pub async fn historic_data(
        &self,
        symbol_id: &str,
        period_id: &str,
        time_start: DateTime<Utc>,
        time_end: Option<DateTime<Utc>>,
        include_empty_items: Option<bool>,
        limit: Option<u32>,
    ) -> Result<Vec<Candlestick>> {
        let request = RequestDescriptor::get(
            self.config
                .endpoint_url(&format!("/v1/ohlcv/{}/history", symbol_id)),
        )
        .properties(self.config.request_properties())
        .query("period_id", period_id)
        .query("time_start", iso8601(time_start))
        .query_opt("include_empty_items", include_empty_items)
        .body_opt("time", time_end.map(iso8601))
        .body_opt("limit", limit);
        let value = self.transport.execute(request).await?;
        Ok(serde_json::from_value(value)?)
    }
}
