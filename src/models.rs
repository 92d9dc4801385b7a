use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One supported aggregation granularity, as reported by `/v1/ohlcv/periods`.
///
/// Only `period_id` is guaranteed; the remaining metadata fields are passed
/// through from the service when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub period_id: String,
    #[serde(default)]
    pub length_seconds: Option<u64>,
    #[serde(default)]
    pub length_months: Option<u64>,
    #[serde(default)]
    pub unit_count: Option<u64>,
    #[serde(default)]
    pub unit_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// One time-bucketed OHLCV aggregation record.
///
/// `time_open`/`time_close` are the first and last trade times inside the
/// bucket and are absent for buckets without activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candlestick {
    pub time_period_start: DateTime<Utc>,
    pub time_period_end: DateTime<Utc>,
    #[serde(default)]
    pub time_open: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_close: Option<DateTime<Utc>>,
    pub price_open: f64,
    pub price_high: f64,
    pub price_low: f64,
    pub price_close: f64,
    pub volume_traded: f64,
    #[serde(default)]
    pub trades_count: u64,
}
