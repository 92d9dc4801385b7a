use std::future::Future;
use std::time::Duration;

use serde_json::Value;

use crate::error::{ApiError, Context};

use super::request::{build_headers, RequestDescriptor};
use super::FetchResult;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared request-execution seam. Implementations perform one HTTP exchange
/// per call and resolve with the decoded JSON body or a failure carrying the
/// service's diagnostic unchanged.
pub trait Transport {
    fn execute(
        &self,
        request: RequestDescriptor,
    ) -> impl Future<Output = FetchResult<Value>> + Send;
}

/// Transport backed by a shared `reqwest` client. Cheap to clone; concurrent
/// calls multiplex over the client's own connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to construct HTTP client")?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: RequestDescriptor) -> FetchResult<Value> {
        let headers = build_headers(&request.headers)?;

        log::debug!("GET {} query={:?}", request.url, request.query);

        let mut builder = self
            .client
            .get(&request.url)
            .headers(headers)
            .query(&request.query);
        if !request.body.is_empty() {
            builder = builder.json(&request.body);
        }

        let response = builder
            .send()
            .await
            .with_context(|| format!("Request failed for {}", request.url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("GET {} returned {}", request.url, status);
            return Err(ApiError::Status { status, body });
        }

        let value = response
            .json::<Value>()
            .await
            .with_context(|| format!("Failed to decode response body for {}", request.url))?;
        Ok(value)
    }
}
