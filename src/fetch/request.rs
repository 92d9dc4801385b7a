use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value};

use crate::error::Context;

use super::FetchResult;

/// One outgoing request, assembled fresh per accessor call and handed to the
/// transport unchanged. Always a GET; body parameters ride as a JSON document
/// when present.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Map<String, Value>,
    pub headers: HashMap<String, String>,
}

impl RequestDescriptor {
    pub fn get<T: Into<String>>(url: T) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            body: Map::new(),
            headers: HashMap::new(),
        }
    }

    pub fn query<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a query parameter only when a value is supplied.
    pub fn query_opt<K: Into<String>, V: ToString>(mut self, key: K, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.query.push((key.into(), value.to_string()));
        }
        self
    }

    pub fn body_param<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.body.insert(key.into(), value.into());
        self
    }

    /// Adds a body parameter only when a value is supplied.
    pub fn body_opt<K: Into<String>, V: Into<Value>>(mut self, key: K, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.body.insert(key.into(), value.into());
        }
        self
    }

    /// Merges the per-call defaults supplied by the configuration, typically
    /// authentication headers.
    pub fn properties(mut self, properties: HashMap<String, String>) -> Self {
        self.headers.extend(properties);
        self
    }
}

pub fn build_headers(headers: &HashMap<String, String>) -> FetchResult<HeaderMap> {
    let mut map = HeaderMap::new();
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .with_context(|| format!("Invalid header name: {}", key))?;
        let header_value = HeaderValue::from_str(value)
            .with_context(|| format!("Invalid header value for {}", key))?;
        map.insert(name, header_value);
    }
    Ok(map)
}
