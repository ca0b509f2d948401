//! HTTP seam between the Tray client and the network.
//!
//! `Transport` is the only place requests leave the process. The production
//! implementation wraps a `reqwest::Client` with a fixed timeout; tests point the
//! same implementation at a mock server.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::tray::TrayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A request against the Tray API.
///
/// Query values may carry tokens, so `Debug` prints only the parameter names.
#[derive(Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub form: Option<Vec<(String, String)>>,
}

impl TransportRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            form: None,
        }
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn form(mut self, fields: Vec<(String, String)>) -> Self {
        self.form = Some(fields);
        self
    }
}

impl std::fmt::Debug for TransportRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let query: Vec<&str> = self.query.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("TransportRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("query", &query)
            .field("form_fields", &self.form.as_ref().map(Vec::len))
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    /// Parsed JSON body; `Value::Null` for an empty body and `Value::String` when
    /// the body is not JSON.
    pub body: Value,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Best-effort error message from a Tray error body.
    pub fn error_message(&self) -> String {
        match &self.body {
            Value::Object(map) => map
                .get("message")
                .or_else(|| map.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| self.body.to_string()),
            Value::String(text) => text.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request.
    ///
    /// # Returns
    /// - `Ok(TransportResponse)` - A response arrived, whatever its status
    /// - `Err(TrayError::RequestError)` - Connection failure, timeout or unreadable body
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TrayError>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport whose requests fail after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, TrayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TrayError::RequestError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TrayError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, &request.url)
            .query(&request.query);
        if let Some(form) = &request.form {
            builder = builder.form(form);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TrayError::RequestError(format!("{} {} timed out", request.method, request.url))
            } else {
                TrayError::RequestError(format!(
                    "{} {} failed: {}",
                    request.method,
                    request.url,
                    e.without_url()
                ))
            }
        })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            TrayError::RequestError(format!(
                "failed to read response body from {}: {}",
                request.url,
                e.without_url()
            ))
        })?;

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        Ok(TransportResponse { status, body })
    }
}
