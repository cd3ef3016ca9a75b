//! HTTP transport abstraction.
//!
//! The client never talks to `reqwest` directly; it hands the final URL,
//! headers and JSON body to an [`HttpTransport`]. Tests and embedders can
//! substitute their own transport to observe requests or return synthetic
//! responses.

use crate::error::ChatError;
use crate::types::HttpConfig;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

/// Transport-level request data for JSON POST requests.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Sends one JSON POST and returns whatever the server answered.
///
/// Implementations report only transport failures as errors (as
/// [`ChatError::NetworkError`]); non-success statuses are returned as
/// responses and classified by the caller. Implementations must not retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, ChatError>;
}

/// Default transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build the underlying client from an [`HttpConfig`].
    ///
    /// Extra headers may not carry `Authorization`; the bearer token comes
    /// from the API key and is marked sensitive there. Zero timeouts are
    /// rejected because every request would fail before reaching Bedrock.
    pub fn from_config(config: &HttpConfig) -> Result<Self, ChatError> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(non_zero("timeout", timeout)?);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(non_zero("connect_timeout", connect_timeout)?);
        }

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| {
                ChatError::ConfigurationError(format!("Invalid proxy URL '{proxy_url}': {e}"))
            })?;
            builder = builder.proxy(proxy);
        }

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        if !config.headers.is_empty() {
            builder = builder.default_headers(extra_headers(config)?);
        }

        // Reached only when the TLS backend cannot start, not on bad input.
        let client = builder
            .build()
            .map_err(|e| ChatError::ServerError(format!("HTTP client unavailable: {e}")))?;
        Ok(Self { client })
    }
}

fn non_zero(field: &str, value: Duration) -> Result<Duration, ChatError> {
    if value.is_zero() {
        return Err(ChatError::ConfigurationError(format!(
            "http {field} must be greater than zero"
        )));
    }
    Ok(value)
}

fn extra_headers(config: &HttpConfig) -> Result<HeaderMap, ChatError> {
    let mut headers = HeaderMap::new();
    for (k, v) in &config.headers {
        let name = HeaderName::from_bytes(k.as_bytes()).map_err(|e| {
            ChatError::ConfigurationError(format!("Invalid header name '{k}': {e}"))
        })?;
        if name == AUTHORIZATION {
            return Err(ChatError::ConfigurationError(
                "Authorization is set from the Bedrock API key, not from http headers".to_string(),
            ));
        }
        let value = HeaderValue::from_str(v).map_err(|e| {
            ChatError::ConfigurationError(format!("Invalid header value for '{k}': {e}"))
        })?;
        headers.insert(name, value);
    }
    Ok(headers)
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, ChatError> {
        let resp = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .json(&request.body)
            .send()
            .await
            .map_err(|e| ChatError::NetworkError(describe_reqwest_error(&e)))?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|e| ChatError::NetworkError(describe_reqwest_error(&e)))?;

        Ok(HttpTransportResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}

fn describe_reqwest_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        err.to_string()
    }
}
