//! Titan Text `InvokeModel` standard.
//!
//! Covers URL layout, headers, body construction and response parsing. The
//! client combines these with a transport; nothing here performs I/O.

use crate::error::ChatError;
use crate::types::{TextGenerationConfig, TitanRequest, TitanResponse};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

#[derive(Debug, Clone, Copy, Default)]
pub struct TitanTextStandard;

impl TitanTextStandard {
    pub fn new() -> Self {
        Self
    }

    /// `{base_url}/model/{model_id}/invoke`, with the model id percent-encoded.
    pub fn invoke_url(&self, base_url: &str, model_id: &str) -> String {
        let model = urlencoding::encode(model_id);
        format!("{}/model/{model}/invoke", base_url.trim_end_matches('/'))
    }

    /// JSON content negotiation plus bearer auth when an API key is set.
    pub fn build_headers(&self, api_key: &str) -> Result<HeaderMap, ChatError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        // SigV4 signing is not done here; Bedrock API keys are sent as bearer tokens.
        let api_key = api_key.trim();
        if !api_key.is_empty() {
            let mut value = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                ChatError::ConfigurationError(format!("Invalid Bedrock bearer token: {e}"))
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    pub fn build_request(&self, prompt: &str, config: &TextGenerationConfig) -> TitanRequest {
        TitanRequest::new(prompt, config)
    }

    pub fn transform_request(&self, request: &TitanRequest) -> Result<serde_json::Value, ChatError> {
        serde_json::to_value(request).map_err(|e| {
            ChatError::InvalidParameter(format!("failed to serialize Titan request: {e}"))
        })
    }

    /// Turn a raw response into a parsed body or a classified error.
    pub fn transform_response(
        &self,
        status: u16,
        body: &[u8],
        reason: Option<&str>,
    ) -> Result<TitanResponse, ChatError> {
        if !(200..300).contains(&status) {
            let text = String::from_utf8_lossy(body);
            return Err(super::errors::classify_bedrock_http_error(
                status, &text, reason,
            ));
        }
        TitanResponse::from_slice(body)
    }
}
