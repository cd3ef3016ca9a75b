//! Amazon Bedrock Titan Text client.
//!
//! One call to [`BedrockClient::respond`] issues exactly one `InvokeModel`
//! request. Failures are returned to the caller as-is; nothing is retried.

use crate::config::BedrockConfig;
use crate::error::ChatError;
use crate::http::{HttpTransport, HttpTransportRequest, ReqwestTransport};
use crate::standards::bedrock::TitanTextStandard;
use crate::traits::RequestResponder;
use crate::types::{TitanRequest, TitanResponse};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::sync::Arc;

pub struct BedrockClient {
    config: BedrockConfig,
    standard: TitanTextStandard,
    transport: Arc<dyn HttpTransport>,
    invoke_url: String,
}

impl std::fmt::Debug for BedrockClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BedrockClient")
            .field("config", &self.config)
            .field("invoke_url", &self.invoke_url)
            .finish()
    }
}

impl BedrockClient {
    /// Validate the config and set up the transport.
    pub fn new(mut config: BedrockConfig) -> Result<Self, ChatError> {
        config.validate()?;
        let transport: Arc<dyn HttpTransport> = match config.http_transport.take() {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::from_config(&config.http_config)?),
        };
        let standard = TitanTextStandard::new();
        let invoke_url = standard.invoke_url(&config.resolved_base_url(), &config.model_id);
        Ok(Self {
            config,
            standard,
            transport,
            invoke_url,
        })
    }

    pub fn config(&self) -> &BedrockConfig {
        &self.config
    }

    pub fn invoke_url(&self) -> &str {
        &self.invoke_url
    }

    /// Request payload for a prompt, using the configured generation parameters.
    pub fn build_request(&self, prompt: &str) -> TitanRequest {
        self.standard.build_request(prompt, &self.config.generation)
    }

    /// Invoke the model and return the full parsed response.
    pub async fn invoke(&self, prompt: &str) -> Result<TitanResponse, ChatError> {
        let request = self.build_request(prompt);
        let body = self.standard.transform_request(&request)?;
        let headers = self
            .standard
            .build_headers(self.config.api_key.expose_secret())?;

        tracing::debug!(
            target: "bedrock_chat::http",
            model = %self.config.model_id,
            url = %self.invoke_url,
            prompt_len = prompt.len(),
            "sending request"
        );

        let response = self
            .transport
            .execute_json(HttpTransportRequest {
                url: self.invoke_url.clone(),
                headers,
                body,
            })
            .await
            .inspect_err(|e| {
                tracing::warn!(target: "bedrock_chat::http", url = %self.invoke_url, err = %e, "request failed");
            })?;

        let reason = reqwest::StatusCode::from_u16(response.status)
            .ok()
            .and_then(|s| s.canonical_reason());
        let parsed = self
            .standard
            .transform_response(response.status, &response.body, reason)
            .inspect_err(|e| {
                tracing::warn!(
                    target: "bedrock_chat::http",
                    status = response.status,
                    err = %e,
                    "invoke failed"
                );
            })?;

        tracing::debug!(
            target: "bedrock_chat::http",
            status = response.status,
            input_tokens = ?parsed.input_text_token_count,
            results = parsed.results.len(),
            "response received"
        );
        Ok(parsed)
    }

    /// Invoke the model and return the first candidate's text.
    pub async fn generate(&self, prompt: &str) -> Result<String, ChatError> {
        self.invoke(prompt).await?.into_first_output_text()
    }
}

#[async_trait]
impl RequestResponder for BedrockClient {
    async fn respond(&self, prompt: &str) -> Result<String, ChatError> {
        self.generate(prompt).await
    }
}
