//! Amazon Bedrock client configuration.

use crate::defaults;
use crate::error::ChatError;
use crate::http::HttpTransport;
use crate::types::{HttpConfig, TextGenerationConfig};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

/// Configuration for [`crate::client::BedrockClient`].
pub struct BedrockConfig {
    /// Bedrock API key, sent as a bearer token. Empty means unauthenticated.
    pub api_key: SecretString,
    pub region: String,
    /// Overrides the regional runtime endpoint (used for VPC endpoints and mocks).
    pub base_url: Option<String>,
    pub model_id: String,
    pub generation: TextGenerationConfig,
    pub http_config: HttpConfig,
    /// Custom transport; when unset a `reqwest` transport is built from `http_config`.
    pub http_transport: Option<Arc<dyn HttpTransport>>,
}

impl std::fmt::Debug for BedrockConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BedrockConfig")
            .field("has_api_key", &!self.api_key.expose_secret().is_empty())
            .field("region", &self.region)
            .field("base_url", &self.base_url)
            .field("model_id", &self.model_id)
            .field("generation", &self.generation)
            .field("http_config", &self.http_config)
            .field("has_http_transport", &self.http_transport.is_some())
            .finish()
    }
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BedrockConfig {
    pub fn new() -> Self {
        Self {
            api_key: SecretString::from(String::new()),
            region: defaults::bedrock::REGION.to_string(),
            base_url: None,
            model_id: defaults::bedrock::MODEL_ID.to_string(),
            generation: TextGenerationConfig::default(),
            http_config: HttpConfig::default(),
            http_transport: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = SecretString::from(api_key.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_generation_config(mut self, generation: TextGenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Set a custom HTTP transport.
    pub fn with_http_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.http_transport = Some(transport);
        self
    }

    /// Base URL requests are sent to.
    pub fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => defaults::bedrock::runtime_base_url(&self.region),
        }
    }

    pub fn validate(&self) -> Result<(), ChatError> {
        if self.model_id.trim().is_empty() {
            return Err(ChatError::InvalidParameter(
                "Bedrock model id cannot be empty".to_string(),
            ));
        }
        if self.base_url.is_none() && self.region.trim().is_empty() {
            return Err(ChatError::InvalidParameter(
                "Bedrock region cannot be empty".to_string(),
            ));
        }
        if let Some(url) = &self.base_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ChatError::InvalidParameter(format!(
                "Bedrock base_url must be an http(s) URL, got '{url}'"
            )));
        }
        self.generation.validate_params()
    }
}
