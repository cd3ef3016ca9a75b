//! Titan Text `InvokeModel` payloads.
//!
//! Request: `{ "inputText": ..., "textGenerationConfig": { ... } }`
//! Response: `{ "inputTextTokenCount": n, "results": [ { "tokenCount": n, "outputText": ..., "completionReason": ... } ] }`

use super::generation::TextGenerationConfig;
use crate::error::ChatError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanRequest {
    pub input_text: String,
    pub text_generation_config: TextGenerationConfig,
}

impl TitanRequest {
    pub fn new(prompt: impl Into<String>, config: &TextGenerationConfig) -> Self {
        Self {
            input_text: prompt.into(),
            text_generation_config: config.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_text_token_count: Option<u32>,
    pub results: Vec<TitanResult>,
}

/// One generated candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_count: Option<u32>,
    pub output_text: String,
    /// e.g. `FINISH`, `LENGTH`, `STOP_CRITERIA_MET`, `CONTENT_FILTERED`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_reason: Option<String>,
}

impl TitanResponse {
    /// Parse a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ChatError> {
        serde_json::from_slice(body).map_err(|e| {
            ChatError::MalformedResponseError(format!("invalid Titan response body: {e}"))
        })
    }

    /// Text of the first result candidate.
    ///
    /// Only the first candidate is ever read; an empty `results` list is an
    /// error, never an empty string.
    pub fn first_output_text(&self) -> Result<&str, ChatError> {
        self.results
            .first()
            .map(|r| r.output_text.as_str())
            .ok_or_else(|| {
                ChatError::MalformedResponseError("response contains no results".to_string())
            })
    }

    /// Owned variant of [`Self::first_output_text`].
    pub fn into_first_output_text(self) -> Result<String, ChatError> {
        self.results
            .into_iter()
            .next()
            .map(|r| r.output_text)
            .ok_or_else(|| {
                ChatError::MalformedResponseError("response contains no results".to_string())
            })
    }
}
