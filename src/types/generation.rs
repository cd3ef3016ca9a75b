//! Titan text generation parameters.

use crate::defaults::generation as defaults;
use crate::error::ChatError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Generation parameters sent as `textGenerationConfig`.
///
/// Every request built from the same config carries the same values; the
/// config is never mutated by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TextGenerationConfig {
    /// Maximum number of tokens to generate. Titan Text Express caps this at 8192.
    #[validate(range(min = 1, max = 8192))]
    pub max_token_count: u32,

    /// Randomness of sampling.
    #[validate(range(min = 0.0, max = 1.0))]
    pub temperature: f64,

    /// Nucleus-sampling threshold.
    #[validate(range(min = 0.0, max = 1.0))]
    pub top_p: f64,

    /// Sequences that stop generation.
    #[serde(default)]
    pub stop_sequences: Vec<String>,
}

impl Default for TextGenerationConfig {
    fn default() -> Self {
        Self {
            max_token_count: defaults::MAX_TOKEN_COUNT,
            temperature: defaults::TEMPERATURE,
            top_p: defaults::TOP_P,
            stop_sequences: Vec::new(),
        }
    }
}

impl TextGenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_max_token_count(mut self, max_token_count: u32) -> Self {
        self.max_token_count = max_token_count;
        self
    }

    pub const fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub const fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_stop_sequence(mut self, sequence: impl Into<String>) -> Self {
        self.stop_sequences.push(sequence.into());
        self
    }

    pub fn with_stop_sequences<I, S>(mut self, sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_sequences = sequences.into_iter().map(Into::into).collect();
        self
    }

    /// Check every field against the ranges Titan accepts.
    pub fn validate_params(&self) -> Result<(), ChatError> {
        // Range checks compare with `<`/`>`, which NaN always passes.
        for (name, value) in [("temperature", self.temperature), ("topP", self.top_p)] {
            if !value.is_finite() {
                return Err(ChatError::InvalidParameter(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }
        self.validate()?;
        Ok(())
    }
}
