//! Helpers for classifying and presenting errors.

use super::types::{ChatError, ErrorCategory};

impl ChatError {
    /// Build an [`ChatError::ApiError`] without details.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NetworkError(_) => ErrorCategory::Network,
            Self::AuthorizationError(_) => ErrorCategory::Authorization,
            Self::MalformedResponseError(_) => ErrorCategory::Response,
            Self::ApiError { .. } => ErrorCategory::Api,
            Self::InvalidParameter(_) | Self::ConfigurationError(_) => {
                ErrorCategory::Configuration
            }
            Self::ServerError(_) => ErrorCategory::Server,
        }
    }

    /// HTTP status reported by the endpoint, if the failure carried one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Short, user-safe description that never includes response bodies.
    pub fn user_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => "Could not reach the model endpoint.".to_string(),
            ErrorCategory::Authorization => {
                "Not authorized to invoke the model. Check the Bedrock API key.".to_string()
            }
            ErrorCategory::Response => "The model returned an unexpected response.".to_string(),
            ErrorCategory::Api => match self.status_code() {
                Some(code) => format!("The model endpoint returned an error (HTTP {code})."),
                None => "The model endpoint returned an error.".to_string(),
            },
            ErrorCategory::Configuration => format!("Invalid configuration: {self}"),
            ErrorCategory::Server => "The server failed.".to_string(),
        }
    }
}
