use thiserror::Error;

/// Errors produced while generating a response or running the web form.
#[derive(Error, Debug)]
pub enum ChatError {
    /// The remote call could not complete (connect, timeout, body read).
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The caller is not allowed to invoke the model.
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// The response body is not valid JSON or has no result candidate.
    #[error("Malformed response: {0}")]
    MalformedResponseError(String),

    /// The endpoint answered with a non-success status that is not an authorization failure.
    #[error("API error {code}: {message}")]
    ApiError {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// A configuration value is out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The client or subscriber could not be set up.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The web form server failed to bind or serve.
    #[error("Server error: {0}")]
    ServerError(String),
}

/// Coarse grouping of [`ChatError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Authorization,
    Response,
    Api,
    Configuration,
    Server,
}
