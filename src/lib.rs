//! bedrock-chat
//!
//! A single-page web form wired to Amazon Bedrock's Titan text models.
//!
//! The crate is split into a small client library and a binary:
//! - [`client::BedrockClient`] turns a prompt into a Titan `InvokeModel` request and
//!   extracts the first generated candidate from the response.
//! - [`traits::RequestResponder`] is the seam the web form depends on, so any
//!   responder (including a mock) can be plugged in.
//! - [`server`] serves the HTML form and a small JSON predict API with axum.
//! - [`telemetry`] installs a `tracing` subscriber.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bedrock_chat::prelude::*;
//!
//! let config = BedrockConfig::new().with_api_key("my-bedrock-api-key");
//! let client = BedrockClient::new(config)?;
//! let text = client.respond("Write a haiku about Rust").await?;
//! ```
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod defaults;
pub mod error;
pub mod http;
pub mod server;
pub mod standards;
pub mod telemetry;
pub mod traits;
pub mod types;

pub use error::ChatError;

/// Commonly used items.
pub mod prelude {
    pub use crate::client::BedrockClient;
    pub use crate::config::BedrockConfig;
    pub use crate::error::{ChatError, ErrorCategory};
    pub use crate::server::{ChatServer, ServerConfig};
    pub use crate::traits::RequestResponder;
    pub use crate::types::{HttpConfig, TextGenerationConfig, TitanRequest, TitanResponse};
}
