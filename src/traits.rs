//! Capability traits.

use crate::error::ChatError;
use async_trait::async_trait;

/// Turns a prompt into generated text.
///
/// The web form holds an `Arc<dyn RequestResponder>`; implementations must be
/// stateless across calls so concurrent requests stay independent.
#[async_trait]
pub trait RequestResponder: Send + Sync {
    async fn respond(&self, prompt: &str) -> Result<String, ChatError>;
}
