//! Web form server.
//!
//! Serves one page with a text input and a text output, bound to a
//! [`RequestResponder`], plus a JSON predict endpoint:
//!
//! - `GET /` renders the empty form
//! - `POST /` (urlencoded `prompt`) renders the form with the generated text
//! - `POST /api/predict` accepts `{"data": [prompt]}` and returns `{"data": [text]}`

mod page;
mod routes;

pub use page::{Output, escape_html, render_page};
pub use routes::{PredictError, PredictRequest, PredictResponse, router};

use crate::defaults::server as defaults;
use crate::error::ChatError;
use crate::traits::RequestResponder;
use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Options for the web form server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address. `0.0.0.0` exposes the form on every interface.
    pub host: IpAddr,
    pub port: u16,
    pub title: String,
    pub description: String,
    /// Whether to replace error details with a generic message.
    ///
    /// When `false`, the error's user message is shown instead; provider
    /// bodies are never shown either way.
    /// Default: `true`
    pub mask_errors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST,
            port: defaults::PORT,
            title: defaults::TITLE.to_string(),
            description: defaults::DESCRIPTION.to_string(),
            mask_errors: true,
        }
    }
}

impl ServerConfig {
    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_mask_errors(mut self, mask_errors: bool) -> Self {
        self.mask_errors = mask_errors;
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

pub struct ChatServer {
    config: ServerConfig,
    responder: Arc<dyn RequestResponder>,
}

impl ChatServer {
    pub fn new(config: ServerConfig, responder: Arc<dyn RequestResponder>) -> Self {
        Self { config, responder }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn router(&self) -> axum::Router {
        router(self.responder.clone(), &self.config)
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn serve(self) -> Result<(), ChatError> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ChatError::ServerError(format!("failed to bind {addr}: {e}")))?;
        self.serve_with_shutdown(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `signal` resolves.
    pub async fn serve_with_shutdown<F>(self, listener: TcpListener, signal: F) -> Result<(), ChatError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(%addr, title = %self.config.title, "web form listening");
        axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .await?;
        tracing::info!("web form stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(err = %e, "failed to listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_public_on_7860() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:7860");
        assert_eq!(cfg.title, "Bedrock Chatbot");
        assert!(cfg.mask_errors);
    }
}
