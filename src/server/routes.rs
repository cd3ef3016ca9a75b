//! Axum routes for the web form.

use super::ServerConfig;
use super::page::{Output, render_page};
use crate::defaults::server::GENERIC_ERROR;
use crate::error::ChatError;
use crate::traits::RequestResponder;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone)]
struct AppState {
    responder: Arc<dyn RequestResponder>,
    page: Arc<PageOptions>,
}

struct PageOptions {
    title: String,
    description: String,
    mask_errors: bool,
}

impl AppState {
    fn render(&self, prompt: &str, output: Output<'_>) -> String {
        render_page(&self.page.title, &self.page.description, prompt, output)
    }

    fn error_message(&self, error: &ChatError) -> String {
        if self.page.mask_errors {
            GENERIC_ERROR.to_string()
        } else {
            error.user_message()
        }
    }
}

#[derive(Debug, Deserialize)]
struct PromptForm {
    #[serde(default)]
    prompt: String,
}

/// Body of `POST /api/predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub data: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub data: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictError {
    pub error: String,
}

/// Build the router for a responder.
pub fn router(responder: Arc<dyn RequestResponder>, config: &ServerConfig) -> Router {
    let state = AppState {
        responder,
        page: Arc::new(PageOptions {
            title: config.title.clone(),
            description: config.description.clone(),
            mask_errors: config.mask_errors,
        }),
    };
    Router::new()
        .route("/", get(index).post(submit))
        .route("/api/predict", post(predict))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.render("", Output::Empty))
}

async fn submit(State(state): State<AppState>, Form(form): Form<PromptForm>) -> Response {
    match state.responder.respond(&form.prompt).await {
        Ok(text) => Html(state.render(&form.prompt, Output::Text(&text))).into_response(),
        Err(e) => {
            tracing::error!(err = %e, "failed to generate response");
            let message = state.error_message(&e);
            (
                StatusCode::BAD_GATEWAY,
                Html(state.render(&form.prompt, Output::Error(&message))),
            )
                .into_response()
        }
    }
}

async fn predict(State(state): State<AppState>, Json(req): Json<PredictRequest>) -> Response {
    let Some(prompt) = req.data.first() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(PredictError {
                error: "expected {\"data\": [prompt]}".to_string(),
            }),
        )
            .into_response();
    };

    match state.responder.respond(prompt).await {
        Ok(text) => Json(PredictResponse { data: vec![text] }).into_response(),
        Err(e) => {
            tracing::error!(err = %e, "failed to generate response");
            (
                StatusCode::BAD_GATEWAY,
                Json(PredictError {
                    error: state.error_message(&e),
                }),
            )
                .into_response()
        }
    }
}
