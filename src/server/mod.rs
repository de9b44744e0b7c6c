// server/mod.rs — Web-facing surface of the review service.
//
// Endpoints:
//   GET  /        fresh presentation context (empty form state)
//   POST /        form field `code` → one review round-trip
//   GET  /health  minimal probe call against the model endpoint
//
// Rendering is out of scope: handlers return the presentation context
// as JSON for whatever layer sits in front.

use axum::{extract::State, routing::get, Form, Json, Router};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::ai::provider::GroqProvider;
use crate::config::Config;
use crate::review::{self, HealthStatus, ReviewContext};

/// Read-only state shared across requests, built once at startup.
pub struct AppState {
    pub config: Config,
    pub provider: GroqProvider,
}

/// The single inbound form: one field, arbitrary text.
#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    #[serde(default)]
    pub code: String,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home).post(submit_review))
        .route("/health", get(health))
        .with_state(state)
}

async fn home() -> Json<ReviewContext> {
    Json(ReviewContext::empty())
}

async fn submit_review(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ReviewForm>,
) -> Json<ReviewContext> {
    Json(review::review(&form.code, &state.config, &state.provider).await)
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(review::health_check(&state.config, &state.provider).await)
}

pub async fn start_server(addr: SocketAddr, state: Arc<AppState>) -> anyhow::Result<()> {
    let router = build_router(state);

    info!("review service listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
