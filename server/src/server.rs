//! HTTP server for quandaryd

use crate::routes;
use anyhow::Result;
use axum::Router;
use quandary_application::GenerateQuestionUseCase;
use quandary_domain::GenerationMode;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub use_case: GenerateQuestionUseCase,
    pub mode: GenerationMode,
}

impl AppState {
    pub fn new(use_case: GenerateQuestionUseCase, mode: GenerationMode) -> Self {
        Self { use_case, mode }
    }
}

/// Assemble the router for the given state
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::question_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
pub async fn run(state: AppState, bind: &str) -> Result<()> {
    let app = app(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Listening on http://{}", bind);

    axum::serve(listener, app).await?;
    Ok(())
}
