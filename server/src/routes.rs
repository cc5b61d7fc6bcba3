//! API routes for quandaryd
//!
//! One inbound surface: `POST /v1/question`. Any other method on the
//! route is rejected with 405 by the router before any body processing.

use crate::server::AppState;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};
use quandary_application::GenerateQuestionInput;
use quandary_domain::{Category, QuestionPair};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

/// Request body for question generation.
///
/// Every field is optional and the body itself may be missing or
/// malformed — anything unparsable degrades to the default category
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
struct QuestionRequest {
    category: Option<String>,
}

/// Error body returned on generation or configuration failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    message: String,
    details: String,
}

pub fn question_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/question", post(generate_question))
}

async fn generate_question(
    State(state): State<AppStateArc>,
    body: String,
) -> Result<Json<QuestionPair>, (StatusCode, Json<ErrorResponse>)> {
    // Malformed JSON is tolerated and treated as an empty request
    let request: QuestionRequest = serde_json::from_str(&body).unwrap_or_default();
    let category = Category::from_optional(request.category);

    info!("Generating question for category: {}", category);

    let input = GenerateQuestionInput::new(category, state.mode);
    match state.use_case.execute(input).await {
        Ok(pair) => Ok(Json(pair)),
        Err(e) if e.is_configuration() => {
            error!("Generation is not configured: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Server configuration error".to_string(),
                    details: e.to_string(),
                }),
            ))
        }
        Err(e) => {
            error!("Generation failed: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    message: "Failed to generate question".to_string(),
                    details: e.to_string(),
                }),
            ))
        }
    }
}
