//! Todo list endpoints
//!
//! The storage boundary is the whole list: GET returns the full document,
//! POST replaces it verbatim. Record shape is not validated here.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
}

/// GET /api/todos - Retrieve the full task list
///
/// A missing backing document reads as an empty array.
async fn retrieve_todos(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    let todos = state.document().retrieve().await.map_err(|e| {
        tracing::error!("retrieve-list failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to read todos".to_string(),
            }),
        )
    })?;

    Ok(Json(todos))
}

/// POST /api/todos - Replace the full task list
///
/// The body is written as-is; callers are trusted to send a task array.
async fn replace_todos(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SaveResponse>, (StatusCode, Json<ErrorResponse>)> {
    state.document().replace(&body).await.map_err(|e| {
        tracing::error!("replace-list failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to save todos".to_string(),
            }),
        )
    })?;

    Ok(Json(SaveResponse { success: true }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/todos", get(retrieve_todos).post(replace_todos))
}
