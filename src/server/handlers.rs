//! Endpoint handlers for the todo API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::error::ApiError;
use super::protocol::{MessageResponse, TextRequest, DELETED_MESSAGE};
use super::state::AppState;
use crate::error::TodoError;
use crate::types::{normalize_text, Todo, TodoId};

pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    let todos = state.store().list().to_vec();
    Json(todos)
}

pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<TextRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let text = request_text(body)?;
    let todo = state.store().create(&text)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(id)?;
    let todo = state.store().toggle(id)?;
    Ok(Json(todo))
}

pub async fn edit_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let text = request_text(body)?;
    let id = parse_id(id)?;
    let todo = state.store().edit(id, &text)?;
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(id)?;
    state.store().delete(id)?;
    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE.to_string(),
    }))
}

/// Pull the trimmed `text` out of a request body. Any unusable body counts
/// as missing text.
fn request_text(body: Result<Json<TextRequest>, JsonRejection>) -> Result<String, ApiError> {
    match body {
        Ok(Json(TextRequest { text: Some(text) })) => Ok(normalize_text(&text)?),
        Ok(Json(TextRequest { text: None })) => Err(TodoError::Validation.into()),
        Err(rejection) => {
            tracing::debug!(%rejection, "Rejected todo body");
            Err(TodoError::Validation.into())
        }
    }
}

fn parse_id(raw: String) -> Result<TodoId, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId(raw))
}
