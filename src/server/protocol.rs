//! Request and response bodies for the JSON API.

use serde::{Deserialize, Serialize};

/// Confirmation text returned by `DELETE /todos/{id}`.
pub const DELETED_MESSAGE: &str = "Todo deleted successfully";

/// Body of `POST /todos` and `PUT /todos/{id}/edit`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
