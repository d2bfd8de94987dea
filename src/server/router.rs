//! Route configuration.

use axum::routing::{get, put};
use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::{handlers, state::AppState};
use crate::config::ServerConfig;

/// Create the router: API routes under the configured prefix, everything
/// else served from the public directory.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let todos = config.todos_path();

    Router::new()
        .route(&todos, get(handlers::list_todos).post(handlers::create_todo))
        .route(
            &format!("{}/{{id}}", todos),
            put(handlers::toggle_todo).delete(handlers::delete_todo),
        )
        .route(&format!("{}/{{id}}/edit", todos), put(handlers::edit_todo))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
