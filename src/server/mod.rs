//! HTTP layer: JSON API over the todo store plus the static browser page.
//!
//! | Method & Path              | Store call | Success       |
//! |----------------------------|------------|---------------|
//! | `GET /api/todos`           | `list`     | 200 + array   |
//! | `POST /api/todos`          | `create`   | 201 + record  |
//! | `PUT /api/todos/{id}`      | `toggle`   | 200 + record  |
//! | `PUT /api/todos/{id}/edit` | `edit`     | 200 + record  |
//! | `DELETE /api/todos/{id}`   | `delete`   | 200 + message |

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;

use crate::config::ServerConfig;
use crate::store::TodoStore;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Open the store and serve until Ctrl+C.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let store = TodoStore::open(&config.data_file)?;
    let app = create_router(AppState::new(store), &config);

    let listener = TcpListener::bind(config.bind).await?;
    info!(
        "Listening on http://{} (api at {})",
        listener.local_addr()?,
        config.todos_path()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutting down gracefully...");
}
