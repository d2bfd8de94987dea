//! # Task List
//!
//! A minimal task-list manager: a single collection of todos persisted to a
//! flat JSON file, exposed over a small JSON HTTP API and a browser page.
//!
//! ## Core Concepts
//!
//! - **Todos**: records with an id, trimmed text, a completion flag and a
//!   creation timestamp
//! - **Store**: owns the collection and rewrites the backing file after
//!   every mutation
//! - **Server**: maps HTTP requests onto store operations and status codes
//!
//! ## Example
//!
//! ```ignore
//! use tasklist::TodoStore;
//!
//! let mut store = TodoStore::open("./todos.json")?;
//!
//! let todo = store.create("  Buy milk  ")?;
//! assert_eq!(todo.text, "Buy milk");
//!
//! store.toggle(todo.id)?;
//! store.edit(todo.id, "Buy oat milk")?;
//! store.delete(todo.id)?;
//! ```

pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;

// Re-exports
pub use config::ServerConfig;
pub use error::{Result, TodoError};
pub use server::{create_router, run, ApiError, AppState};
pub use store::TodoStore;
pub use types::*;
