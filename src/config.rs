//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 3000));

/// Default prefix for the JSON API routes.
pub const DEFAULT_API_PREFIX: &str = "/api";

/// Runtime configuration for the server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind: SocketAddr,

    /// JSON file holding the todo collection.
    pub data_file: PathBuf,

    /// Directory with the browser page, served for every non-API path.
    pub public_dir: PathBuf,

    /// Path prefix for the API, e.g. `/api` gives `/api/todos`.
    pub api_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            data_file: PathBuf::from("todos.json"),
            public_dir: PathBuf::from("public"),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
        }
    }
}

impl ServerConfig {
    /// Set the API prefix, normalizing it to `/segment` form.
    pub fn with_api_prefix(mut self, prefix: &str) -> Self {
        self.api_prefix = normalize_prefix(prefix);
        self
    }

    /// Path of the todo collection route, e.g. `/api/todos`.
    pub fn todos_path(&self) -> String {
        format!("{}/todos", self.api_prefix)
    }
}

/// Leading slash, no trailing slash. The root prefix becomes an empty string.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.bind.to_string(), "127.0.0.1:3000");
        assert_eq!(config.todos_path(), "/api/todos");
    }

    #[test]
    fn test_prefix_normalization() {
        let config = ServerConfig::default().with_api_prefix("v1/");
        assert_eq!(config.todos_path(), "/v1/todos");

        let config = ServerConfig::default().with_api_prefix("/");
        assert_eq!(config.todos_path(), "/todos");

        let config = ServerConfig::default().with_api_prefix("/api/v2");
        assert_eq!(config.todos_path(), "/api/v2/todos");
    }
}
