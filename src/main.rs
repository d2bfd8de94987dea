//! Binary entry point: parse flags, set up logging, serve the todo API.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tasklist::config::{DEFAULT_API_PREFIX, DEFAULT_BIND};
use tasklist::ServerConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Task list server with a JSON API and a browser page.
#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on.
    #[arg(short, long, env = "TASKLIST_BIND", default_value_t = DEFAULT_BIND)]
    bind: SocketAddr,

    /// JSON file holding the todos.
    #[arg(short, long, env = "TASKLIST_DATA_FILE", default_value = "todos.json")]
    data_file: PathBuf,

    /// Directory served for the browser page.
    #[arg(short, long, env = "TASKLIST_PUBLIC_DIR", default_value = "public")]
    public_dir: PathBuf,

    /// Path prefix for the JSON API.
    #[arg(long, env = "TASKLIST_API_PREFIX", default_value = DEFAULT_API_PREFIX)]
    api_prefix: String,
}

impl Cli {
    fn into_config(self) -> ServerConfig {
        ServerConfig {
            bind: self.bind,
            data_file: self.data_file,
            public_dir: self.public_dir,
            ..ServerConfig::default()
        }
        .with_api_prefix(&self.api_prefix)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tasklist=info,tower_http=info")),
        )
        .with(fmt::layer())
        .init();

    let config = Cli::parse().into_config();
    tracing::info!(data_file = %config.data_file.display(), "Starting task list server");

    tasklist::run(config).await
}
