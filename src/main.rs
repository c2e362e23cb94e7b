mod config;
mod queries;
mod router;
mod sanitize;
mod server;
mod sqlite;
mod static_files;
mod templates;

use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::server::context::GlobalContext;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "logbook=debug".into()),
        )
        .init();

    let config = Config::load();

    let db_path = config.database_path();
    match sqlite::initialize_db(&db_path) {
        Ok(()) => info!(
            "Connected to database {} at {} on port {}",
            config.db_name, config.db_host, config.db_port
        ),
        // Keep serving; requests will fail at query time instead.
        Err(err) => error!("Failed to initialize database {}: {}", db_path, err),
    }

    let env = Arc::new(templates::load_env());
    let statics = Arc::new(static_files::load_static());
    let g_ctx = Arc::new(GlobalContext::new(env, statics, config));

    let host = g_ctx.config.app_host.clone();
    let port = g_ctx.config.app_port;
    let listener = TcpListener::bind((host.as_str(), port)).await?;
    info!("Server started at {} on port {}", host, port);

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let g_ctx = g_ctx.clone();

        tokio::task::spawn(async move {
            let service = service_fn(move |req| router::serve(req.into(), g_ctx.clone()));
            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                error!("Error serving connection: {}", err);
            }
        });
    }
}
