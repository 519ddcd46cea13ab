use axum::ServiceExt;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

mod blog;
mod config;
mod error;
mod html;
mod markdown;
mod routes;
mod state;
mod store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = config::Config::from_env()?;

    let posts: Arc<dyn store::PostStore> = match &config.store {
        config::StoreConfig::File(path) => {
            tracing::info!(?path, "using file post store");
            Arc::new(store::FileStore::open(path).await?)
        }
        config::StoreConfig::Memory => {
            tracing::warn!("using in-memory post store, posts are lost on exit");
            Arc::new(store::MemoryStore::new())
        }
    };
    let state = Arc::new(state::State::new(posts));

    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");

    axum::serve(
        listener,
        ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "couldn't listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
