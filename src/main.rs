mod cache;
mod chart;
mod config;
mod db;
mod document;
mod entities;
mod error;
mod extract;
mod imdb;
mod models;
mod processor;
mod routes;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{cache::CacheManager, config::Config, imdb::ImdbClient};

pub struct AppState {
    pub config: Arc<Config>,
    pub imdb: ImdbClient,
    pub cache: CacheManager,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,moviescrape=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let imdb = ImdbClient::new(
        config.imdb_base_url.clone(),
        config.imdb_rps,
        config.max_concurrent,
        config.http_timeout,
    )?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let cache = CacheManager::new(db, config.cache_ttl_days);

    let state = Arc::new(AppState { config: config.clone(), imdb, cache });

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, base_url = %state.config.imdb_base_url, "listening");
    axum::serve(listener, app(state)).await?;

    Ok(())
}

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/movies/{id}", get(routes::movie))
        .route("/charts/{listing}", get(routes::chart))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
