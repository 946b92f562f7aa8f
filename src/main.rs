//! Creature Catalog server binary.
//!
//! Loads configuration from the environment, wires the PokeAPI gateway
//! (optionally behind the response cache) into the HTTP API and serves it.

use std::sync::Arc;

use creature_catalog::adapters::cache::CachingGateway;
use creature_catalog::adapters::http::{app_router, CatalogAppState};
use creature_catalog::adapters::pokeapi::{PokeApiConfig, PokeApiGateway};
use creature_catalog::config::AppConfig;
use creature_catalog::ports::CatalogGateway;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let pokeapi = PokeApiGateway::new(
        PokeApiConfig::new(&config.upstream.base_url)
            .with_timeout(config.upstream.timeout())
            .with_user_agent(&config.upstream.user_agent),
    )?;
    let gateway: Arc<dyn CatalogGateway> = if config.cache.enabled {
        Arc::new(
            CachingGateway::new(Arc::new(pokeapi), config.cache.ttls())
                .with_max_entries(config.cache.max_entries),
        )
    } else {
        Arc::new(pokeapi)
    };

    let state = CatalogAppState::new(
        gateway,
        config.catalog.default_page_size,
        config.catalog.max_page_size,
    );
    let app = app_router(state, &config.server)?;

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        upstream = %config.upstream.base_url,
        cache = config.cache.enabled,
        "Creature catalog listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.json_logs() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
