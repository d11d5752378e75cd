mod assets;
mod config;
mod content;
mod errors;
mod i18n;
mod models;
mod render;
mod routes;
mod state;
mod theme;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::i18n::Catalog;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV site v{}", env!("CARGO_PKG_VERSION"));

    // Build the immutable CV data and translation catalog once; every
    // request renders from these shared copies.
    let profile = content::profile();
    let catalog = Catalog::load()?;

    // Surface content/table drift at startup instead of as raw keys on a page.
    for key in profile.referenced_keys() {
        if !catalog.contains(i18n::Locale::FALLBACK, key) {
            warn!("Content key '{key}' has no fallback text and will render verbatim");
        }
    }

    info!(
        "Loaded profile for {} ({} positions, {} locales)",
        profile.personal.name,
        profile.experiences.len(),
        i18n::SUPPORTED.len()
    );
    info!("Default locale: {}", config.default_locale.as_str());

    let state = AppState {
        profile: Arc::new(profile),
        catalog: Arc::new(catalog),
        config: config.clone(),
        started_at: Instant::now(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
