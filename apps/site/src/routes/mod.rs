pub mod api;
pub mod assets;
pub mod health;
pub mod pages;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::state::AppState;

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::handle_index))
        .route("/health", get(health::health_handler))
        // JSON views
        .route("/api/v1/profile", get(api::handle_profile))
        .route("/api/v1/locales", get(api::handle_locales))
        // Compiled-in static assets
        .route("/assets/site.css", get(assets::handle_css))
        .route("/assets/site.js", get(assets::handle_js))
        .route("/assets/i18n/:file", get(assets::handle_locale_table))
        .fallback(handle_not_found)
        .with_state(state)
}
