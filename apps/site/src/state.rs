use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::i18n::Catalog;
use crate::models::Profile;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything in here is immutable after startup. The CV and the translation
/// catalog are built once in `main` and shared behind `Arc`s, so a clone per
/// request is two pointer bumps.
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<Profile>,
    pub catalog: Arc<Catalog>,
    pub config: Config,
    /// Process start, reported as uptime by the health endpoint.
    pub started_at: Instant,
}
