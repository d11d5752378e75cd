use axum::extract::{Query, State};
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::HeaderMap;
use axum::response::Html;
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use crate::i18n;
use crate::render;
use crate::state::AppState;
use crate::theme::Theme;

/// Query parameters of `GET /`. Both are optional and both degrade instead
/// of erroring: an unknown `lang` falls through to header negotiation, an
/// unknown `theme` means light.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub lang: Option<String>,
    pub theme: Option<String>,
}

/// GET /
/// Renders the whole CV for the negotiated locale and requested theme.
pub async fn handle_index(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
    headers: HeaderMap,
) -> Html<String> {
    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let locale = i18n::negotiate(
        params.lang.as_deref(),
        accept_language,
        state.config.default_locale,
    );
    let theme = params
        .theme
        .as_deref()
        .map(Theme::parse_or_default)
        .unwrap_or_default();

    debug!("Rendering page: locale={} theme={}", locale.as_str(), theme.as_str());

    let today = Utc::now().date_naive();
    Html(render::page(
        &state.profile,
        &state.catalog,
        locale,
        theme,
        today,
    ))
}
