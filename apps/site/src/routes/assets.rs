//! Static asset handlers. Everything is compiled into the binary with
//! `include_str!`, so there is no runtime filesystem access to fail.

use axum::extract::Path;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::assets;
use crate::errors::AppError;
use crate::i18n::{catalog, Locale};

/// GET /assets/site.css
pub async fn handle_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        assets::SITE_CSS,
    )
}

/// GET /assets/site.js
pub async fn handle_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        assets::SITE_JS,
    )
}

/// GET /assets/i18n/:file
/// Serves a raw translation table, e.g. `/assets/i18n/en.json`. Unknown
/// locales are a hard 404 here: the silent-fallback rule applies to page
/// rendering, not to asset lookup.
pub async fn handle_locale_table(Path(file): Path<String>) -> Result<Response, AppError> {
    let code = file.strip_suffix(".json").unwrap_or(&file);
    let Some(locale) = Locale::parse(code) else {
        return Err(AppError::NotFound(format!(
            "No translation table for '{file}'"
        )));
    };
    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        catalog::embedded_json(locale),
    )
        .into_response())
}
