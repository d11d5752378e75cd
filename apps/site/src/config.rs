use anyhow::{Context, Result};

use crate::i18n::Locale;

/// Application configuration loaded from environment variables.
/// Every variable has a default: the site must come up with a bare binary
/// and no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Locale served when neither the URL nor the Accept-Language header
    /// selects one. An unsupported value here is a startup error, not a
    /// silent fallback.
    pub default_locale: Locale,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_locale: match std::env::var("DEFAULT_LOCALE") {
                Ok(value) => Locale::parse(&value).with_context(|| {
                    format!("DEFAULT_LOCALE '{value}' is not a supported locale")
                })?,
                Err(_) => Locale::default(),
            },
        })
    }
}
