//! Locale support: the closed set of site languages, request-time locale
//! negotiation, and the translation catalog (`catalog::Catalog`).
//!
//! Two distinct constants matter and are deliberately different:
//! - the *default* locale (`Locale::default()`, French) is served when
//!   negotiation finds nothing usable;
//! - the *fallback* locale (`Locale::FALLBACK`, English) is the table
//!   consulted for keys missing from the active locale.

pub mod catalog;

pub use catalog::Catalog;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Fr,
    Nl,
}

/// Supported locales in switcher display order.
pub const SUPPORTED: [Locale; 3] = [Locale::En, Locale::Fr, Locale::Nl];

impl Locale {
    /// Table consulted for keys missing from the active locale.
    pub const FALLBACK: Locale = Locale::En;

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Nl => "nl",
        }
    }

    /// Native-language label shown in the switcher.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
            Locale::Nl => "Nederlands",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Locale::En => "🇺🇸",
            Locale::Fr => "🇫🇷",
            Locale::Nl => "🇳🇱",
        }
    }

    /// Parses a locale code, case-insensitively. Unsupported codes return
    /// `None`; callers fall back, they never error.
    pub fn parse(code: &str) -> Option<Locale> {
        SUPPORTED
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(code.trim()))
    }
}

/// Picks the locale for a request.
///
/// Precedence: a valid explicit `lang` query value, then the
/// `Accept-Language` header, then the configured default. An *invalid*
/// explicit value is ignored rather than rejected: unsupported codes fall
/// through silently all the way to the default.
pub fn negotiate(explicit: Option<&str>, accept_language: Option<&str>, default: Locale) -> Locale {
    if let Some(locale) = explicit.and_then(Locale::parse) {
        return locale;
    }
    accept_language.and_then(negotiate_header).unwrap_or(default)
}

/// Finds the best supported locale in an `Accept-Language` value:
/// primary subtags only (`fr-BE` counts as `fr`), highest quality first,
/// header order breaking ties.
fn negotiate_header(header: &str) -> Option<Locale> {
    let mut candidates: Vec<(f32, usize, Locale)> = Vec::new();
    for (position, item) in header.split(',').enumerate() {
        let mut parts = item.split(';');
        let tag = parts.next().unwrap_or("").trim();
        let primary = tag.split('-').next().unwrap_or("");
        let Some(locale) = Locale::parse(primary) else {
            continue;
        };
        let quality = parts
            .find_map(|p| p.trim().strip_prefix("q="))
            .and_then(|q| q.parse::<f32>().ok())
            .unwrap_or(1.0);
        if quality > 0.0 {
            candidates.push((quality, position, locale));
        }
    }
    candidates
        .into_iter()
        .max_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.1.cmp(&a.1))
        })
        .map(|(_, _, locale)| locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_codes() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("fr"), Some(Locale::Fr));
        assert_eq!(Locale::parse("nl"), Some(Locale::Nl));
        assert_eq!(Locale::parse("FR"), Some(Locale::Fr));
        assert_eq!(Locale::parse(" nl "), Some(Locale::Nl));
    }

    #[test]
    fn test_parse_rejects_unsupported_codes() {
        assert_eq!(Locale::parse("de"), None);
        assert_eq!(Locale::parse("es"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_default_locale_is_french() {
        assert_eq!(Locale::default(), Locale::Fr);
    }

    #[test]
    fn test_fallback_locale_is_english() {
        assert_eq!(Locale::FALLBACK, Locale::En);
    }

    fn negotiate_fr(explicit: Option<&str>, accept_language: Option<&str>) -> Locale {
        negotiate(explicit, accept_language, Locale::Fr)
    }

    #[test]
    fn test_explicit_param_wins_over_header() {
        assert_eq!(negotiate_fr(Some("nl"), Some("en")), Locale::Nl);
    }

    #[test]
    fn test_invalid_explicit_param_defers_to_header() {
        assert_eq!(negotiate_fr(Some("de"), Some("en")), Locale::En);
    }

    #[test]
    fn test_unsupported_code_without_header_lands_on_default() {
        assert_eq!(negotiate_fr(Some("de"), None), Locale::Fr);
    }

    #[test]
    fn test_nothing_to_negotiate_lands_on_default() {
        assert_eq!(negotiate_fr(None, None), Locale::Fr);
    }

    #[test]
    fn test_configured_default_is_honored() {
        assert_eq!(negotiate(None, None, Locale::Nl), Locale::Nl);
    }

    #[test]
    fn test_header_primary_subtag_matches() {
        assert_eq!(negotiate_fr(None, Some("fr-BE,de;q=0.8")), Locale::Fr);
        assert_eq!(negotiate_fr(None, Some("nl-NL")), Locale::Nl);
    }

    #[test]
    fn test_header_quality_order_beats_position() {
        assert_eq!(negotiate_fr(None, Some("en;q=0.4,nl;q=0.9")), Locale::Nl);
    }

    #[test]
    fn test_header_position_breaks_quality_ties() {
        assert_eq!(negotiate_fr(None, Some("nl,en")), Locale::Nl);
    }

    #[test]
    fn test_header_with_only_unsupported_languages_falls_back() {
        assert_eq!(negotiate_fr(None, Some("de-DE,de;q=0.9,es;q=0.8")), Locale::Fr);
    }

    #[test]
    fn test_header_zero_quality_is_ignored() {
        assert_eq!(negotiate_fr(None, Some("en;q=0,nl;q=0.5")), Locale::Nl);
    }

    #[test]
    fn test_labels_and_flags_exist_for_all_locales() {
        for locale in SUPPORTED {
            assert!(!locale.label().is_empty());
            assert!(!locale.flag().is_empty());
        }
    }
}
