//! Compile-time embedded static assets: the stylesheet, the
//! progressive-enhancement script, and one translation table per locale.
//! Everything the site serves besides generated HTML and JSON lives here.

/// Stylesheet for the whole site (light and dark palettes).
pub const SITE_CSS: &str = include_str!("../assets/site.css");

/// Client script: in-place theme toggle and nav highlighting. The site is
/// fully usable without it.
pub const SITE_JS: &str = include_str!("../assets/site.js");

pub const LOCALE_EN: &str = include_str!("../assets/i18n/en.json");
pub const LOCALE_FR: &str = include_str!("../assets/i18n/fr.json");
pub const LOCALE_NL: &str = include_str!("../assets/i18n/nl.json");
