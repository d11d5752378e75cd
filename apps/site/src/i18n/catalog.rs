//! The translation catalog: one key→text table per locale, parsed at
//! startup from the embedded JSON files.
//!
//! # Resolution contract
//! `resolve(locale, key)` never fails:
//! 1. the active locale's table,
//! 2. the fallback (`en`) table,
//! 3. the key itself, verbatim.
//! A key missing everywhere shows up on the page as the raw dot path:
//! ugly but visible, never a crash and never an empty string.
//!
//! # Table format
//! The JSON files are nested objects of strings (`{"nav": {"about": ...}}`),
//! flattened here to the dot-separated keys (`nav.about`) that the content
//! records reference.

use std::collections::{BTreeSet, HashMap};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::warn;

use crate::assets;
use crate::i18n::{Locale, SUPPORTED};

/// The embedded JSON source for a locale, byte-for-byte as compiled in.
/// Also served verbatim at `/assets/i18n/{locale}.json`.
pub fn embedded_json(locale: Locale) -> &'static str {
    match locale {
        Locale::En => assets::LOCALE_EN,
        Locale::Fr => assets::LOCALE_FR,
        Locale::Nl => assets::LOCALE_NL,
    }
}

#[derive(Debug)]
pub struct Catalog {
    tables: HashMap<Locale, HashMap<String, String>>,
}

impl Catalog {
    /// Parses every embedded locale file. Malformed JSON is a startup
    /// error; key-set drift between locales is only a warning because the
    /// fallback chain covers the gaps.
    pub fn load() -> Result<Catalog> {
        let mut tables = HashMap::new();
        for locale in SUPPORTED {
            let table = parse_table(embedded_json(locale))
                .with_context(|| format!("invalid embedded table for locale '{}'", locale.as_str()))?;
            tables.insert(locale, table);
        }
        let catalog = Catalog { tables };
        catalog.warn_on_drift();
        Ok(catalog)
    }

    /// Resolves a translation key for a locale. See the module docs for
    /// the fallback chain. The returned text is never empty for a
    /// non-empty key.
    pub fn resolve<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        if let Some(text) = self.tables.get(&locale).and_then(|t| t.get(key)) {
            return text;
        }
        if locale != Locale::FALLBACK {
            if let Some(text) = self.tables.get(&Locale::FALLBACK).and_then(|t| t.get(key)) {
                return text;
            }
        }
        key
    }

    /// True if the locale's own table carries the key (fallback not
    /// consulted).
    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        self.tables
            .get(&locale)
            .is_some_and(|t| t.contains_key(key))
    }

    fn warn_on_drift(&self) {
        let union: BTreeSet<&String> = self.tables.values().flat_map(|t| t.keys()).collect();
        for key in union {
            for locale in SUPPORTED {
                if !self.contains(locale, key) {
                    warn!("Translation key '{key}' missing from the '{}' table", locale.as_str());
                }
            }
        }
    }
}

fn parse_table(raw: &str) -> Result<HashMap<String, String>> {
    let root: Value = serde_json::from_str(raw)?;
    let mut table = HashMap::new();
    flatten("", &root, &mut table);
    Ok(table)
}

/// Depth-first flattening of nested objects into dot keys. Only string
/// leaves are kept; anything else in a table is a mistake worth logging,
/// not a reason to refuse startup.
fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        other => {
            warn!("Ignoring non-string translation value at '{prefix}': {other}");
        }
    }
}
