//! Server-side HTML rendering.
//!
//! # Contract
//! - A page render is a pure function of its arguments. Locale, theme, and
//!   the clock all arrive as parameters, so identical inputs always produce
//!   an identical document.
//! - Every dynamic string passes through `escape_html` on its way into the
//!   document, catalog values included.
//! - Display rules (period formatting, badge palette, experience counter)
//!   live here; `layout` owns the document shell and `sections` the four
//!   content sections.

pub mod layout;
pub mod sections;

pub use layout::page;

use chrono::{Datelike, NaiveDate};

// ────────────────────────────────────────────────────────────────────────────
// Display helpers
// ────────────────────────────────────────────────────────────────────────────

/// Year the professional career started. The anchor is January 1st, so the
/// experience counter ticks over exactly at new year.
const CAREER_START_YEAR: i32 = 2015;

/// Badge classes for technology chips, in palette order. The stylesheet
/// defines each class twice, once per theme.
const TECH_BADGE_CLASSES: [&str; 6] = [
    "tech-teal",
    "tech-blue",
    "tech-green",
    "tech-purple",
    "tech-yellow",
    "tech-red",
];

/// Full calendar years of professional experience as of `today`.
pub fn years_of_experience(today: NaiveDate) -> i32 {
    (today.year() - CAREER_START_YEAR).max(0)
}

/// Maps a technology name to a badge class. The mapping is a pure function
/// of the name, so the same technology gets the same color on every render,
/// while names of different lengths spread across the palette.
pub fn technology_color(tech: &str) -> &'static str {
    TECH_BADGE_CLASSES[tech.len() % TECH_BADGE_CLASSES.len()]
}

/// Widens the first hyphen of a period for display: `"2021-2025"` becomes
/// `"2021 - 2025"`. Only the first hyphen is touched, so values that carry
/// more hyphens keep the rest verbatim.
pub fn format_period(period: &str) -> String {
    period.replacen('-', " - ", 1)
}

/// Escapes the five HTML metacharacters. Used for text nodes and attribute
/// values alike.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
