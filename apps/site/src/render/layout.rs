//! Document shell: `<head>`, top bar, content sections, footer.
//!
//! The `dark` class on the `#app` container is the single switch between the
//! two themes; the stylesheet derives everything else from it. Language and
//! theme controls are plain links back into `GET /`, so the page works with
//! scripting disabled and `site.js` only removes the round-trip.

use chrono::{Datelike, NaiveDate};

use crate::i18n::{self, Catalog, Locale};
use crate::models::Profile;
use crate::render::{escape_html, sections};
use crate::theme::Theme;

/// Renders the complete document for one (locale, theme) combination.
pub fn page(
    profile: &Profile,
    catalog: &Catalog,
    locale: Locale,
    theme: Theme,
    today: NaiveDate,
) -> String {
    let container = match theme.css_class() {
        "" => "page".to_string(),
        class => format!("page {class}"),
    };

    format!(
        r#"<!doctype html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{name} · CV</title>
<link rel="stylesheet" href="/assets/site.css">
</head>
<body>
<div id="app" class="{container}">
{topbar}<main>
{hero}{experience}{skills}{contact}</main>
{footer}</div>
<script src="/assets/site.js" defer></script>
</body>
</html>
"#,
        lang = locale.as_str(),
        name = escape_html(&profile.personal.name),
        topbar = topbar(profile, catalog, locale, theme),
        hero = sections::hero(profile, catalog, locale, today),
        experience = sections::experience(profile, catalog, locale),
        skills = sections::skills(profile, catalog, locale),
        contact = sections::contact(profile, catalog, locale),
        footer = footer(profile, catalog, locale, today),
    )
}

/// Sticky header: brand, section nav, language switcher, theme toggle.
fn topbar(profile: &Profile, catalog: &Catalog, locale: Locale, theme: Theme) -> String {
    let t = |key: &str| escape_html(catalog.resolve(locale, key));

    let mut lang_links = String::new();
    for candidate in i18n::SUPPORTED {
        let active = if candidate == locale { " class=\"active\"" } else { "" };
        lang_links.push_str(&format!(
            "<a{active} href=\"/?lang={code}&amp;theme={theme}\" hreflang=\"{code}\" title=\"{label}\">{flag} {short}</a>\n",
            code = candidate.as_str(),
            theme = theme.as_str(),
            label = candidate.label(),
            flag = candidate.flag(),
            short = candidate.as_str().to_uppercase(),
        ));
    }

    // The toggle link swaps the theme server-side; site.js intercepts it and
    // flips the class locally instead.
    let toggle_target = theme.toggle();
    let toggle_icon = match theme {
        Theme::Light => "🌙",
        Theme::Dark => "☀️",
    };

    format!(
        r##"<header class="topbar">
<a class="brand" href="#about"><span class="monogram">{monogram}</span><span class="brand-name">{name}</span></a>
<nav class="nav">
<a href="#about">{nav_about}</a>
<a href="#experience">{nav_experience}</a>
<a href="#skills">{nav_skills}</a>
<a href="#contact">{nav_contact}</a>
</nav>
<div class="controls">
<div class="lang-switch">
{lang_links}</div>
<a class="theme-toggle" data-theme-toggle href="/?lang={lang}&amp;theme={toggle_target}">{toggle_icon}</a>
</div>
</header>
"##,
        monogram = escape_html(&profile.personal.monogram()),
        name = escape_html(&profile.personal.name),
        nav_about = t("nav.about"),
        nav_experience = t("nav.experience"),
        nav_skills = t("nav.skills"),
        nav_contact = t("nav.contact"),
        lang = locale.as_str(),
        toggle_target = toggle_target.as_str(),
    )
}

fn footer(profile: &Profile, catalog: &Catalog, locale: Locale, today: NaiveDate) -> String {
    let t = |key: &str| escape_html(catalog.resolve(locale, key));
    format!(
        "<footer class=\"footer\">\n<span class=\"monogram\">{monogram}</span>\n<span>© {year} {name}. {rights}.</span>\n</footer>\n",
        monogram = escape_html(&profile.personal.monogram()),
        year = today.year(),
        name = escape_html(&profile.personal.name),
        rights = t("footer.rights_reserved"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn make_page(locale: Locale, theme: Theme) -> String {
        let profile = content::profile();
        let catalog = Catalog::load().expect("embedded catalogs must load");
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid test date");
        page(&profile, &catalog, locale, theme, today)
    }

    #[test]
    fn test_english_light_page_has_english_headings_and_no_dark_class() {
        let html = make_page(Locale::En, Theme::Light);
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("Professional Experience"));
        assert!(
            html.contains("class=\"page\""),
            "light pages carry the bare container class"
        );
        assert!(!html.contains("page dark"));
    }

    #[test]
    fn test_french_dark_page_has_french_headings_and_dark_class() {
        let html = make_page(Locale::Fr, Theme::Dark);
        assert!(html.contains("<html lang=\"fr\">"));
        assert!(html.contains("Expérience professionnelle"));
        assert!(html.contains("class=\"page dark\""));
    }

    #[test]
    fn test_switching_locale_away_and_back_restores_the_exact_document() {
        let english = make_page(Locale::En, Theme::Light);
        let french = make_page(Locale::Fr, Theme::Light);
        assert_ne!(english, french);
        assert_eq!(
            english,
            make_page(Locale::En, Theme::Light),
            "a render must be a pure function of locale and theme"
        );
    }

    #[test]
    fn test_no_locale_leaves_raw_keys_in_the_page() {
        let profile = content::profile();
        for locale in i18n::SUPPORTED {
            let html = make_page(locale, Theme::Light);
            for key in profile.referenced_keys() {
                assert!(
                    !html.contains(key),
                    "page for {} shows the raw key '{key}'",
                    locale.as_str()
                );
            }
        }
    }

    #[test]
    fn test_experience_entries_keep_insertion_order() {
        let html = make_page(Locale::En, Theme::Light);
        let positions: Vec<usize> = ["OVHcloud", "Worldline", "Capgemini", "Norsys"]
            .iter()
            .map(|company| html.find(company).expect("every company must be rendered"))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "the timeline must not reorder entries");
    }

    #[test]
    fn test_topbar_links_every_section_anchor() {
        let html = make_page(Locale::En, Theme::Light);
        for anchor in ["#about", "#experience", "#skills", "#contact"] {
            assert!(
                html.contains(&format!("href=\"{anchor}\"")),
                "the nav must link {anchor}"
            );
        }
        assert!(html.contains("class=\"lang-switch\""), "the switcher must render");
        assert!(html.contains("data-theme-toggle"), "the theme toggle must render");
    }

    #[test]
    fn test_language_links_carry_the_active_theme() {
        let html = make_page(Locale::En, Theme::Dark);
        assert!(html.contains("href=\"/?lang=fr&amp;theme=dark\""));
        assert!(html.contains("href=\"/?lang=nl&amp;theme=dark\""));
    }

    #[test]
    fn test_active_language_link_is_marked() {
        let html = make_page(Locale::Fr, Theme::Light);
        assert!(html.contains("<a class=\"active\" href=\"/?lang=fr&amp;theme=light\""));
    }

    #[test]
    fn test_theme_toggle_links_to_the_opposite_theme() {
        let light = make_page(Locale::En, Theme::Light);
        assert!(light.contains("data-theme-toggle href=\"/?lang=en&amp;theme=dark\""));
        let dark = make_page(Locale::En, Theme::Dark);
        assert!(dark.contains("data-theme-toggle href=\"/?lang=en&amp;theme=light\""));
    }

    #[test]
    fn test_footer_shows_the_render_year_and_name() {
        let html = make_page(Locale::En, Theme::Light);
        assert!(html.contains("© 2026 Samuel Arnaud. All rights reserved."));
    }

    #[test]
    fn test_page_references_both_static_assets() {
        let html = make_page(Locale::En, Theme::Light);
        assert!(html.contains("href=\"/assets/site.css\""));
        assert!(html.contains("src=\"/assets/site.js\""));
    }
}
