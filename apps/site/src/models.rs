//! Display records for the CV. Constructed once at startup from
//! `content::profile()` and never mutated: there is no identity, no
//! lifecycle, and no persistence behind these types.
//!
//! Fields documented as "translation key" hold a dot-separated key
//! (e.g. `personal.title`) resolved through `i18n::Catalog` at render time.
//! Everything else is displayed verbatim.

use serde::{Deserialize, Serialize};

/// Name, headline, and contact details shown in the hero and contact
/// sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    /// Translation key.
    pub title: String,
    /// Translation key.
    pub summary: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl PersonalInfo {
    /// Uppercase initials shown in the header and footer monograms
    /// ("Samuel Arnaud" → "SA").
    pub fn monogram(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// One position on the experience timeline. `technologies` keeps its
/// insertion order; the rendering contract is "no implicit re-sorting".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    /// Free-text date range, e.g. `"2021-2025"`.
    pub period: String,
    pub company: String,
    /// Translation key.
    pub role: String,
    pub location: String,
    /// Translation key.
    pub projects: String,
    /// Translation key.
    pub role_description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub period: String,
    /// Translation key.
    pub degree: String,
    pub school: String,
}

/// Three named skill lists, rendered as separate cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub technical: Vec<String>,
    pub methodologies: Vec<String>,
    pub tools: Vec<String>,
}

/// A spoken language and its proficiency level. Both fields are
/// translation keys ("Français" itself differs per locale).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub name: String,
    pub level: String,
}

/// The whole CV: one record to share behind an `Arc` in `AppState`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub personal: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Skills,
    pub languages: Vec<LanguageSkill>,
}

impl Profile {
    /// Every translation key referenced by this profile, in rendering
    /// order. The startup drift check and the catalog-coverage test walk
    /// this list.
    pub fn referenced_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.personal.title.as_str(), self.personal.summary.as_str()];
        for exp in &self.experiences {
            keys.push(exp.role.as_str());
            keys.push(exp.projects.as_str());
            keys.push(exp.role_description.as_str());
        }
        for edu in &self.education {
            keys.push(edu.degree.as_str());
        }
        for lang in &self.languages {
            keys.push(lang.name.as_str());
            keys.push(lang.level.as_str());
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_personal(name: &str) -> PersonalInfo {
        PersonalInfo {
            name: name.to_string(),
            title: "personal.title".to_string(),
            summary: "personal.summary".to_string(),
            address: "Lille, France".to_string(),
            phone: "+33 6 00 00 00 00".to_string(),
            email: "someone@example.com".to_string(),
        }
    }

    #[test]
    fn test_monogram_takes_first_letter_of_each_word() {
        assert_eq!(make_personal("Samuel Arnaud").monogram(), "SA");
    }

    #[test]
    fn test_monogram_uppercases_lowercase_names() {
        assert_eq!(make_personal("ada lovelace").monogram(), "AL");
    }

    #[test]
    fn test_monogram_handles_extra_whitespace() {
        assert_eq!(make_personal("  Jean  Claude ").monogram(), "JC");
    }
}
