//! JSON views of the CV. The same negotiation rules as the HTML page apply,
//! so a client can fetch exactly what a given page render would show.

use axum::extract::{Query, State};
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::HeaderMap;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::{self, Catalog, Locale, SUPPORTED};
use crate::models::{Profile, Skills};
use crate::render::{format_period, years_of_experience};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub lang: Option<String>,
}

/// The CV with every translation key already resolved for one locale,
/// experience periods widened for display (education periods stay
/// verbatim, as rendered), and the experience counter included. A client
/// gets exactly the strings a page render would show.
#[derive(Debug, Serialize)]
pub struct LocalizedProfile {
    pub locale: Locale,
    pub years_of_experience: i32,
    pub personal: LocalizedPersonal,
    pub experiences: Vec<LocalizedExperience>,
    pub education: Vec<LocalizedEducation>,
    pub skills: Skills,
    pub languages: Vec<LocalizedLanguage>,
}

#[derive(Debug, Serialize)]
pub struct LocalizedPersonal {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct LocalizedExperience {
    pub period: String,
    pub company: String,
    pub role: String,
    pub location: String,
    pub projects: String,
    pub role_description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LocalizedEducation {
    pub period: String,
    pub degree: String,
    pub school: String,
}

#[derive(Debug, Serialize)]
pub struct LocalizedLanguage {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Serialize)]
pub struct LocaleInfo {
    pub code: &'static str,
    pub label: &'static str,
    pub flag: &'static str,
    pub default: bool,
}

/// GET /api/v1/profile
pub async fn handle_profile(
    State(state): State<AppState>,
    Query(params): Query<ProfileQuery>,
    headers: HeaderMap,
) -> Json<LocalizedProfile> {
    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let locale = i18n::negotiate(
        params.lang.as_deref(),
        accept_language,
        state.config.default_locale,
    );
    let today = Utc::now().date_naive();
    Json(localize(&state.profile, &state.catalog, locale, today))
}

/// GET /api/v1/locales
pub async fn handle_locales(State(state): State<AppState>) -> Json<Vec<LocaleInfo>> {
    let locales = SUPPORTED
        .into_iter()
        .map(|locale| LocaleInfo {
            code: locale.as_str(),
            label: locale.label(),
            flag: locale.flag(),
            default: locale == state.config.default_locale,
        })
        .collect();
    Json(locales)
}

fn localize(
    profile: &Profile,
    catalog: &Catalog,
    locale: Locale,
    today: NaiveDate,
) -> LocalizedProfile {
    let t = |key: &str| catalog.resolve(locale, key).to_string();

    LocalizedProfile {
        locale,
        years_of_experience: years_of_experience(today),
        personal: LocalizedPersonal {
            name: profile.personal.name.clone(),
            title: t(&profile.personal.title),
            summary: t(&profile.personal.summary),
            address: profile.personal.address.clone(),
            phone: profile.personal.phone.clone(),
            email: profile.personal.email.clone(),
        },
        experiences: profile
            .experiences
            .iter()
            .map(|exp| LocalizedExperience {
                period: format_period(&exp.period),
                company: exp.company.clone(),
                role: t(&exp.role),
                location: exp.location.clone(),
                projects: t(&exp.projects),
                role_description: t(&exp.role_description),
                technologies: exp.technologies.clone(),
            })
            .collect(),
        education: profile
            .education
            .iter()
            .map(|edu| LocalizedEducation {
                period: edu.period.clone(),
                degree: t(&edu.degree),
                school: edu.school.clone(),
            })
            .collect(),
        skills: profile.skills.clone(),
        languages: profile
            .languages
            .iter()
            .map(|lang| LocalizedLanguage {
                name: t(&lang.name),
                level: t(&lang.level),
            })
            .collect(),
    }
}
