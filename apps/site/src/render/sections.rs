//! The four content sections of the page: hero, experience timeline, skills
//! grid, and contact. Each function returns a self-contained `<section>`
//! fragment; `layout::page` decides the order.
//!
//! Lists are rendered strictly in the order the profile provides them. No
//! sorting, grouping, or dedup happens here.

use chrono::NaiveDate;

use crate::i18n::{Catalog, Locale};
use crate::models::Profile;
use crate::render::{escape_html, format_period, technology_color, years_of_experience};

/// Intro block: monogram, name, headline, location and experience facts,
/// and the summary paragraph.
pub fn hero(profile: &Profile, catalog: &Catalog, locale: Locale, today: NaiveDate) -> String {
    let t = |key: &str| escape_html(catalog.resolve(locale, key));
    let personal = &profile.personal;

    format!(
        r#"<section id="about" class="hero">
<span class="monogram">{monogram}</span>
<h1>{name}</h1>
<p class="role">{title}</p>
<div class="facts">
<span>{address}</span>
<span>{years}+ {years_label}</span>
</div>
<p class="summary">{summary}</p>
</section>
"#,
        monogram = escape_html(&personal.monogram()),
        name = escape_html(&personal.name),
        title = t(&personal.title),
        address = escape_html(&personal.address),
        years = years_of_experience(today),
        years_label = t("common.years_experience"),
        summary = t(&personal.summary),
    )
}

/// Experience timeline, one entry per position.
pub fn experience(profile: &Profile, catalog: &Catalog, locale: Locale) -> String {
    let t = |key: &str| escape_html(catalog.resolve(locale, key));

    let mut entries = String::new();
    for exp in &profile.experiences {
        let mut tech_badges = String::new();
        for tech in &exp.technologies {
            tech_badges.push_str(&format!(
                "<span class=\"{class}\">{name}</span>",
                class = technology_color(tech),
                name = escape_html(tech),
            ));
        }

        entries.push_str(&format!(
            r#"<li class="entry">
<div class="entry-head">
<h3>{company}</h3>
<span class="period">{period}</span>
</div>
<p class="role">{role}</p>
<p class="location">{location}</p>
<dl>
<dt>{projects_label}</dt>
<dd>{projects}</dd>
<dt>{role_label}</dt>
<dd>{role_description}</dd>
<dt>{tech_label}</dt>
<dd class="tech-list">{tech_badges}</dd>
</dl>
</li>
"#,
            company = escape_html(&exp.company),
            period = escape_html(&format_period(&exp.period)),
            role = t(&exp.role),
            location = escape_html(&exp.location),
            projects_label = t("common.projects"),
            projects = t(&exp.projects),
            role_label = t("common.role_description"),
            role_description = t(&exp.role_description),
            tech_label = t("common.technologies"),
        ));
    }

    format!(
        "<section id=\"experience\">\n<h2>{heading}</h2>\n<ol class=\"timeline\">\n{entries}</ol>\n</section>\n",
        heading = t("sections.experience"),
    )
}

/// Skills grid: three chip cards, the spoken-language card, and the
/// education card.
pub fn skills(profile: &Profile, catalog: &Catalog, locale: Locale) -> String {
    let t = |key: &str| escape_html(catalog.resolve(locale, key));

    let chips = |values: &[String]| {
        let mut list = String::new();
        for value in values {
            list.push_str(&format!("<span>{}</span>", escape_html(value)));
        }
        list
    };

    let mut language_rows = String::new();
    for lang in &profile.languages {
        language_rows.push_str(&format!(
            "<li><span>{name}</span><span class=\"level\">{level}</span></li>",
            name = t(&lang.name),
            level = t(&lang.level),
        ));
    }

    let mut education_entries = String::new();
    for edu in &profile.education {
        education_entries.push_str(&format!(
            r#"<div class="education-entry">
<h3>{degree}</h3>
<p>{school}</p>
<p><span class="period">{period}</span></p>
</div>
"#,
            degree = t(&edu.degree),
            school = escape_html(&edu.school),
            period = escape_html(&edu.period),
        ));
    }

    format!(
        r#"<section id="skills">
<h2>{heading}</h2>
<div class="card-grid">
<div class="card">
<h3>{technical_label}</h3>
<div class="chip-list">{technical}</div>
</div>
<div class="card">
<h3>{methodologies_label}</h3>
<div class="chip-list">{methodologies}</div>
</div>
<div class="card">
<h3>{tools_label}</h3>
<div class="chip-list">{tools}</div>
</div>
<div class="card">
<h3>{languages_label}</h3>
<ul class="level-list">{language_rows}</ul>
</div>
<div class="card">
<h3>{education_heading}</h3>
{education_entries}</div>
</div>
</section>
"#,
        heading = t("sections.skills"),
        technical_label = t("skills.technical"),
        technical = chips(&profile.skills.technical),
        methodologies_label = t("skills.methodologies"),
        methodologies = chips(&profile.skills.methodologies),
        tools_label = t("skills.tools"),
        tools = chips(&profile.skills.tools),
        languages_label = t("skills.languages"),
        education_heading = t("sections.education"),
    )
}

/// Contact cards plus the mailto call to action.
pub fn contact(profile: &Profile, catalog: &Catalog, locale: Locale) -> String {
    let t = |key: &str| escape_html(catalog.resolve(locale, key));
    let personal = &profile.personal;

    format!(
        r#"<section id="contact">
<h2>{heading}</h2>
<div class="card-grid">
<div class="card">
<h3>{phone_label}</h3>
<p><a href="tel:{phone_href}">{phone}</a></p>
</div>
<div class="card">
<h3>{email_label}</h3>
<p><a href="mailto:{email}">{email}</a></p>
</div>
<div class="card">
<h3>{location_label}</h3>
<p>{address}</p>
</div>
<div class="card contact-cta">
<h3>{cta_title}</h3>
<p>{cta_description}</p>
<a class="button" href="mailto:{email}">{get_in_touch}</a>
</div>
</div>
</section>
"#,
        heading = t("sections.contact"),
        phone_label = t("contact.phone"),
        phone_href = escape_html(&personal.phone.replace(' ', "")),
        phone = escape_html(&personal.phone),
        email_label = t("contact.email"),
        email = escape_html(&personal.email),
        location_label = t("contact.location"),
        address = escape_html(&personal.address),
        cta_title = t("contact.cta_title"),
        cta_description = t("contact.cta_description"),
        get_in_touch = t("contact.get_in_touch"),
    )
}
