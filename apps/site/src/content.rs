//! The static data source: the CV content as literal records. Built once
//! at startup, shared read-only afterwards.
//!
//! List order is meaningful everywhere: the renderer promises not to
//! re-sort anything.

use crate::models::{Education, Experience, LanguageSkill, PersonalInfo, Profile, Skills};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Builds the full profile. Translation keys used here must exist in every
/// locale table under `assets/i18n/`; the `i18n::catalog` tests enforce that.
pub fn profile() -> Profile {
    Profile {
        personal: PersonalInfo {
            name: "Samuel Arnaud".to_string(),
            title: "personal.title".to_string(),
            summary: "personal.summary".to_string(),
            address: "Lille, France".to_string(),
            phone: "+33 6 12 34 56 78".to_string(),
            email: "contact@samuelarnaud.dev".to_string(),
        },
        experiences: vec![
            Experience {
                period: "2021-2025".to_string(),
                company: "OVHcloud".to_string(),
                role: "experience.ovhcloud.role".to_string(),
                location: "Roubaix, France".to_string(),
                projects: "experience.ovhcloud.projects".to_string(),
                role_description: "experience.ovhcloud.description".to_string(),
                technologies: strings(&[
                    "Angular",
                    "TypeScript",
                    "Node.js",
                    "PostgreSQL",
                    "Docker",
                    "Kubernetes",
                ]),
            },
            Experience {
                period: "2018-2021".to_string(),
                company: "Worldline".to_string(),
                role: "experience.worldline.role".to_string(),
                location: "Seclin, France".to_string(),
                projects: "experience.worldline.projects".to_string(),
                role_description: "experience.worldline.description".to_string(),
                technologies: strings(&["Java", "Spring Boot", "Angular", "Oracle", "Jenkins"]),
            },
            Experience {
                period: "2016-2018".to_string(),
                company: "Capgemini".to_string(),
                role: "experience.capgemini.role".to_string(),
                location: "Lille, France".to_string(),
                projects: "experience.capgemini.projects".to_string(),
                role_description: "experience.capgemini.description".to_string(),
                technologies: strings(&["Java", "AngularJS", "MySQL", "Jira"]),
            },
            Experience {
                period: "2015-2016".to_string(),
                company: "Norsys".to_string(),
                role: "experience.norsys.role".to_string(),
                location: "Ennevelin, France".to_string(),
                projects: "experience.norsys.projects".to_string(),
                role_description: "experience.norsys.description".to_string(),
                technologies: strings(&["PHP", "Symfony", "JavaScript", "MySQL"]),
            },
        ],
        education: vec![
            Education {
                period: "2013-2015".to_string(),
                degree: "education.master.degree".to_string(),
                school: "Université de Lille".to_string(),
            },
            Education {
                period: "2010-2013".to_string(),
                degree: "education.bachelor.degree".to_string(),
                school: "Université de Lille".to_string(),
            },
        ],
        skills: Skills {
            technical: strings(&[
                "Angular",
                "TypeScript",
                "JavaScript",
                "Node.js",
                "Java",
                "Spring Boot",
                "PostgreSQL",
                "HTML5 / CSS3",
            ]),
            methodologies: strings(&["Agile / Scrum", "Kanban", "TDD", "CI/CD", "Code Review"]),
            tools: strings(&[
                "Git",
                "Docker",
                "Kubernetes",
                "Jenkins",
                "GitLab CI",
                "Jira",
                "IntelliJ IDEA",
            ]),
        },
        languages: vec![
            LanguageSkill {
                name: "languages.french".to_string(),
                level: "levels.native".to_string(),
            },
            LanguageSkill {
                name: "languages.english".to_string(),
                level: "levels.professional".to_string(),
            },
            LanguageSkill {
                name: "languages.dutch".to_string(),
                level: "levels.intermediate".to_string(),
            },
        ],
    }
}
