//! Static catalog of visual variants per section type.
//!
//! Each variant carries canned preview content so a freshly added
//! section shows realistic text immediately instead of an empty box.
//! Unknown kinds return an empty list, so the UI can probe "does this
//! type have variants" without special-casing.

use serde::Serialize;

use crate::registry::SectionKind;

/// One visual/content preset for a section type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionVariant {
    pub id: String,
    pub name: String,
    pub description: String,
    pub preview: PreviewData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewData {
    /// Display title override; wins over the variant name and the
    /// registry default when resolving section titles.
    pub title: Option<String>,
    pub content: PreviewContent,
}

/// Canned content, shaped per section type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PreviewContent {
    /// Purely visual variant, nothing to seed.
    None,
    /// A single paragraph.
    Text(String),
    /// Lines joined with newlines when applied.
    Lines(Vec<String>),
    Experience(Vec<PreviewExperience>),
    Education(Vec<PreviewEducation>),
    /// Flat skill names.
    Skills(Vec<String>),
    /// Skill names grouped by category.
    GroupedSkills(Vec<SkillGroup>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewExperience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub bullet_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewEducation {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub names: Vec<String>,
}

fn variant(
    id: &str,
    name: &str,
    description: &str,
    title: Option<&str>,
    content: PreviewContent,
) -> SectionVariant {
    SectionVariant {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        preview: PreviewData {
            title: title.map(str::to_string),
            content,
        },
    }
}

fn experience_item(
    company: &str,
    position: &str,
    start: &str,
    end: &str,
    bullets: &[&str],
) -> PreviewExperience {
    PreviewExperience {
        company: company.to_string(),
        position: position.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        current: end.is_empty(),
        bullet_points: bullets.iter().map(|b| b.to_string()).collect(),
    }
}

/// All variants for a section type; empty for kinds without any.
pub fn section_variants(kind: SectionKind) -> Vec<SectionVariant> {
    match kind {
        SectionKind::Header => vec![
            variant(
                "header-centered",
                "Centered",
                "Name and contact centered on one line",
                None,
                PreviewContent::None,
            ),
            variant(
                "header-split",
                "Split",
                "Name left, contact details right",
                None,
                PreviewContent::None,
            ),
            variant(
                "header-banner",
                "Banner",
                "Full-width color banner with photo",
                None,
                PreviewContent::None,
            ),
        ],
        SectionKind::Summary => vec![
            variant(
                "summary-paragraph",
                "Paragraph",
                "Classic prose summary",
                Some("Professional Summary"),
                PreviewContent::Text(
                    "Results-driven professional with 8+ years of experience delivering \
                     measurable outcomes across cross-functional teams."
                        .to_string(),
                ),
            ),
            variant(
                "summary-highlights",
                "Highlights",
                "Three short lines instead of prose",
                Some("Profile"),
                PreviewContent::Lines(vec![
                    "8+ years in software delivery".to_string(),
                    "Led teams of up to 12 engineers".to_string(),
                    "Shipped products used by millions".to_string(),
                ]),
            ),
        ],
        SectionKind::Experience => vec![
            variant(
                "experience-standard",
                "Standard",
                "Company, role, dates and bullet points",
                Some("Work Experience"),
                PreviewContent::Experience(vec![
                    experience_item(
                        "Acme Corp",
                        "Senior Software Engineer",
                        "2021",
                        "",
                        &[
                            "Led the migration of a monolith to services, cutting deploy time by 80%",
                            "Mentored four junior engineers through promotion",
                        ],
                    ),
                    experience_item(
                        "Initech",
                        "Software Engineer",
                        "2018",
                        "2021",
                        &["Built the reporting pipeline processing 2M events per day"],
                    ),
                ]),
            ),
            variant(
                "experience-compact",
                "Compact",
                "Single-line entries for long histories",
                None,
                PreviewContent::Experience(vec![experience_item(
                    "Globex",
                    "Engineering Lead",
                    "2015",
                    "2018",
                    &["Owned delivery of the flagship product line"],
                )]),
            ),
        ],
        SectionKind::Education => vec![variant(
            "education-standard",
            "Standard",
            "School, degree and dates",
            None,
            PreviewContent::Education(vec![PreviewEducation {
                school: "State University".to_string(),
                degree: "B.Sc.".to_string(),
                field: "Computer Science".to_string(),
                start_date: "2011".to_string(),
                end_date: "2015".to_string(),
                gpa: Some("3.8".to_string()),
            }]),
        )],
        SectionKind::Skills => vec![
            variant(
                "skills-pills",
                "Pills",
                "Flat list rendered as pills",
                Some("Core Skills"),
                PreviewContent::Skills(vec![
                    "Rust".to_string(),
                    "TypeScript".to_string(),
                    "PostgreSQL".to_string(),
                    "Kubernetes".to_string(),
                ]),
            ),
            variant(
                "skills-grouped",
                "Grouped",
                "Skills grouped by category",
                None,
                PreviewContent::GroupedSkills(vec![
                    SkillGroup {
                        category: "Languages".to_string(),
                        names: vec!["Rust".to_string(), "Go".to_string(), "Python".to_string()],
                    },
                    SkillGroup {
                        category: "Infrastructure".to_string(),
                        names: vec!["AWS".to_string(), "Terraform".to_string()],
                    },
                ]),
            ),
        ],
        _ => Vec::new(),
    }
}

/// Look a variant up by id within a section type.
pub fn find_variant(kind: SectionKind, variant_id: &str) -> Option<SectionVariant> {
    section_variants(kind).into_iter().find(|v| v.id == variant_id)
}
