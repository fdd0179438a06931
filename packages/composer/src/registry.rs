//! Static catalog of section types.
//!
//! Consulted, never mutated at runtime. New section types extend
//! [`SectionKind`] and this table; most need nothing else (the variant
//! catalog and the applier both fall back to no-ops for kinds they do
//! not know).

use serde::{Deserialize, Serialize};

/// Closed enumeration of section types. Serialized as the camel
/// strings the persisted builder state uses (`"header"`,
/// `"experience"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Header,
    Summary,
    Experience,
    Education,
    Skills,
    Languages,
    Achievements,
    Strengths,
    Certifications,
    Projects,
    Awards,
    Publications,
    Volunteer,
    Speaking,
    Patents,
    Interests,
    References,
    Courses,
    Custom,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Languages => "languages",
            SectionKind::Achievements => "achievements",
            SectionKind::Strengths => "strengths",
            SectionKind::Certifications => "certifications",
            SectionKind::Projects => "projects",
            SectionKind::Awards => "awards",
            SectionKind::Publications => "publications",
            SectionKind::Volunteer => "volunteer",
            SectionKind::Speaking => "speaking",
            SectionKind::Patents => "patents",
            SectionKind::Interests => "interests",
            SectionKind::References => "references",
            SectionKind::Courses => "courses",
            SectionKind::Custom => "custom",
        }
    }
}

/// Registry metadata for one section type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDefinition {
    pub kind: SectionKind,
    pub default_title: &'static str,
    pub description: &'static str,
    /// Whether a user may add more than one instance of this type.
    pub allow_multiple: bool,
}

/// One entry per `SectionKind`, in declaration order.
pub const SECTION_REGISTRY: &[SectionDefinition] = &[
    SectionDefinition {
        kind: SectionKind::Header,
        default_title: "Header",
        description: "Name, title and contact details",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::Summary,
        default_title: "Summary",
        description: "Short professional profile",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::Experience,
        default_title: "Experience",
        description: "Work history with bullet points",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::Education,
        default_title: "Education",
        description: "Schools, degrees and fields of study",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::Skills,
        default_title: "Skills",
        description: "Skill names, optionally grouped or rated",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::Languages,
        default_title: "Languages",
        description: "Spoken languages and proficiency",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::Achievements,
        default_title: "Achievements",
        description: "Key accomplishments",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::Strengths,
        default_title: "Strengths",
        description: "Personal strengths",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::Certifications,
        default_title: "Certifications",
        description: "Professional certifications",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::Projects,
        default_title: "Projects",
        description: "Selected projects",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::Awards,
        default_title: "Awards",
        description: "Honors and awards",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::Publications,
        default_title: "Publications",
        description: "Published work",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::Volunteer,
        default_title: "Volunteer Experience",
        description: "Volunteer roles",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::Speaking,
        default_title: "Speaking",
        description: "Talks and presentations",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::Patents,
        default_title: "Patents",
        description: "Granted and pending patents",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::Interests,
        default_title: "Interests",
        description: "Personal interests",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::References,
        default_title: "References",
        description: "Professional references",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::Courses,
        default_title: "Courses",
        description: "Relevant coursework and training",
        allow_multiple: false,
    },
    SectionDefinition {
        kind: SectionKind::Custom,
        default_title: "Custom Section",
        description: "Free-form user-defined block",
        allow_multiple: true,
    },
];

/// Total lookup: the table carries one entry per kind, in enum order.
pub fn section_definition(kind: SectionKind) -> &'static SectionDefinition {
    &SECTION_REGISTRY[kind as usize]
}
