use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Flat record of personal scalars. Always present, never null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub photo: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
}

/// One job entry. `id` is caller-assigned, unique within the
/// collection, and never reassigned; bullet-point operations key on
/// it rather than the array index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    /// When true, renderers display "Present" and must not trust
    /// `end_date`.
    pub current: bool,
    pub description: String,
    pub bullet_points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillEntry {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// One item of a free-form custom section. Older documents store
/// plain strings, newer ones `{ "text": ... }` records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomItem {
    Plain(String),
    Rich { text: String },
}

impl CustomItem {
    pub fn text(&self) -> &str {
        match self {
            CustomItem::Plain(text) => text,
            CustomItem::Rich { text } => text,
        }
    }
}

/// User-defined block not covered by a dedicated field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSection {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<CustomItem>,
}

/// Newer documents only: a section record carried inside the document
/// itself, with a type-specific payload the core does not interpret.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DynamicSection {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub order: i64,
    pub enabled: bool,
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

/// The root resume value.
///
/// Every mutation produces a new `ResumeDocument`; entry collections
/// are `Arc`-backed so untouched entries are shared between versions
/// (cheap clones, `Arc::ptr_eq`-checkable structural sharing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub include_social_links: bool,
    pub experience: Vec<Arc<ExperienceEntry>>,
    pub education: Vec<Arc<EducationEntry>>,
    pub skills: Vec<Arc<SkillEntry>>,
    pub sections: Vec<Arc<CustomSection>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dynamic_sections: Vec<DynamicSection>,
}

impl Default for ResumeDocument {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            include_social_links: true,
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            sections: Vec::new(),
            dynamic_sections: Vec::new(),
        }
    }
}

impl ResumeDocument {
    /// Empty document, the starting point of the scratch builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an experience id to its current index. Callers must
    /// resolve immediately before mutating, never cache across an
    /// event boundary (indexes shift on insert/remove).
    pub fn experience_position(&self, entry_id: &str) -> Option<usize> {
        self.experience.iter().position(|entry| entry.id == entry_id)
    }

    /// Dynamic sections as renderers consume them: enabled only,
    /// sorted by `order`.
    pub fn visible_dynamic_sections(&self) -> Vec<&DynamicSection> {
        let mut visible: Vec<&DynamicSection> = self
            .dynamic_sections
            .iter()
            .filter(|section| section.enabled)
            .collect();
        visible.sort_by_key(|section| section.order);
        visible
    }

    /// Normalize a freshly loaded document.
    ///
    /// Legacy documents carry prose in `experience[].description`
    /// instead of `bulletPoints`. When an entry has no non-blank
    /// bullet but a non-blank description, the description is split
    /// into one bullet per line (or kept whole if it has no line
    /// breaks) and then cleared. Existing bullets are preserved as-is,
    /// including empty strings, which act as in-progress edit
    /// placeholders.
    pub fn sanitize(mut self) -> Self {
        for entry in &mut self.experience {
            let has_real_bullet = entry
                .bullet_points
                .iter()
                .any(|bullet| !bullet.trim().is_empty());
            if has_real_bullet || entry.description.trim().is_empty() {
                continue;
            }

            let entry = Arc::make_mut(entry);
            let mut bullets: Vec<String> = entry
                .description
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            if bullets.is_empty() {
                bullets.push(entry.description.trim().to_string());
            }
            entry.bullet_points = bullets;
            entry.description.clear();
        }
        self
    }
}
