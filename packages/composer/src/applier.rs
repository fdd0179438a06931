//! Seeds a variant's canned preview content into the resume document.
//!
//! The per-kind write strategy is deliberate product behavior, not an
//! accident: summary overwrites, experience and education append, and
//! skills replace wholesale. Kinds without data content leave the
//! document untouched.

use std::sync::Arc;

use tracing::debug;

use resumecraft_document::{
    EducationEntry, ExperienceEntry, IdGenerator, ResumeDocument, SkillEntry,
};

use crate::registry::SectionKind;
use crate::variants::{PreviewContent, SectionVariant};

/// Apply a variant's preview content to the document, returning the
/// new value. Kind/content mismatches and contentless variants are
/// traced no-ops.
pub fn apply_variant(
    doc: &ResumeDocument,
    kind: SectionKind,
    variant: &SectionVariant,
    ids: &mut IdGenerator,
) -> ResumeDocument {
    let mut next = doc.clone();
    match (kind, &variant.preview.content) {
        (SectionKind::Summary, PreviewContent::Text(text)) => {
            next.personal_info.summary = text.clone();
        }
        (SectionKind::Summary, PreviewContent::Lines(lines)) => {
            next.personal_info.summary = lines.join("\n");
        }
        (SectionKind::Experience, PreviewContent::Experience(items)) => {
            for item in items {
                next.experience.push(Arc::new(ExperienceEntry {
                    id: ids.new_id(),
                    company: item.company.clone(),
                    position: item.position.clone(),
                    start_date: item.start_date.clone(),
                    end_date: item.end_date.clone(),
                    current: item.current,
                    description: String::new(),
                    bullet_points: item.bullet_points.clone(),
                }));
            }
        }
        (SectionKind::Education, PreviewContent::Education(items)) => {
            for item in items {
                next.education.push(Arc::new(EducationEntry {
                    id: ids.new_id(),
                    school: item.school.clone(),
                    degree: item.degree.clone(),
                    field: item.field.clone(),
                    start_date: item.start_date.clone(),
                    end_date: item.end_date.clone(),
                    gpa: item.gpa.clone(),
                }));
            }
        }
        (SectionKind::Skills, PreviewContent::Skills(names)) => {
            next.skills = names
                .iter()
                .map(|name| {
                    Arc::new(SkillEntry {
                        id: ids.new_id(),
                        name: name.clone(),
                        ..Default::default()
                    })
                })
                .collect();
        }
        (SectionKind::Skills, PreviewContent::GroupedSkills(groups)) => {
            next.skills = groups
                .iter()
                .flat_map(|group| {
                    group
                        .names
                        .iter()
                        .map(|name| {
                            Arc::new(SkillEntry {
                                id: ids.new_id(),
                                name: name.clone(),
                                category: Some(group.category.clone()),
                                ..Default::default()
                            })
                        })
                        .collect::<Vec<_>>()
                })
                .collect();
        }
        _ => {
            debug!(
                kind = kind.as_str(),
                variant = %variant.id,
                "variant carries no content for this section type"
            );
        }
    }
    next
}
