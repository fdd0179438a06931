//! Merges scratch sections, layout defaults and theme color over the
//! base template into one render configuration.
//!
//! Pure function: the output depends only on the arguments, and the
//! section order in the output follows the `order` fields, not the
//! slice order of the input.

use crate::config::{SectionConfig, TemplateConfig};
use crate::layouts::ScratchLayout;
use crate::registry::{section_definition, SectionKind};
use crate::scratch::{ScratchSection, HEADER_SECTION_ID};
use crate::variants::find_variant;

/// Display title by the four-level fallback: variant preview title,
/// then variant name, then registry default, then the raw kind
/// string. Blank candidates are skipped.
fn resolve_title(section: &ScratchSection) -> String {
    if let Some(variant_id) = &section.variant_id {
        if let Some(variant) = find_variant(section.kind, variant_id) {
            if let Some(title) = variant.preview.title {
                if !title.trim().is_empty() {
                    return title;
                }
            }
            if !variant.name.trim().is_empty() {
                return variant.name;
            }
        }
    }
    let default_title = section_definition(section.kind).default_title;
    if !default_title.trim().is_empty() {
        return default_title.to_string();
    }
    section.kind.as_str().to_string()
}

/// Compose scratch sections over the base template.
///
/// The header is pinned at order 0 whether or not the user added one;
/// without one it appears disabled so the renderer still reserves its
/// space. Base-template sections never leak into the output: the
/// composed list replaces them, and their kinds land in
/// `suppressed_kinds` when the scratch list covers them.
pub fn compose(
    sections: &[ScratchSection],
    layout: Option<&ScratchLayout>,
    base: &TemplateConfig,
    theme_color: &str,
) -> TemplateConfig {
    let header = sections.iter().find(|s| s.kind == SectionKind::Header);

    let mut body: Vec<&ScratchSection> = sections
        .iter()
        .filter(|s| s.kind != SectionKind::Header)
        .collect();
    body.sort_by_key(|s| s.order);

    let mut composed = Vec::with_capacity(body.len() + 1);
    composed.push(SectionConfig {
        kind: SectionKind::Header,
        id: HEADER_SECTION_ID.to_string(),
        title: "Header".to_string(),
        default_title: "Header".to_string(),
        enabled: header.is_some(),
        order: 0,
        column: None,
        variant: header.and_then(|h| h.variant_id.clone()),
    });
    for section in body {
        composed.push(SectionConfig {
            kind: section.kind,
            id: section.id.clone(),
            title: resolve_title(section),
            default_title: section_definition(section.kind).default_title.to_string(),
            enabled: section.enabled,
            order: section.order,
            column: section.column,
            variant: section.variant_id.clone(),
        });
    }

    // Suppression keys on the kinds the user actually added, not on
    // the composed list (which always carries a header placeholder).
    let mut suppressed_kinds: Vec<SectionKind> = base
        .sections
        .iter()
        .map(|s| s.kind)
        .filter(|kind| sections.iter().any(|s| s.kind == *kind))
        .collect();
    suppressed_kinds.dedup();

    let defaults = layout.map(|l| &l.defaults);
    let mut config = base.clone();
    config.id = "scratch".to_string();
    config.name = "Scratch Builder".to_string();
    config.colors.primary = theme_color.to_string();
    if let Some(overlay) = defaults.and_then(|d| d.layout.clone()) {
        config.layout = overlay;
    }
    if let Some(overlay) = defaults.and_then(|d| d.spacing.clone()) {
        config.spacing = overlay;
    }
    if let Some(header) = header {
        config.header.variant = header.variant_id.clone();
    }
    config.sections = composed;
    config.suppressed_kinds = suppressed_kinds;
    config
}
