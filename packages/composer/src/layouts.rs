//! Static catalog of starting layouts for the scratch builder.
//!
//! A layout decides two things: which column a newly added section
//! lands in, and which layout/spacing defaults overlay the base
//! template during composition.

use crate::config::{LayoutConfig, LayoutStyle, SpacingConfig};
use crate::registry::SectionKind;

/// Partial config overlay carried by a layout. `None` means "keep the
/// base template's value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutDefaults {
    pub layout: Option<LayoutConfig>,
    pub spacing: Option<SpacingConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchLayout {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Kinds this layout places in the main column by default.
    pub main_sections: Vec<SectionKind>,
    /// Kinds this layout places in the sidebar by default.
    pub sidebar_sections: Vec<SectionKind>,
    pub defaults: LayoutDefaults,
}

impl ScratchLayout {
    fn new(id: &str, name: &str, description: &str) -> Self {
        ScratchLayout {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            main_sections: Vec::new(),
            sidebar_sections: Vec::new(),
            defaults: LayoutDefaults::default(),
        }
    }
}

/// All built-in layouts, in presentation order.
pub fn scratch_layouts() -> Vec<ScratchLayout> {
    let mut single = ScratchLayout::new(
        "single-column",
        "Single Column",
        "Everything in one flow, top to bottom",
    );
    single.main_sections = vec![
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Languages,
        SectionKind::Certifications,
        SectionKind::Projects,
    ];
    single.defaults.layout = Some(LayoutConfig {
        style: LayoutStyle::SingleColumn,
        sidebar_width: None,
    });

    let mut sidebar = ScratchLayout::new(
        "sidebar-left",
        "Sidebar",
        "Skills and details in a narrow left column",
    );
    sidebar.main_sections = vec![
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Projects,
    ];
    sidebar.sidebar_sections = vec![
        SectionKind::Skills,
        SectionKind::Languages,
        SectionKind::Certifications,
        SectionKind::Interests,
    ];
    sidebar.defaults.layout = Some(LayoutConfig {
        style: LayoutStyle::TwoColumn,
        sidebar_width: Some("32%".to_string()),
    });
    sidebar.defaults.spacing = Some(SpacingConfig {
        page_padding: "28px".to_string(),
        section_gap: "16px".to_string(),
        item_gap: "10px".to_string(),
        heading_to_content: "6px".to_string(),
        bullet_gap: "4px".to_string(),
    });

    let mut compact = ScratchLayout::new(
        "compact",
        "Compact",
        "Tight spacing for one-page resumes",
    );
    compact.main_sections = vec![
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Skills,
        SectionKind::Education,
    ];
    compact.defaults.spacing = Some(SpacingConfig {
        page_padding: "24px".to_string(),
        section_gap: "12px".to_string(),
        item_gap: "8px".to_string(),
        heading_to_content: "4px".to_string(),
        bullet_gap: "2px".to_string(),
    });

    vec![single, sidebar, compact]
}

pub fn layout_by_id(id: &str) -> Option<ScratchLayout> {
    scratch_layouts().into_iter().find(|l| l.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let layout = layout_by_id("sidebar-left").unwrap();
        assert!(layout.sidebar_sections.contains(&SectionKind::Skills));
        assert!(layout_by_id("nope").is_none());
    }

    #[test]
    fn no_kind_sits_in_both_columns() {
        for layout in scratch_layouts() {
            for kind in &layout.main_sections {
                assert!(!layout.sidebar_sections.contains(kind), "{:?}", kind);
            }
        }
    }
}
