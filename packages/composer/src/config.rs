//! Render configuration types and the built-in base template.
//!
//! A [`TemplateConfig`] is what the renderer consumes. The base config
//! returned by [`default_template_config`] carries its own section
//! list; composition supersedes that list entirely and records the
//! displaced kinds (see [`crate::compose`]).

use serde::{Deserialize, Serialize};

use crate::registry::SectionKind;
use crate::scratch::Column;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorConfig {
    pub primary: String,
    pub secondary: String,
    pub text: String,
    pub muted: String,
    pub background: String,
    pub border: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingConfig {
    pub page_padding: String,
    pub section_gap: String,
    pub item_gap: String,
    pub heading_to_content: String,
    pub bullet_gap: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStyle {
    SingleColumn,
    TwoColumn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(rename = "type")]
    pub style: LayoutStyle,
    /// Sidebar width as a CSS length; only meaningful for two-column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_width: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    /// Visual variant id, e.g. `"header-centered"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub show_photo: bool,
    pub show_social_links: bool,
}

/// One section slot in the render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub id: String,
    pub title: String,
    pub default_title: String,
    pub enabled: bool,
    pub order: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<Column>,
    /// Variant id carried through for the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// The full render configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub id: String,
    pub name: String,
    pub colors: ColorConfig,
    pub layout: LayoutConfig,
    pub spacing: SpacingConfig,
    pub header: HeaderConfig,
    pub sections: Vec<SectionConfig>,
    /// Base-template section kinds displaced by the composed list.
    #[serde(default)]
    pub suppressed_kinds: Vec<SectionKind>,
}

fn base_section(
    kind: SectionKind,
    id: &str,
    title: &str,
    enabled: bool,
    order: usize,
) -> SectionConfig {
    SectionConfig {
        kind,
        id: id.to_string(),
        title: title.to_string(),
        default_title: title.to_string(),
        enabled,
        order,
        column: None,
        variant: None,
    }
}

/// Built-in base template. A single-column minimal style with a red
/// accent; composition overlays theme color, layout and sections on
/// top of it.
pub fn default_template_config() -> TemplateConfig {
    TemplateConfig {
        id: "swiss-minimal".to_string(),
        name: "Swiss Minimal".to_string(),
        colors: ColorConfig {
            primary: "#dc2626".to_string(),
            secondary: "#1f2937".to_string(),
            text: "#000000".to_string(),
            muted: "#666666".to_string(),
            background: "#ffffff".to_string(),
            border: "#e5e7eb".to_string(),
        },
        layout: LayoutConfig {
            style: LayoutStyle::SingleColumn,
            sidebar_width: None,
        },
        spacing: SpacingConfig {
            page_padding: "32px".to_string(),
            section_gap: "18px".to_string(),
            item_gap: "12px".to_string(),
            heading_to_content: "8px".to_string(),
            bullet_gap: "4px".to_string(),
        },
        header: HeaderConfig {
            variant: None,
            show_photo: false,
            show_social_links: true,
        },
        sections: vec![
            base_section(SectionKind::Header, "header", "Header", true, 0),
            base_section(SectionKind::Summary, "summary", "Profile", true, 1),
            base_section(SectionKind::Experience, "experience", "Experience", true, 2),
            base_section(SectionKind::Skills, "skills", "Skills", true, 3),
            base_section(SectionKind::Education, "education", "Education", true, 4),
            base_section(
                SectionKind::Certifications,
                "certifications",
                "Certifications",
                false,
                5,
            ),
        ],
        suppressed_kinds: Vec::new(),
    }
}
