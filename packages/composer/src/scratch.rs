//! The scratch builder: the user-ordered section list that is the
//! source of truth for a from-scratch resume.
//!
//! Render configuration is always derived from this state via
//! [`crate::compose`]; nothing here is ever reconstructed from a
//! composed config.

use serde::{Deserialize, Serialize};
use tracing::debug;

use resumecraft_document::IdGenerator;

use crate::compose::compose;
use crate::config::{default_template_config, TemplateConfig};
use crate::layouts::ScratchLayout;
use crate::registry::{section_definition, SectionKind};

pub const HEADER_SECTION_ID: &str = "header";
const DEFAULT_THEME_COLOR: &str = "#2563eb";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Main,
    Sidebar,
}

/// One section the user has added to the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScratchSection {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<Column>,
    pub order: usize,
}

/// Patch for [`ScratchBuilder::update_section`]. `None` fields are
/// left untouched.
#[derive(Debug, Clone, Default)]
pub struct SectionUpdate {
    pub variant_id: Option<String>,
    pub column: Option<Column>,
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct ScratchBuilder {
    sections: Vec<ScratchSection>,
    layout: Option<ScratchLayout>,
    theme_color: String,
    ids: IdGenerator,
}

impl ScratchBuilder {
    pub fn new(layout: Option<ScratchLayout>) -> Self {
        ScratchBuilder {
            sections: Vec::new(),
            layout,
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            ids: IdGenerator::new("section"),
        }
    }

    /// Deterministic ids for tests.
    pub fn with_id_generator(layout: Option<ScratchLayout>, ids: IdGenerator) -> Self {
        ScratchBuilder {
            sections: Vec::new(),
            layout,
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            ids,
        }
    }

    pub fn sections(&self) -> &[ScratchSection] {
        &self.sections
    }

    pub fn layout(&self) -> Option<&ScratchLayout> {
        self.layout.as_ref()
    }

    pub fn theme_color(&self) -> &str {
        &self.theme_color
    }

    pub fn set_theme_color(&mut self, color: impl Into<String>) {
        self.theme_color = color.into();
    }

    pub fn section(&self, id: &str) -> Option<&ScratchSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Add a section, or update the existing instance in place for
    /// kinds that do not allow multiples. Returns the id of the
    /// affected section.
    pub fn add_section(
        &mut self,
        kind: SectionKind,
        variant_id: Option<&str>,
        column: Option<Column>,
    ) -> String {
        let definition = section_definition(kind);
        if !definition.allow_multiple {
            if let Some(existing) = self.sections.iter_mut().find(|s| s.kind == kind) {
                existing.variant_id = variant_id.map(str::to_string);
                if let Some(column) = column {
                    existing.column = Some(column);
                }
                return existing.id.clone();
            }
        }

        let is_header = kind == SectionKind::Header;
        let id = if is_header {
            HEADER_SECTION_ID.to_string()
        } else {
            self.ids.new_id()
        };
        let order = if is_header { 0 } else { self.sections.len() };
        let column = column.or_else(|| self.default_column(kind));

        self.sections.push(ScratchSection {
            id: id.clone(),
            kind,
            variant_id: variant_id.map(str::to_string),
            enabled: true,
            column,
            order,
        });
        id
    }

    /// Remove a section by id; unknown ids are a traced no-op.
    pub fn remove_section(&mut self, id: &str) {
        let before = self.sections.len();
        self.sections.retain(|s| s.id != id);
        if self.sections.len() == before {
            debug!(id, "remove_section: no such section");
            return;
        }
        self.renumber();
    }

    /// Reassign orders to match the given id sequence. Ids not in the
    /// list keep their relative order after the listed ones; the
    /// header stays pinned at 0 regardless.
    pub fn reorder(&mut self, ids: &[String]) {
        let position = |section: &ScratchSection| {
            ids.iter()
                .position(|id| *id == section.id)
                .unwrap_or(usize::MAX)
        };
        self.sections.sort_by_key(|s| (position(s), s.order));
        self.renumber();
    }

    /// Patch variant, column or enabled; unknown ids are a traced
    /// no-op.
    pub fn update_section(&mut self, id: &str, update: SectionUpdate) {
        let Some(section) = self.sections.iter_mut().find(|s| s.id == id) else {
            debug!(id, "update_section: no such section");
            return;
        };
        if let Some(variant_id) = update.variant_id {
            section.variant_id = Some(variant_id);
        }
        if let Some(column) = update.column {
            section.column = Some(column);
        }
        if let Some(enabled) = update.enabled {
            section.enabled = enabled;
        }
    }

    /// Compose the current state over the built-in base template.
    pub fn render_config(&self) -> TemplateConfig {
        compose(
            &self.sections,
            self.layout.as_ref(),
            &default_template_config(),
            &self.theme_color,
        )
    }

    fn default_column(&self, kind: SectionKind) -> Option<Column> {
        let layout = self.layout.as_ref()?;
        if layout.main_sections.contains(&kind) {
            Some(Column::Main)
        } else if layout.sidebar_sections.contains(&kind) {
            Some(Column::Sidebar)
        } else {
            Some(Column::Main)
        }
    }

    /// Orders become the dense range `0..n`. The header sorts first
    /// so it keeps 0 whenever present.
    fn renumber(&mut self) {
        self.sections
            .sort_by_key(|s| (s.kind != SectionKind::Header, s.order));
        for (index, section) in self.sections.iter_mut().enumerate() {
            section.order = index;
        }
    }
}

impl Default for ScratchBuilder {
    fn default() -> Self {
        ScratchBuilder::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::layout_by_id;

    fn builder() -> ScratchBuilder {
        ScratchBuilder::with_id_generator(None, IdGenerator::from_parts("section", 0))
    }

    #[test]
    fn header_gets_the_fixed_id_and_order_zero() {
        let mut b = builder();
        b.add_section(SectionKind::Summary, None, None);
        let id = b.add_section(SectionKind::Header, Some("header-split"), None);
        assert_eq!(id, HEADER_SECTION_ID);
        assert_eq!(b.section(HEADER_SECTION_ID).unwrap().order, 0);
    }

    #[test]
    fn non_multiple_kinds_update_in_place() {
        let mut b = builder();
        let first = b.add_section(SectionKind::Skills, Some("skills-pills"), None);
        let second = b.add_section(SectionKind::Skills, Some("skills-grouped"), None);
        assert_eq!(first, second);
        assert_eq!(b.sections().len(), 1);
        assert_eq!(
            b.section(&first).unwrap().variant_id.as_deref(),
            Some("skills-grouped")
        );
    }

    #[test]
    fn custom_sections_may_repeat() {
        let mut b = builder();
        let a = b.add_section(SectionKind::Custom, None, None);
        let c = b.add_section(SectionKind::Custom, None, None);
        assert_ne!(a, c);
        assert_eq!(b.sections().len(), 2);
    }

    #[test]
    fn removal_renumbers_densely() {
        let mut b = builder();
        b.add_section(SectionKind::Header, None, None);
        let summary = b.add_section(SectionKind::Summary, None, None);
        b.add_section(SectionKind::Experience, None, None);
        b.add_section(SectionKind::Skills, None, None);

        b.remove_section(&summary);

        let orders: Vec<usize> = b.sections().iter().map(|s| s.order).collect();
        let mut sorted = orders.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2]);
        assert_eq!(b.section(HEADER_SECTION_ID).unwrap().order, 0);
    }

    #[test]
    fn removing_an_unknown_id_changes_nothing() {
        let mut b = builder();
        b.add_section(SectionKind::Summary, None, None);
        let before = b.sections().to_vec();
        b.remove_section("ghost");
        assert_eq!(b.sections(), &before[..]);
    }

    #[test]
    fn reorder_follows_the_given_sequence() {
        let mut b = builder();
        let summary = b.add_section(SectionKind::Summary, None, None);
        let experience = b.add_section(SectionKind::Experience, None, None);
        let skills = b.add_section(SectionKind::Skills, None, None);

        b.reorder(&[skills.clone(), summary.clone(), experience.clone()]);

        assert_eq!(b.section(&skills).unwrap().order, 0);
        assert_eq!(b.section(&summary).unwrap().order, 1);
        assert_eq!(b.section(&experience).unwrap().order, 2);
    }

    #[test]
    fn column_defaults_from_the_layout() {
        let layout = layout_by_id("sidebar-left").unwrap();
        let mut b = ScratchBuilder::with_id_generator(
            Some(layout),
            IdGenerator::from_parts("section", 0),
        );
        let skills = b.add_section(SectionKind::Skills, None, None);
        let experience = b.add_section(SectionKind::Experience, None, None);
        let patents = b.add_section(SectionKind::Patents, None, None);

        assert_eq!(b.section(&skills).unwrap().column, Some(Column::Sidebar));
        assert_eq!(b.section(&experience).unwrap().column, Some(Column::Main));
        assert_eq!(b.section(&patents).unwrap().column, Some(Column::Main));
    }
}
