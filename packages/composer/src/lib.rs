//! # Resumecraft Composer
//!
//! Declarative section/variant composition for the scratch builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ registry: section type catalog (static)     │
//! │ variants: visual presets + canned previews  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ scratch: user-ordered section descriptors   │
//! │ applier: seed preview content into the doc  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compose: base defaults + layout + theme     │
//! │  → one merged render configuration          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The composed [`TemplateConfig`] is derived and ephemeral: it is
//! recomputed from scratch on every section or layout change and is
//! never the source of truth (the section list is).

pub mod applier;
pub mod compose;
pub mod config;
pub mod layouts;
pub mod registry;
pub mod scratch;
pub mod variants;

pub use applier::apply_variant;
pub use compose::compose;
pub use config::{
    default_template_config, ColorConfig, HeaderConfig, LayoutConfig, LayoutStyle, SectionConfig,
    SpacingConfig, TemplateConfig,
};
pub use layouts::{layout_by_id, scratch_layouts, LayoutDefaults, ScratchLayout};
pub use registry::{section_definition, SectionDefinition, SectionKind, SECTION_REGISTRY};
pub use scratch::{Column, ScratchBuilder, ScratchSection, SectionUpdate};
pub use variants::{
    find_variant, section_variants, PreviewContent, PreviewData, PreviewEducation,
    PreviewExperience, SectionVariant, SkillGroup,
};
