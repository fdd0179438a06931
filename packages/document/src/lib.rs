//! # Resumecraft Document
//!
//! The shared resume document model that the editor and composer
//! agree on.
//!
//! A [`ResumeDocument`] is a plain serde tree: a flat record of
//! personal scalars plus four id-keyed entry collections (experience,
//! education, skills, custom sections) and an optional list of
//! dynamic sections. Entry collections hold `Arc`s so that producing
//! the next document version copies only the entries a mutation
//! actually touched; everything else shares its allocation with the
//! predecessor.
//!
//! The serialized form is camelCase JSON (`personalInfo.fullName`,
//! `experience[0].bulletPoints`, ...), matching the flat store the
//! host application persists documents into.

pub mod id_generator;
pub mod model;

pub use id_generator::IdGenerator;
pub use model::{
    CustomItem, CustomSection, DynamicSection, EducationEntry, ExperienceEntry, PersonalInfo,
    ResumeDocument, SkillEntry,
};
