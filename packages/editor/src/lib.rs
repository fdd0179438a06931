//! # Resumecraft Editor
//!
//! Path-addressed mutation engine for the shared resume document.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ path: "experience[2].bulletPoints[0]"       │
//! │  → [Field, Index, Field, Index] steps       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ accessor: pure read/write over the steps    │
//! │  - read probes, returns NotFound as None    │
//! │  - write rebuilds the spine, shares the rest│
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ mutations: semantic collection operations   │
//! │  - append/remove entries, bullet points     │
//! │  - stale ids degrade to traced no-ops       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ document: handle + versioned persistence    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **The document is a value**: every applied mutation yields a new
//!    `ResumeDocument`; consumers observe either the old version or
//!    the new one, never a torn intermediate.
//! 2. **String paths at the boundary, typed walker inside**: templates
//!    address fields with interpolated path strings; the accessor
//!    resolves them against the static document shape, so a typo is a
//!    loud `PathNotWritable` instead of a silent write into nowhere.
//! 3. **Stale events are harmless**: removals racing an earlier
//!    removal, or callbacks firing with an id that no longer exists,
//!    return the document unchanged.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use resumecraft_editor::{Document, Mutation};
//!
//! let mut doc = Document::new("scratch-v2");
//!
//! doc.apply(Mutation::AppendItem {
//!     collection: "experience".to_string(),
//!     item: serde_json::json!({ "id": "e1", "company": "Acme" }),
//! })?;
//!
//! doc.apply(Mutation::SetValue {
//!     path: "experience[0].position".to_string(),
//!     value: serde_json::json!("Engineer"),
//! })?;
//! ```

pub mod accessor;
mod document;
mod errors;
mod mutations;
pub mod path;

pub use accessor::AccessError;
pub use document::{Document, DocumentStorage, MutationResult};
pub use errors::EditorError;
pub use mutations::{Mutation, MutationError};
pub use path::{parse_path, PathError, PathStep};

// Re-export the model for convenience
pub use resumecraft_document::ResumeDocument;
