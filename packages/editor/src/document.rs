//! # Document Handle
//!
//! Holds the current resume document value, applies mutations, and
//! talks to the flat persistence store.
//!
//! Documents can be:
//! - **Memory-backed**: temporary, for tests or unsaved drafts
//! - **File-backed**: one JSON file per template identifier
//!
//! The handle owns the single current-document reference: each
//! applied mutation swaps in the next document value atomically and
//! bumps the version counter, so a consumer holding the previous
//! value still sees a fully consistent document. A failed mutation
//! leaves the stored value and version untouched: the caller keeps
//! the last good document.

use resumecraft_document::ResumeDocument;
use std::path::PathBuf;

use crate::{EditorError, Mutation};

/// Editable resume document with versioned state.
#[derive(Debug)]
pub struct Document {
    /// Template identifier this document is stored under.
    pub template_id: String,

    /// Current version number (increments on each applied mutation)
    pub version: u64,

    /// Backing storage strategy
    storage: DocumentStorage,
}

/// Storage backend for a document
#[derive(Debug)]
pub enum DocumentStorage {
    /// In-memory only (tests, unsaved drafts)
    Memory { data: ResumeDocument },

    /// File-backed JSON, keyed by template id
    File {
        path: PathBuf,
        data: ResumeDocument,
        dirty: bool,
    },
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResult {
    /// New version number
    pub version: u64,
}

impl Document {
    /// Create an empty memory-backed document.
    pub fn new(template_id: impl Into<String>) -> Self {
        Self::from_data(template_id, ResumeDocument::new())
    }

    /// Wrap an existing document value (memory-backed).
    pub fn from_data(template_id: impl Into<String>, data: ResumeDocument) -> Self {
        Self {
            template_id: template_id.into(),
            version: 0,
            storage: DocumentStorage::Memory { data },
        }
    }

    /// Load a document from its JSON file (file-backed). The loaded
    /// value is sanitized, so legacy description-only experience
    /// entries arrive with bullet points populated.
    pub fn load(template_id: impl Into<String>, path: PathBuf) -> Result<Self, EditorError> {
        let source = std::fs::read_to_string(&path)?;
        let data: ResumeDocument = serde_json::from_str(&source)?;

        Ok(Self {
            template_id: template_id.into(),
            version: 0,
            storage: DocumentStorage::File {
                path,
                data: data.sanitize(),
                dirty: false,
            },
        })
    }

    /// The current document value.
    pub fn data(&self) -> &ResumeDocument {
        match &self.storage {
            DocumentStorage::Memory { data } => data,
            DocumentStorage::File { data, .. } => data,
        }
    }

    /// Apply a mutation, swapping in the next document version.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let next = mutation.apply(self.data())?;

        self.version += 1;
        match &mut self.storage {
            DocumentStorage::Memory { data } => *data = next,
            DocumentStorage::File { data, dirty, .. } => {
                *data = next;
                *dirty = true;
            }
        }

        Ok(MutationResult {
            version: self.version,
        })
    }

    /// Check for unsaved changes.
    pub fn is_dirty(&self) -> bool {
        match &self.storage {
            DocumentStorage::File { dirty, .. } => *dirty,
            DocumentStorage::Memory { .. } => false,
        }
    }

    /// Save to disk (if file-backed).
    pub fn save(&mut self) -> Result<(), EditorError> {
        match &mut self.storage {
            DocumentStorage::File { path, data, dirty } => {
                let json = serde_json::to_string_pretty(data)?;
                std::fs::write(path, json)?;
                *dirty = false;
                Ok(())
            }
            DocumentStorage::Memory { .. } => Err(EditorError::NotFileBacked),
        }
    }
}
