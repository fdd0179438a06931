//! Error types for the editor

use thiserror::Error;

use crate::accessor::AccessError;
use crate::mutations::MutationError;
use crate::path::PathError;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    #[error("Access error: {0}")]
    Access(#[from] AccessError),

    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Document is not file-backed")]
    NotFileBacked,
}
