//! # Document Mutations
//!
//! Semantic operations on the resume document, applied purely: every
//! successful application yields a new `ResumeDocument` and leaves the
//! input untouched.
//!
//! ## Mutation semantics
//!
//! ### SetValue
//! - Path-addressed leaf/subtree replacement (atomic, last write wins)
//! - Malformed paths and spine type mismatches are defects and fail
//!
//! ### AppendItem
//! - Appends to one of the four entry collections
//! - The caller supplies the item's fresh unique id; the editor never
//!   generates ids (keeps application deterministic and testable)
//!
//! ### RemoveItemAt
//! - Out-of-bounds index is a no-op: removals racing an earlier
//!   removal are expected and harmless
//!
//! ### AppendBulletPoint / RemoveBulletPoint
//! - Keyed by the experience entry's stable id, resolved to an index
//!   immediately before mutating (indexes shift, ids do not)
//! - Unknown id is a traced no-op (stale UI event)
//! - Removal refuses to drop the last remaining bullet: an entry with
//!   active bullet editing always keeps at least one editable line

use resumecraft_document::{
    CustomSection, EducationEntry, ExperienceEntry, ResumeDocument, SkillEntry,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::accessor::{self, AccessError};
use crate::path::{parse_path, PathError, PathStep};

/// Semantic mutations over the resume document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Replace the value at a path (text edits from templates).
    SetValue { path: String, value: Value },

    /// Append an item to a collection field; the item carries its own
    /// fresh id.
    AppendItem { collection: String, item: Value },

    /// Remove the element at an index of a collection field.
    RemoveItemAt { collection: String, index: usize },

    /// Append an empty bullet to the experience entry with this id.
    AppendBulletPoint { entry_id: String },

    /// Remove one bullet of the experience entry with this id.
    RemoveBulletPoint { entry_id: String, bullet_index: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("`{0}` is not a collection field")]
    NotACollection(String),

    #[error("Invalid item for `{collection}`: {reason}")]
    InvalidItem { collection: String, reason: String },
}

/// The four array-valued document fields the collection operations
/// may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collection {
    Experience,
    Education,
    Skills,
    Sections,
}

fn resolve_collection(path: &str) -> Result<Collection, MutationError> {
    let steps = parse_path(path)?;
    match steps.as_slice() {
        [PathStep::Field(name)] => match name.as_str() {
            "experience" => Ok(Collection::Experience),
            "education" => Ok(Collection::Education),
            "skills" => Ok(Collection::Skills),
            "sections" => Ok(Collection::Sections),
            _ => Err(MutationError::NotACollection(path.to_string())),
        },
        _ => Err(MutationError::NotACollection(path.to_string())),
    }
}

fn append_entry<T>(entries: &mut Vec<Arc<T>>, collection: &str, item: Value) -> Result<(), MutationError>
where
    T: serde::de::DeserializeOwned,
{
    let entry: T = serde_json::from_value(item).map_err(|e| MutationError::InvalidItem {
        collection: collection.to_string(),
        reason: e.to_string(),
    })?;
    entries.push(Arc::new(entry));
    Ok(())
}

fn remove_entry_at<T>(entries: &mut Vec<Arc<T>>, collection: &str, index: usize) {
    if index < entries.len() {
        entries.remove(index);
    } else {
        debug!(collection, index, "stale removal, index out of bounds");
    }
}

impl Mutation {
    /// Apply to a document, producing the next document version.
    ///
    /// Not-found conditions (stale ids, out-of-bounds removals, the
    /// bullet floor) return the document unchanged; only path-syntax
    /// and path-type errors propagate as `Err`, and on `Err` the input
    /// document is the caller's last good value.
    pub fn apply(&self, doc: &ResumeDocument) -> Result<ResumeDocument, MutationError> {
        match self {
            Mutation::SetValue { path, value } => {
                let steps = parse_path(path)?;
                Ok(accessor::write(doc, &steps, value.clone())?)
            }

            Mutation::AppendItem { collection, item } => {
                let target = resolve_collection(collection)?;
                let mut next = doc.clone();
                match target {
                    Collection::Experience => {
                        append_entry::<ExperienceEntry>(&mut next.experience, collection, item.clone())?
                    }
                    Collection::Education => {
                        append_entry::<EducationEntry>(&mut next.education, collection, item.clone())?
                    }
                    Collection::Skills => {
                        append_entry::<SkillEntry>(&mut next.skills, collection, item.clone())?
                    }
                    Collection::Sections => {
                        append_entry::<CustomSection>(&mut next.sections, collection, item.clone())?
                    }
                }
                Ok(next)
            }

            Mutation::RemoveItemAt { collection, index } => {
                let target = resolve_collection(collection)?;
                let mut next = doc.clone();
                match target {
                    Collection::Experience => remove_entry_at(&mut next.experience, collection, *index),
                    Collection::Education => remove_entry_at(&mut next.education, collection, *index),
                    Collection::Skills => remove_entry_at(&mut next.skills, collection, *index),
                    Collection::Sections => remove_entry_at(&mut next.sections, collection, *index),
                }
                Ok(next)
            }

            Mutation::AppendBulletPoint { entry_id } => {
                let mut next = doc.clone();
                match next.experience_position(entry_id) {
                    Some(position) => {
                        let entry = Arc::make_mut(&mut next.experience[position]);
                        entry.bullet_points.push(String::new());
                    }
                    None => debug!(%entry_id, "append bullet: entry not found"),
                }
                Ok(next)
            }

            Mutation::RemoveBulletPoint {
                entry_id,
                bullet_index,
            } => {
                let mut next = doc.clone();
                match next.experience_position(entry_id) {
                    Some(position) => {
                        let bullets = &next.experience[position].bullet_points;
                        if bullets.len() <= 1 {
                            debug!(%entry_id, "refusing to remove the last bullet point");
                        } else if *bullet_index >= bullets.len() {
                            debug!(%entry_id, bullet_index, "stale bullet removal, out of bounds");
                        } else {
                            let entry = Arc::make_mut(&mut next.experience[position]);
                            entry.bullet_points.remove(*bullet_index);
                        }
                    }
                    None => debug!(%entry_id, "remove bullet: entry not found"),
                }
                Ok(next)
            }
        }
    }

    /// Validate syntax and targets without applying. Stale ids are
    /// deliberately not validation failures (they are runtime no-ops).
    pub fn validate(&self) -> Result<(), MutationError> {
        match self {
            Mutation::SetValue { path, .. } => {
                parse_path(path)?;
                Ok(())
            }
            Mutation::AppendItem { collection, .. }
            | Mutation::RemoveItemAt { collection, .. } => {
                resolve_collection(collection)?;
                Ok(())
            }
            Mutation::AppendBulletPoint { .. } | Mutation::RemoveBulletPoint { .. } => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mutation_serialization_round_trips() {
        let mutation = Mutation::SetValue {
            path: "personalInfo.summary".to_string(),
            value: json!("Hello"),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn validate_rejects_bad_paths_and_collections() {
        let bad_path = Mutation::SetValue {
            path: "experience[".to_string(),
            value: json!(""),
        };
        assert!(bad_path.validate().is_err());

        let bad_collection = Mutation::AppendItem {
            collection: "personalInfo".to_string(),
            item: json!({}),
        };
        assert!(matches!(
            bad_collection.validate(),
            Err(MutationError::NotACollection(_))
        ));
    }

    #[test]
    fn append_item_rejects_shape_mismatch() {
        let doc = ResumeDocument::new();
        let mutation = Mutation::AppendItem {
            collection: "experience".to_string(),
            item: json!({ "id": "e1", "current": "not-a-bool" }),
        };

        assert!(matches!(
            mutation.apply(&doc),
            Err(MutationError::InvalidItem { .. })
        ));
    }

    #[test]
    fn remove_item_out_of_bounds_is_a_noop() {
        let doc = ResumeDocument::new();
        let mutation = Mutation::RemoveItemAt {
            collection: "skills".to_string(),
            index: 7,
        };

        let next = mutation.apply(&doc).unwrap();
        assert_eq!(next, doc);
    }

    #[test]
    fn bullet_ops_ignore_unknown_entries() {
        let doc = ResumeDocument::new();

        let next = Mutation::AppendBulletPoint {
            entry_id: "ghost".to_string(),
        }
        .apply(&doc)
        .unwrap();
        assert_eq!(next, doc);

        let next = Mutation::RemoveBulletPoint {
            entry_id: "ghost".to_string(),
            bullet_index: 0,
        }
        .apply(&doc)
        .unwrap();
        assert_eq!(next, doc);
    }
}
