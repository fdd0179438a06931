//! Pure read/write access to a document through parsed path steps.
//!
//! `read` follows `Field` steps into map lookups and `Index` steps
//! into sequence positions, returning `None` instead of failing when
//! something along the way is absent: templates probe optional paths
//! (an `education[0].gpa` that was never set) all the time.
//!
//! `write` rebuilds only the spine of the path: the document is
//! cloned (entry collections are `Arc`-backed, so that clone is
//! shallow) and exactly the entries on the written path are copied
//! via `Arc::make_mut`. A type mismatch along the spine is a
//! programmer error in the calling template, surfaced loudly as
//! [`AccessError::PathNotWritable`]; it never produces a partially
//! written document.

use resumecraft_document::{
    CustomItem, CustomSection, EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument,
    SkillEntry,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::path::{display_path, PathStep};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccessError {
    #[error("Path `{path}` is not writable: {reason}")]
    PathNotWritable { path: String, reason: String },
}

/// Read the value at `steps`, or `None` when the path does not
/// resolve (absent field, out-of-bounds index, unknown name).
pub fn read(doc: &ResumeDocument, steps: &[PathStep]) -> Option<Value> {
    match steps {
        [] => serde_json::to_value(doc).ok(),
        [PathStep::Field(field), rest @ ..] => match field.as_str() {
            "personalInfo" => read_personal_info(&doc.personal_info, rest),
            "includeSocialLinks" if rest.is_empty() => Some(Value::Bool(doc.include_social_links)),
            "experience" => read_entries(&doc.experience, rest, read_experience_field),
            "education" => read_entries(&doc.education, rest, read_education_field),
            "skills" => read_entries(&doc.skills, rest, read_skill_field),
            "sections" => read_entries(&doc.sections, rest, read_section_field),
            _ => None,
        },
        [PathStep::Index(_), ..] => None,
    }
}

/// Write `value` at `steps`, producing a new document. The input
/// document is untouched; untouched subtrees of the result share
/// structure with it.
pub fn write(
    doc: &ResumeDocument,
    steps: &[PathStep],
    value: Value,
) -> Result<ResumeDocument, AccessError> {
    let mut next = doc.clone();
    if let Err(reason) = write_root(&mut next, steps, value) {
        let error = AccessError::PathNotWritable {
            path: display_path(steps),
            reason,
        };
        warn!(%error, "rejected document write");
        return Err(error);
    }
    Ok(next)
}

fn write_root(doc: &mut ResumeDocument, steps: &[PathStep], value: Value) -> Result<(), String> {
    match steps {
        [] => Err("the document root cannot be replaced through a path".to_string()),
        [PathStep::Field(field), rest @ ..] => match field.as_str() {
            "personalInfo" => write_personal_info(&mut doc.personal_info, rest, value),
            "includeSocialLinks" => match rest {
                [] => {
                    doc.include_social_links = expect_bool(value)?;
                    Ok(())
                }
                _ => Err("includeSocialLinks is a scalar".to_string()),
            },
            "experience" => write_entries(&mut doc.experience, rest, value, write_experience_field),
            "education" => write_entries(&mut doc.education, rest, value, write_education_field),
            "skills" => write_entries(&mut doc.skills, rest, value, write_skill_field),
            "sections" => write_entries(&mut doc.sections, rest, value, write_section_field),
            other => Err(format!("unknown document field `{other}`")),
        },
        [PathStep::Index(_), ..] => Err("the document root is not a sequence".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Sequences

fn read_entries<T, F>(entries: &[Arc<T>], steps: &[PathStep], read_field: F) -> Option<Value>
where
    T: Serialize,
    F: Fn(&T, &[PathStep]) -> Option<Value>,
{
    match steps {
        [] => serde_json::to_value(entries).ok(),
        [PathStep::Index(index), rest @ ..] => {
            entries.get(*index).and_then(|entry| read_field(entry, rest))
        }
        [PathStep::Field(_), ..] => None,
    }
}

fn write_entries<T, F>(
    entries: &mut Vec<Arc<T>>,
    steps: &[PathStep],
    value: Value,
    write_field: F,
) -> Result<(), String>
where
    T: Clone + Serialize + DeserializeOwned,
    F: Fn(&mut T, &[PathStep], Value) -> Result<(), String>,
{
    match steps {
        [] => {
            let replaced: Vec<T> = serde_json::from_value(value)
                .map_err(|e| format!("expected a sequence of entries: {e}"))?;
            *entries = replaced.into_iter().map(Arc::new).collect();
            Ok(())
        }
        [PathStep::Index(index), rest @ ..] => {
            let len = entries.len();
            match entries.get_mut(*index) {
                Some(entry) => write_field(Arc::make_mut(entry), rest, value),
                None => Err(format!("index {index} is out of bounds (len {len})")),
            }
        }
        [PathStep::Field(field), ..] => {
            Err(format!("expected an index into a sequence, found field `{field}`"))
        }
    }
}

// ---------------------------------------------------------------------------
// Personal info

fn personal_slot<'a>(info: &'a mut PersonalInfo, field: &str) -> Option<&'a mut String> {
    match field {
        "fullName" => Some(&mut info.full_name),
        "title" => Some(&mut info.title),
        "email" => Some(&mut info.email),
        "phone" => Some(&mut info.phone),
        "location" => Some(&mut info.location),
        "summary" => Some(&mut info.summary),
        "photo" => Some(&mut info.photo),
        "linkedin" => Some(&mut info.linkedin),
        "github" => Some(&mut info.github),
        "portfolio" => Some(&mut info.portfolio),
        _ => None,
    }
}

fn read_personal_info(info: &PersonalInfo, steps: &[PathStep]) -> Option<Value> {
    match steps {
        [] => serde_json::to_value(info).ok(),
        [PathStep::Field(field)] => {
            let value = match field.as_str() {
                "fullName" => &info.full_name,
                "title" => &info.title,
                "email" => &info.email,
                "phone" => &info.phone,
                "location" => &info.location,
                "summary" => &info.summary,
                "photo" => &info.photo,
                "linkedin" => &info.linkedin,
                "github" => &info.github,
                "portfolio" => &info.portfolio,
                _ => return None,
            };
            Some(Value::String(value.clone()))
        }
        _ => None,
    }
}

fn write_personal_info(
    info: &mut PersonalInfo,
    steps: &[PathStep],
    value: Value,
) -> Result<(), String> {
    match steps {
        [] => {
            *info = from_entry_value(value)?;
            Ok(())
        }
        [PathStep::Field(field)] => match personal_slot(info, field) {
            Some(slot) => {
                *slot = expect_string(value)?;
                Ok(())
            }
            None => Err(format!("unknown personal field `{field}`")),
        },
        [PathStep::Field(_), ..] => Err("personal fields are scalars".to_string()),
        [PathStep::Index(_), ..] => Err("personalInfo is not a sequence".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Experience

fn read_experience_field(entry: &ExperienceEntry, steps: &[PathStep]) -> Option<Value> {
    match steps {
        [] => serde_json::to_value(entry).ok(),
        [PathStep::Field(field)] => match field.as_str() {
            "id" => Some(Value::String(entry.id.clone())),
            "company" => Some(Value::String(entry.company.clone())),
            "position" => Some(Value::String(entry.position.clone())),
            "startDate" => Some(Value::String(entry.start_date.clone())),
            "endDate" => Some(Value::String(entry.end_date.clone())),
            "current" => Some(Value::Bool(entry.current)),
            "description" => Some(Value::String(entry.description.clone())),
            "bulletPoints" => serde_json::to_value(&entry.bullet_points).ok(),
            _ => None,
        },
        [PathStep::Field(field), PathStep::Index(index)] if field == "bulletPoints" => entry
            .bullet_points
            .get(*index)
            .map(|bullet| Value::String(bullet.clone())),
        _ => None,
    }
}

fn write_experience_field(
    entry: &mut ExperienceEntry,
    steps: &[PathStep],
    value: Value,
) -> Result<(), String> {
    match steps {
        [] => {
            *entry = from_entry_value(value)?;
            Ok(())
        }
        [PathStep::Field(field)] => match field.as_str() {
            "id" => Err("entry ids are never reassigned".to_string()),
            "company" => {
                entry.company = expect_string(value)?;
                Ok(())
            }
            "position" => {
                entry.position = expect_string(value)?;
                Ok(())
            }
            "startDate" => {
                entry.start_date = expect_string(value)?;
                Ok(())
            }
            "endDate" => {
                entry.end_date = expect_string(value)?;
                Ok(())
            }
            "current" => {
                entry.current = expect_bool(value)?;
                Ok(())
            }
            "description" => {
                entry.description = expect_string(value)?;
                Ok(())
            }
            "bulletPoints" => {
                entry.bullet_points = serde_json::from_value(value)
                    .map_err(|e| format!("expected a sequence of strings: {e}"))?;
                Ok(())
            }
            other => Err(format!("unknown experience field `{other}`")),
        },
        [PathStep::Field(field), PathStep::Index(index)] if field == "bulletPoints" => {
            let len = entry.bullet_points.len();
            match entry.bullet_points.get_mut(*index) {
                Some(slot) => {
                    *slot = expect_string(value)?;
                    Ok(())
                }
                None => Err(format!("bullet index {index} is out of bounds (len {len})")),
            }
        }
        _ => Err("path does not resolve against an experience entry".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Education

fn read_education_field(entry: &EducationEntry, steps: &[PathStep]) -> Option<Value> {
    match steps {
        [] => serde_json::to_value(entry).ok(),
        [PathStep::Field(field)] => match field.as_str() {
            "id" => Some(Value::String(entry.id.clone())),
            "school" => Some(Value::String(entry.school.clone())),
            "degree" => Some(Value::String(entry.degree.clone())),
            "field" => Some(Value::String(entry.field.clone())),
            "startDate" => Some(Value::String(entry.start_date.clone())),
            "endDate" => Some(Value::String(entry.end_date.clone())),
            // Absent gpa reads as NotFound, not as null.
            "gpa" => entry.gpa.clone().map(Value::String),
            _ => None,
        },
        _ => None,
    }
}

fn write_education_field(
    entry: &mut EducationEntry,
    steps: &[PathStep],
    value: Value,
) -> Result<(), String> {
    match steps {
        [] => {
            *entry = from_entry_value(value)?;
            Ok(())
        }
        [PathStep::Field(field)] => match field.as_str() {
            "id" => Err("entry ids are never reassigned".to_string()),
            "school" => {
                entry.school = expect_string(value)?;
                Ok(())
            }
            "degree" => {
                entry.degree = expect_string(value)?;
                Ok(())
            }
            "field" => {
                entry.field = expect_string(value)?;
                Ok(())
            }
            "startDate" => {
                entry.start_date = expect_string(value)?;
                Ok(())
            }
            "endDate" => {
                entry.end_date = expect_string(value)?;
                Ok(())
            }
            "gpa" => {
                entry.gpa = expect_optional_string(value)?;
                Ok(())
            }
            other => Err(format!("unknown education field `{other}`")),
        },
        _ => Err("path does not resolve against an education entry".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Skills

fn read_skill_field(entry: &SkillEntry, steps: &[PathStep]) -> Option<Value> {
    match steps {
        [] => serde_json::to_value(entry).ok(),
        [PathStep::Field(field)] => match field.as_str() {
            "id" => Some(Value::String(entry.id.clone())),
            "name" => Some(Value::String(entry.name.clone())),
            "level" => entry.level.map(Value::from),
            "rating" => entry.rating.map(Value::from),
            "category" => entry.category.clone().map(Value::String),
            _ => None,
        },
        _ => None,
    }
}

fn write_skill_field(entry: &mut SkillEntry, steps: &[PathStep], value: Value) -> Result<(), String> {
    match steps {
        [] => {
            *entry = from_entry_value(value)?;
            Ok(())
        }
        [PathStep::Field(field)] => match field.as_str() {
            "id" => Err("entry ids are never reassigned".to_string()),
            "name" => {
                entry.name = expect_string(value)?;
                Ok(())
            }
            "level" => {
                entry.level = expect_optional_u8(value)?;
                Ok(())
            }
            "rating" => {
                entry.rating = expect_optional_u8(value)?;
                Ok(())
            }
            "category" => {
                entry.category = expect_optional_string(value)?;
                Ok(())
            }
            other => Err(format!("unknown skill field `{other}`")),
        },
        _ => Err("path does not resolve against a skill entry".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Custom sections

fn read_section_field(entry: &CustomSection, steps: &[PathStep]) -> Option<Value> {
    match steps {
        [] => serde_json::to_value(entry).ok(),
        [PathStep::Field(field)] => match field.as_str() {
            "id" => Some(Value::String(entry.id.clone())),
            "title" => Some(Value::String(entry.title.clone())),
            "content" => Some(Value::String(entry.content.clone())),
            "items" => serde_json::to_value(&entry.items).ok(),
            _ => None,
        },
        [PathStep::Field(field), PathStep::Index(index)] if field == "items" => {
            entry.items.get(*index).and_then(|item| serde_json::to_value(item).ok())
        }
        _ => None,
    }
}

fn write_section_field(
    entry: &mut CustomSection,
    steps: &[PathStep],
    value: Value,
) -> Result<(), String> {
    match steps {
        [] => {
            *entry = from_entry_value(value)?;
            Ok(())
        }
        [PathStep::Field(field)] => match field.as_str() {
            "id" => Err("entry ids are never reassigned".to_string()),
            "title" => {
                entry.title = expect_string(value)?;
                Ok(())
            }
            "content" => {
                entry.content = expect_string(value)?;
                Ok(())
            }
            "items" => {
                entry.items = serde_json::from_value(value)
                    .map_err(|e| format!("expected a sequence of items: {e}"))?;
                Ok(())
            }
            other => Err(format!("unknown section field `{other}`")),
        },
        [PathStep::Field(field), PathStep::Index(index)] if field == "items" => {
            let len = entry.items.len();
            match entry.items.get_mut(*index) {
                Some(item) => {
                    *item = from_entry_value::<CustomItem>(value)?;
                    Ok(())
                }
                None => Err(format!("item index {index} is out of bounds (len {len})")),
            }
        }
        _ => Err("path does not resolve against a custom section".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Value coercion

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a map",
    }
}

fn from_entry_value<T: DeserializeOwned>(value: Value) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| format!("value does not match the target shape: {e}"))
}

fn expect_string(value: Value) -> Result<String, String> {
    match value {
        Value::String(text) => Ok(text),
        other => Err(format!("expected a string, got {}", kind_of(&other))),
    }
}

fn expect_bool(value: Value) -> Result<bool, String> {
    match value {
        Value::Bool(flag) => Ok(flag),
        other => Err(format!("expected a boolean, got {}", kind_of(&other))),
    }
}

fn expect_optional_string(value: Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        other => Err(format!("expected a string or null, got {}", kind_of(&other))),
    }
}

fn expect_optional_u8(value: Value) -> Result<Option<u8>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => number
            .as_u64()
            .and_then(|n| u8::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| format!("number {number} does not fit a small rating")),
        other => Err(format!("expected a number or null, got {}", kind_of(&other))),
    }
}
