//! Sequences of mutations as the UI dispatches them: ordering,
//! non-interference, and persistence round trips.

use anyhow::Result;
use resumecraft_editor::{Document, EditorError, Mutation};
use serde_json::json;

fn set(path: &str, value: serde_json::Value) -> Mutation {
    Mutation::SetValue {
        path: path.to_string(),
        value,
    }
}

#[test]
fn disjoint_writes_commute() -> Result<()> {
    let mut doc = Document::new("scratch-v2");
    doc.apply(Mutation::AppendItem {
        collection: "experience".to_string(),
        item: json!({ "id": "e1" }),
    })?;
    let base = doc.data().clone();

    let a = set("personalInfo.summary", json!("hello"));
    let b = set("experience[0].company", json!("Acme"));

    let ab = b.apply(&a.apply(&base)?)?;
    let ba = a.apply(&b.apply(&base)?)?;

    assert_eq!(ab, ba);
    Ok(())
}

#[test]
fn same_path_last_write_wins() -> Result<()> {
    let mut doc = Document::new("scratch-v2");
    doc.apply(set("personalInfo.title", json!("Analyst")))?;
    doc.apply(set("personalInfo.title", json!("Senior Analyst")))?;

    assert_eq!(doc.data().personal_info.title, "Senior Analyst");
    assert_eq!(doc.version, 2);
    Ok(())
}

#[test]
fn an_editing_session_end_to_end() -> Result<()> {
    let mut doc = Document::new("scratch-v2");

    doc.apply(Mutation::AppendItem {
        collection: "experience".to_string(),
        item: json!({ "id": "e1", "company": "Acme", "bulletPoints": ["Did X"] }),
    })?;
    doc.apply(Mutation::AppendBulletPoint {
        entry_id: "e1".to_string(),
    })?;
    doc.apply(set("experience[0].bulletPoints[1]", json!("Did Y")))?;
    doc.apply(set("experience[0].current", json!(true)))?;
    doc.apply(Mutation::AppendItem {
        collection: "skills".to_string(),
        item: json!({ "id": "s1", "name": "Rust", "level": 9 }),
    })?;

    let data = doc.data();
    assert_eq!(data.experience[0].bullet_points, vec!["Did X", "Did Y"]);
    assert!(data.experience[0].current);
    assert_eq!(data.skills[0].level, Some(9));
    assert_eq!(doc.version, 5);
    Ok(())
}

#[test]
fn stale_events_leave_the_session_intact() -> Result<()> {
    let mut doc = Document::new("scratch-v2");
    doc.apply(Mutation::AppendItem {
        collection: "experience".to_string(),
        item: json!({ "id": "e1", "bulletPoints": ["a", "b"] }),
    })?;

    // Entry removed; late-firing callbacks keyed to it are no-ops.
    doc.apply(Mutation::RemoveItemAt {
        collection: "experience".to_string(),
        index: 0,
    })?;
    doc.apply(Mutation::AppendBulletPoint {
        entry_id: "e1".to_string(),
    })?;
    doc.apply(Mutation::RemoveItemAt {
        collection: "experience".to_string(),
        index: 0,
    })?;

    assert!(doc.data().experience.is_empty());
    Ok(())
}

#[test]
fn save_and_reload_round_trips() -> Result<()> {
    let dir = std::env::temp_dir().join("resumecraft-editor-tests");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("resume-data-scratch-v2.json");

    let seed = serde_json::to_string_pretty(&resumecraft_editor::ResumeDocument::new())?;
    std::fs::write(&path, seed)?;

    let mut doc = Document::load("scratch-v2", path.clone())?;
    doc.apply(Mutation::AppendItem {
        collection: "education".to_string(),
        item: json!({ "id": "ed1", "school": "MIT", "degree": "BSc" }),
    })?;
    assert!(doc.is_dirty());
    doc.save()?;
    assert!(!doc.is_dirty());

    let reloaded = Document::load("scratch-v2", path)?;
    assert_eq!(reloaded.data().education[0].school, "MIT");
    Ok(())
}

#[test]
fn loading_sanitizes_legacy_descriptions() -> Result<()> {
    let dir = std::env::temp_dir().join("resumecraft-editor-tests");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("resume-data-legacy.json");

    std::fs::write(
        &path,
        json!({
            "personalInfo": {},
            "experience": [{
                "id": "e1",
                "company": "Acme",
                "description": "Built A\nMaintained B"
            }]
        })
        .to_string(),
    )?;

    let doc = Document::load("legacy", path)?;
    assert_eq!(
        doc.data().experience[0].bullet_points,
        vec!["Built A", "Maintained B"]
    );
    assert!(doc.data().experience[0].description.is_empty());
    Ok(())
}

#[test]
fn defects_surface_but_do_not_poison() {
    let mut doc = Document::new("scratch-v2");
    doc.apply(set("personalInfo.summary", json!("good"))).unwrap();

    let result = doc.apply(set("experience.summary", json!("bad")));
    assert!(matches!(result, Err(EditorError::Mutation(_))));
    assert_eq!(doc.data().personal_info.summary, "good");
}
