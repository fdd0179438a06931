//! Comprehensive mutation tests

use resumecraft_editor::{accessor, parse_path, Document, Mutation, ResumeDocument};
use serde_json::json;
use std::sync::Arc;

fn acme_entry() -> serde_json::Value {
    json!({
        "id": "e1",
        "company": "Acme",
        "bulletPoints": ["Did X"]
    })
}

#[test]
fn append_item_then_bullet_point() {
    let mut doc = Document::new("scratch-v2");

    doc.apply(Mutation::AppendItem {
        collection: "experience".to_string(),
        item: acme_entry(),
    })
    .unwrap();

    doc.apply(Mutation::AppendBulletPoint {
        entry_id: "e1".to_string(),
    })
    .unwrap();

    assert_eq!(
        doc.data().experience[0].bullet_points,
        vec!["Did X".to_string(), String::new()]
    );
}

#[test]
fn remove_bullet_point_respects_the_floor() {
    let mut doc = Document::new("scratch-v2");
    doc.apply(Mutation::AppendItem {
        collection: "experience".to_string(),
        item: json!({ "id": "e1", "company": "Acme", "bulletPoints": ["Did X", ""] }),
    })
    .unwrap();

    // First removal works: two bullets, floor not hit.
    doc.apply(Mutation::RemoveBulletPoint {
        entry_id: "e1".to_string(),
        bullet_index: 0,
    })
    .unwrap();
    assert_eq!(doc.data().experience[0].bullet_points, vec![String::new()]);

    // Second removal is refused: the last bullet stays.
    doc.apply(Mutation::RemoveBulletPoint {
        entry_id: "e1".to_string(),
        bullet_index: 0,
    })
    .unwrap();
    assert_eq!(doc.data().experience[0].bullet_points, vec![String::new()]);
}

#[test]
fn writes_do_not_disturb_sibling_fields() {
    let mut doc = Document::new("scratch-v2");
    doc.apply(Mutation::AppendItem {
        collection: "experience".to_string(),
        item: acme_entry(),
    })
    .unwrap();

    doc.apply(Mutation::SetValue {
        path: "experience[0].position".to_string(),
        value: json!("Engineer"),
    })
    .unwrap();

    let company = accessor::read(doc.data(), &parse_path("experience[0].company").unwrap());
    assert_eq!(company, Some(json!("Acme")));
}

#[test]
fn read_write_round_trip_over_the_path_vocabulary() {
    let mut doc = Document::new("scratch-v2");
    doc.apply(Mutation::AppendItem {
        collection: "experience".to_string(),
        item: acme_entry(),
    })
    .unwrap();
    doc.apply(Mutation::AppendItem {
        collection: "education".to_string(),
        item: json!({ "id": "ed1", "school": "MIT" }),
    })
    .unwrap();
    doc.apply(Mutation::AppendItem {
        collection: "skills".to_string(),
        item: json!({ "id": "s1", "name": "Rust" }),
    })
    .unwrap();
    doc.apply(Mutation::AppendItem {
        collection: "sections".to_string(),
        item: json!({ "id": "c1", "title": "Links", "content": "", "items": ["a", {"text": "b"}] }),
    })
    .unwrap();

    let cases = [
        ("personalInfo.summary", json!("Seasoned engineer")),
        ("personalInfo.fullName", json!("Sarah Johnson")),
        ("experience[0].bulletPoints[0]", json!("Shipped Y")),
        ("experience[0].current", json!(true)),
        ("education[0].gpa", json!("3.9")),
        ("skills[0].level", json!(8)),
        ("sections[0].content", json!("see links")),
        ("sections[0].items[1]", json!({ "text": "rewritten" })),
    ];

    for (path, value) in cases {
        doc.apply(Mutation::SetValue {
            path: path.to_string(),
            value: value.clone(),
        })
        .unwrap();
        let steps = parse_path(path).unwrap();
        assert_eq!(
            accessor::read(doc.data(), &steps),
            Some(value),
            "round trip failed for {path}"
        );
    }
}

#[test]
fn structural_sharing_off_the_spine() {
    let mut handle = Document::new("scratch-v2");
    for id in ["e1", "e2", "e3"] {
        handle
            .apply(Mutation::AppendItem {
                collection: "experience".to_string(),
                item: json!({ "id": id, "bulletPoints": ["x"] }),
            })
            .unwrap();
    }
    let before = handle.data().clone();

    handle
        .apply(Mutation::SetValue {
            path: "experience[1].company".to_string(),
            value: json!("Initech"),
        })
        .unwrap();
    let after = handle.data();

    assert!(Arc::ptr_eq(&before.experience[0], &after.experience[0]));
    assert!(Arc::ptr_eq(&before.experience[2], &after.experience[2]));
    assert!(!Arc::ptr_eq(&before.experience[1], &after.experience[1]));
}

#[test]
fn removal_preserves_ids_and_density() {
    let mut doc = ResumeDocument::new();
    for id in ["e1", "e2", "e3"] {
        doc = Mutation::AppendItem {
            collection: "experience".to_string(),
            item: json!({ "id": id }),
        }
        .apply(&doc)
        .unwrap();
    }

    let next = Mutation::RemoveItemAt {
        collection: "experience".to_string(),
        index: 1,
    }
    .apply(&doc)
    .unwrap();

    let ids: Vec<&str> = next.experience.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["e1", "e3"]);
    assert_eq!(next.experience.len(), doc.experience.len() - 1);
}

#[test]
fn bullet_removal_keyed_by_id_survives_reordering() {
    // A UI callback captured "e2" before an earlier removal shifted
    // the array; the id still resolves to the right entry.
    let mut doc = ResumeDocument::new();
    for (id, bullets) in [("e1", vec!["a"]), ("e2", vec!["b", "c"])] {
        doc = Mutation::AppendItem {
            collection: "experience".to_string(),
            item: json!({ "id": id, "bulletPoints": bullets }),
        }
        .apply(&doc)
        .unwrap();
    }

    doc = Mutation::RemoveItemAt {
        collection: "experience".to_string(),
        index: 0,
    }
    .apply(&doc)
    .unwrap();

    doc = Mutation::RemoveBulletPoint {
        entry_id: "e2".to_string(),
        bullet_index: 0,
    }
    .apply(&doc)
    .unwrap();

    assert_eq!(doc.experience[0].bullet_points, vec!["c".to_string()]);
}
