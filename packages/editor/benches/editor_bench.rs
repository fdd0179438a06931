use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resumecraft_editor::{accessor, parse_path, Mutation, ResumeDocument};
use serde_json::json;

fn build_document(entries: usize) -> ResumeDocument {
    let mut doc = ResumeDocument::new();
    for i in 0..entries {
        doc = Mutation::AppendItem {
            collection: "experience".to_string(),
            item: json!({
                "id": format!("e{i}"),
                "company": "Acme",
                "position": "Engineer",
                "bulletPoints": ["Did X", "Did Y", "Did Z"]
            }),
        }
        .apply(&doc)
        .unwrap();
    }
    doc
}

fn bench_parse_path(c: &mut Criterion) {
    c.bench_function("parse deep path", |b| {
        b.iter(|| parse_path(black_box("experience[12].bulletPoints[2]")).unwrap())
    });
}

fn bench_write(c: &mut Criterion) {
    let doc = build_document(20);
    let steps = parse_path("experience[10].bulletPoints[1]").unwrap();

    c.bench_function("write one bullet in 20 entries", |b| {
        b.iter(|| accessor::write(black_box(&doc), &steps, json!("updated")).unwrap())
    });
}

fn bench_bullet_append(c: &mut Criterion) {
    let doc = build_document(20);
    let mutation = Mutation::AppendBulletPoint {
        entry_id: "e19".to_string(),
    };

    c.bench_function("append bullet by id scan", |b| {
        b.iter(|| mutation.apply(black_box(&doc)).unwrap())
    });
}

criterion_group!(benches, bench_parse_path, bench_write, bench_bullet_append);
criterion_main!(benches);
