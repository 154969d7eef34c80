//! Integration tests for the content store

use folio_content::{ContentError, ContentStore, Document, LoadProblem, Section, Shape};
use folio_timeline::{TimelineConfig, TimelineLayout};
use std::fs;
use tempfile::TempDir;

/// Helper to create a content root with the given documents
fn content_root(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, body) in files {
        fs::write(dir.path().join(name), body).unwrap();
    }
    dir
}

const FULL: &[(&str, &str)] = &[
    ("info.json", r#"{"name": "Ada", "title": {"en": "Engineer"}}"#),
    (
        "experience.json",
        r#"[{"title": "Engineer", "start": "2024-01-15", "end": "2024-08-20"}]"#,
    ),
    (
        "projects.json",
        r#"[{"title": "Planner", "start": "2024-03", "end": "2024-05", "order_index": 2}]"#,
    ),
    ("competitions.json", r#"[{"name": "Hackathon", "start": "2024-04-12"}]"#),
    ("certificates.json", r#"[{"name": "Cloud", "issued_at": "2024-02-10"}]"#),
    ("courses.json", r#"[{"name": "Algorithms", "date": "2024-06"}]"#),
    ("stack.json", r#"[{"name": "Rust"}]"#),
    ("socials.json", r#"[{"url": "https://example.com"}]"#),
    ("order.json", r#"["timeline", "projects"]"#),
];

#[tokio::test]
async fn test_load_full_root() {
    let dir = content_root(FULL);
    let content = ContentStore::open(dir.path()).unwrap().load().await.unwrap();

    assert!(content.is_complete());
    assert_eq!(content.info.as_ref().unwrap()["name"], "Ada");
    assert_eq!(content.experience.len(), 1);
    assert_eq!(content.stack.len(), 1);
    assert_eq!(content.socials.len(), 1);
    assert_eq!(content.section_order(), vec![Section::Timeline, Section::Projects]);
}

#[tokio::test]
async fn test_missing_documents_fall_back() {
    let dir = content_root(&[(
        "projects.json",
        r#"[{"title": "Solo", "start": "2024-02-01", "end": "2024-03-01"}]"#,
    )]);
    let content = ContentStore::open(dir.path()).unwrap().load().await.unwrap();

    assert_eq!(content.projects.len(), 1);
    assert!(content.info.is_none());
    assert!(content.order.is_none());
    assert!(content.experience.is_empty());
    assert_eq!(content.issues.len(), Document::ALL.len() - 1);
    assert_eq!(
        content.issue(Document::Info).map(|i| &i.problem),
        Some(&LoadProblem::Missing)
    );
    assert!(content.issue(Document::Projects).is_none());
}

#[tokio::test]
async fn test_corrupt_document_leaves_others_loaded() {
    let mut files: Vec<(&str, &str)> = FULL.to_vec();
    files.retain(|(name, _)| *name != "experience.json" && *name != "info.json");
    files.push(("experience.json", "[{ not json"));
    files.push(("info.json", "[]"));
    let dir = content_root(&files);

    let content = ContentStore::open(dir.path()).unwrap().load().await.unwrap();

    assert!(content.experience.is_empty());
    assert!(matches!(
        content.issue(Document::Experience).map(|i| &i.problem),
        Some(LoadProblem::InvalidJson(_))
    ));
    assert_eq!(
        content.issue(Document::Info).map(|i| &i.problem),
        Some(&LoadProblem::WrongShape(Shape::Object))
    );
    assert_eq!(content.projects.len(), 1);
    assert_eq!(content.certificates.len(), 1);
    assert_eq!(content.issues.len(), 2);
}

#[tokio::test]
async fn test_issues_reported_in_document_order() {
    let dir = content_root(&[]);
    let content = ContentStore::open(dir.path()).unwrap().load().await.unwrap();
    let documents: Vec<Document> = content.issues.iter().map(|i| i.document).collect();
    assert_eq!(documents, Document::ALL.to_vec());
}

#[tokio::test]
async fn test_root_removed_after_open() {
    let dir = content_root(FULL);
    let store = ContentStore::open(dir.path()).unwrap();
    drop(dir);
    let err = store.load().await.unwrap_err();
    assert!(matches!(err, ContentError::RootNotFound(_)));
}

#[test]
fn test_open_rejects_file_root() {
    let dir = content_root(&[("info.json", "{}")]);
    let err = ContentStore::open(dir.path().join("info.json")).unwrap_err();
    assert!(matches!(err, ContentError::RootNotFound(_)));
}

#[tokio::test]
async fn test_content_feeds_layout() {
    let dir = content_root(FULL);
    let content = ContentStore::open(dir.path()).unwrap().load().await.unwrap();
    let layout = TimelineLayout::compute(
        &content.timeline_sources(),
        1_718_409_600,
        &TimelineConfig::default(),
    )
    .unwrap();

    // experience, competition, project, certificate, course
    assert_eq!(layout.events.len(), 5);
    assert_eq!(layout.points.len(), 3);
}
