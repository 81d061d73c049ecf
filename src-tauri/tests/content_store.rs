//! End-to-end tests of the content store through the public library API:
//! load chain, CRUD, reset, import/export and change notification.

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{json, Value};

use portfolio_studio_lib::defaults::default_snapshot;
use portfolio_studio_lib::error::AppError;
use portfolio_studio_lib::models::{Certification, Project, Skill, SoftSkill};
use portfolio_studio_lib::sanitize::{sanitize_stored_data, SnapshotError};
use portfolio_studio_lib::store::{
    BootstrapSource, ContentStore, FileStorage, KeyValueStorage, LoadGuard, LoadOutcome,
    LoadPhase, MemoryStorage, DEFAULT_STORAGE_KEY,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Return a unique temporary path for each test.
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("portfolio_it_{name}_{}", uuid::Uuid::new_v4()))
}

async fn loaded(
    storage: Arc<MemoryStorage>,
    bootstrap: BootstrapSource,
) -> (ContentStore, LoadOutcome) {
    let store = ContentStore::new(storage, DEFAULT_STORAGE_KEY);
    let outcome = store
        .load(&bootstrap, &LoadGuard::new())
        .await
        .expect("load");
    (store, outcome)
}

fn persisted(storage: &MemoryStorage) -> Value {
    let text = storage
        .get(DEFAULT_STORAGE_KEY)
        .expect("get")
        .expect("entry present");
    serde_json::from_str(&text).expect("persisted entry is JSON")
}

// ── Load chain ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn bootstrap_document_becomes_live_state_and_reset_target() {
    let bootstrap_path = temp_path("bootstrap").with_extension("json");
    std::fs::write(
        &bootstrap_path,
        r#"{ "projects": [{ "id": "site", "title": "Site vitrine", "icon": "globe" }] }"#,
    )
    .expect("write bootstrap");

    let storage = Arc::new(MemoryStorage::new());
    let (store, outcome) =
        loaded(Arc::clone(&storage), BootstrapSource::File(bootstrap_path.clone())).await;
    assert_eq!(outcome, LoadOutcome::Bootstrap);
    assert_eq!(store.phase().expect("phase"), LoadPhase::Ready);
    assert_eq!(store.projects().expect("projects")[0].id, "site");

    // The adopted snapshot is persisted once right after the load.
    assert_eq!(persisted(&storage)["projects"][0]["title"], "Site vitrine");

    store.add::<Project>(&json!({ "title": "Autre" })).expect("add");
    let reset = store.reset().expect("reset");
    assert_eq!(reset.projects.len(), 1);
    assert_eq!(reset.projects[0].id, "site");
    assert_eq!(reset.skills, default_snapshot().skills);

    let _ = std::fs::remove_file(&bootstrap_path);
}

#[tokio::test]
async fn embedded_bootstrap_document_is_adopted() {
    let document = r#"{ "content": { "about": ["Texte embarqué"] } }"#.as_bytes().to_vec();
    let storage = Arc::new(MemoryStorage::new());
    let (store, outcome) =
        loaded(Arc::clone(&storage), BootstrapSource::Embedded(document)).await;
    assert_eq!(outcome, LoadOutcome::Bootstrap);
    assert_eq!(store.content().expect("content").about, vec!["Texte embarqué"]);
    assert_eq!(store.projects().expect("projects"), default_snapshot().projects);
}

#[tokio::test]
async fn storage_wins_over_bootstrap() {
    let bootstrap_path = temp_path("ignored").with_extension("json");
    std::fs::write(&bootstrap_path, r#"{ "projects": [] }"#).expect("write bootstrap");

    let storage = Arc::new(MemoryStorage::new());
    storage
        .set(DEFAULT_STORAGE_KEY, r#"{ "skills": [{ "id": "go", "name": "Go" }] }"#)
        .expect("seed");
    let (store, outcome) =
        loaded(Arc::clone(&storage), BootstrapSource::File(bootstrap_path.clone())).await;
    assert_eq!(outcome, LoadOutcome::Storage);
    assert_eq!(store.projects().expect("projects").len(), 5);
    assert_eq!(store.skills().expect("skills").len(), 1);

    // Storage content never becomes the reset target.
    assert_eq!(store.reset().expect("reset"), default_snapshot());

    let _ = std::fs::remove_file(&bootstrap_path);
}

#[tokio::test]
async fn rejected_storage_and_bootstrap_fall_back_to_defaults() {
    let bootstrap_path = temp_path("rejected").with_extension("json");
    std::fs::write(&bootstrap_path, r#"{ "unrelated": true }"#).expect("write bootstrap");

    let storage = Arc::new(MemoryStorage::new());
    storage.set(DEFAULT_STORAGE_KEY, "[1, 2, 3]").expect("seed");
    let (store, outcome) =
        loaded(Arc::clone(&storage), BootstrapSource::File(bootstrap_path.clone())).await;
    assert_eq!(outcome, LoadOutcome::Defaults);
    assert_eq!(store.snapshot().expect("snapshot"), default_snapshot());

    let _ = std::fs::remove_file(&bootstrap_path);
}

#[tokio::test]
async fn file_storage_survives_a_restart() {
    let dir = temp_path("restart");

    let first = ContentStore::new(FileStorage::new(&dir), DEFAULT_STORAGE_KEY);
    first
        .load(&BootstrapSource::None, &LoadGuard::new())
        .await
        .expect("load");
    let added: SoftSkill = first
        .add(&json!({ "icon": "🧭", "title": "Curiosité", "description": "Veille active" }))
        .expect("add");

    let second = ContentStore::new(FileStorage::new(&dir), DEFAULT_STORAGE_KEY);
    let outcome = second
        .load(&BootstrapSource::None, &LoadGuard::new())
        .await
        .expect("load");
    assert_eq!(outcome, LoadOutcome::Storage);
    assert_eq!(second.snapshot().expect("snapshot"), first.snapshot().expect("snapshot"));
    assert!(second
        .list::<SoftSkill>()
        .expect("list")
        .iter()
        .any(|s| s.id == added.id));

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn legacy_flat_storage_is_migrated_to_nested_layout() {
    let storage = Arc::new(MemoryStorage::new());
    storage
        .set(
            DEFAULT_STORAGE_KEY,
            r#"{ "projects": [], "about": ["Ancien texte"], "hero": { "badge": "Ancien" } }"#,
        )
        .expect("seed");
    let (store, outcome) = loaded(Arc::clone(&storage), BootstrapSource::None).await;
    assert_eq!(outcome, LoadOutcome::Storage);
    assert_eq!(store.content().expect("content").about, vec!["Ancien texte"]);

    let entry = persisted(&storage);
    assert_eq!(entry["content"]["hero"]["badge"], "Ancien");
    assert!(entry.get("about").is_none());
}

// ── Mutations ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn every_mutation_is_persisted() {
    let storage = Arc::new(MemoryStorage::new());
    let (store, _) = loaded(Arc::clone(&storage), BootstrapSource::None).await;

    let cert: Certification = store
        .add(&json!({ "title": "RHCSA", "organization": "Red Hat", "skills": ["SELinux"] }))
        .expect("add");
    assert_eq!(persisted(&storage)["content"]["certifications"][3]["id"], cert.id);

    store
        .update_contact(&json!({ "email": "greg@example.nc" }))
        .expect("update");
    assert_eq!(persisted(&storage)["content"]["contact"]["email"], "greg@example.nc");

    store.delete::<Skill>("tcp-ip").expect("delete");
    let skills = persisted(&storage)["skills"].as_array().expect("array").len();
    assert_eq!(skills, 14);
}

#[tokio::test]
async fn partial_contact_update_keeps_second_location_line() {
    let storage = Arc::new(MemoryStorage::new());
    let (store, _) = loaded(Arc::clone(&storage), BootstrapSource::None).await;
    let before = store.content().expect("content").contact.location_line2;
    assert!(before.is_some());

    store
        .update_contact(&json!({ "email": "greg@example.nc" }))
        .expect("update");
    assert_eq!(store.content().expect("content").contact.location_line2, before);
    assert_eq!(
        persisted(&storage)["content"]["contact"]["locationLine2"],
        "Nouvelle-Calédonie"
    );

    store
        .update_contact(&json!({ "locationLine2": null }))
        .expect("update");
    let exported = store.export_snapshot().expect("export");
    assert_eq!(exported.content.contact.location_line2, None);
    // A store still holding the default second line must not revive it.
    let reimported = ContentStore::in_memory()
        .import_snapshot(&serde_json::to_value(&exported).expect("to_value"))
        .expect("import");
    assert_eq!(reimported.content.contact.location_line2, None);
}

#[tokio::test]
async fn reset_after_mutations_restores_defaults_and_storage() {
    let storage = Arc::new(MemoryStorage::new());
    let (store, _) = loaded(Arc::clone(&storage), BootstrapSource::None).await;

    store.add::<Project>(&json!({ "title": "Temp" })).expect("add");
    store
        .update_hero(&json!({ "badge": "Changé" }))
        .expect("update");
    store.update_about(&[]).expect("update");

    let reset = store.reset().expect("reset");
    assert_eq!(reset, default_snapshot());
    assert_eq!(store.snapshot().expect("snapshot"), default_snapshot());

    let entry: Value = persisted(&storage);
    let expected = serde_json::to_value(default_snapshot()).expect("to_value");
    assert_eq!(entry, expected);
}

#[tokio::test]
async fn every_change_notifies_subscribers() {
    let storage = Arc::new(MemoryStorage::new());
    let store = ContentStore::new(storage, DEFAULT_STORAGE_KEY);
    let mut rx = store.subscribe();

    store
        .load(&BootstrapSource::None, &LoadGuard::new())
        .await
        .expect("load");
    rx.changed().await.expect("load notifies");

    store.import_json(r#"{ "projects": [] }"#).expect("import");
    rx.changed().await.expect("import notifies");

    store.reset().expect("reset");
    rx.changed().await.expect("reset notifies");

    assert_eq!(*rx.borrow_and_update(), 3);
}

// ── Import / export ───────────────────────────────────────────────────────────

#[tokio::test]
async fn export_round_trips_through_sanitizer() {
    let storage = Arc::new(MemoryStorage::new());
    let (store, _) = loaded(storage, BootstrapSource::None).await;
    store
        .add::<Project>(&json!({ "title": "Exporté", "achievements": ["  Un ", ""] }))
        .expect("add");

    let exported = store.export_snapshot().expect("export");
    let text = serde_json::to_string(&exported).expect("serialize");
    let parsed: Value = serde_json::from_str(&text).expect("parse");
    let again = sanitize_stored_data(&parsed, &default_snapshot()).expect("sanitize");
    assert_eq!(again, exported);
}

#[tokio::test]
async fn import_uses_current_state_as_fallback() {
    let storage = Arc::new(MemoryStorage::new());
    let (store, _) = loaded(storage, BootstrapSource::None).await;
    store
        .update_about(&["Texte courant".to_string()])
        .expect("update");

    let snapshot = store
        .import_snapshot(&json!({ "projects": [{ "title": "Importé" }] }))
        .expect("import");
    assert_eq!(snapshot.projects.len(), 1);
    assert_eq!(snapshot.content.about, vec!["Texte courant"]);
}

#[tokio::test]
async fn invalid_imports_are_rejected_without_side_effects() {
    let storage = Arc::new(MemoryStorage::new());
    let (store, _) = loaded(Arc::clone(&storage), BootstrapSource::None).await;
    let before = persisted(&storage);

    for raw in [json!({}), json!({ "foo": "bar" }), json!("text"), Value::Null] {
        let err = store.import_snapshot(&raw).expect_err("rejected");
        assert!(matches!(err, AppError::Import(_)));
    }
    assert_eq!(persisted(&storage), before);
}

#[test]
fn top_level_rejections_are_distinguished() {
    let fallback = default_snapshot();
    assert_eq!(
        sanitize_stored_data(&json!(42), &fallback),
        Err(SnapshotError::InvalidFormat)
    );
    assert_eq!(
        sanitize_stored_data(&json!({ "foo": "bar" }), &fallback),
        Err(SnapshotError::NoRecognizedContent)
    );
}

#[tokio::test]
async fn export_to_dir_writes_dated_file() {
    let dir = temp_path("export");
    let storage = Arc::new(MemoryStorage::new());
    let (store, _) = loaded(storage, BootstrapSource::None).await;

    let date = chrono::NaiveDate::from_ymd_opt(2024, 12, 1).expect("date");
    let path = store.export_to_dir(&dir, date).expect("export");
    assert_eq!(path, dir.join("portfolio-data-2024-12-01.json"));

    let text = std::fs::read_to_string(&path).expect("read export");
    let parsed: Value = serde_json::from_str(&text).expect("parse export");
    assert_eq!(parsed, serde_json::to_value(store.snapshot().expect("snapshot")).expect("to_value"));

    let _ = std::fs::remove_dir_all(&dir);
}
