use snipz::model::{SnippetRecord, StoredState};
use snipz::store::fs_backend::FsBackend;
use snipz::store::{SnippetRepository, StorageBackend};
use std::fs;
use tempfile::TempDir;

fn record(text: &str, icon: &str, group: &str) -> SnippetRecord {
    SnippetRecord::new(text).with_icon(icon).with_group(group)
}

#[test]
fn test_missing_file_loads_as_none() {
    let temp = TempDir::new().unwrap();
    let backend = FsBackend::new(temp.path().join("not-yet"));
    assert!(backend.load().unwrap().is_none());
}

#[test]
fn test_blank_file_loads_as_none() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("snippets.json"), "  \n").unwrap();
    let backend = FsBackend::new(temp.path().to_path_buf());
    assert!(backend.load().unwrap().is_none());
}

#[test]
fn test_save_preserves_order_and_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let backend = FsBackend::new(temp.path().join("data"));

    let zeta = record("Z", "pencil", "");
    let alpha = record("A {1}", "star", "work");
    let state = StoredState::from_entries([
        (&"zeta".to_string(), &zeta),
        (&"alpha".to_string(), &alpha),
    ]);
    backend.save(&state).unwrap();

    let loaded = backend.load().unwrap().unwrap();
    let keys: Vec<_> = loaded.snippets.keys().cloned().collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
    assert_eq!(loaded.icons.as_ref().unwrap()["alpha"], "star");
    assert_eq!(loaded.groups.as_ref().unwrap()["alpha"], "work");

    let leftovers: Vec<_> = fs::read_dir(temp.path().join("data"))
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_custom_file_name() {
    let temp = TempDir::new().unwrap();
    let backend = FsBackend::new(temp.path().to_path_buf()).with_file_name("mine.json");
    backend.save(&StoredState::default()).unwrap();
    assert!(temp.path().join("mine.json").exists());
    assert_eq!(backend.data_path(), temp.path().join("mine.json"));
}

#[test]
fn test_corrupt_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("snippets.json"), "{ not json").unwrap();
    let backend = FsBackend::new(temp.path().to_path_buf());
    assert!(backend.load().is_err());
    assert!(SnippetRepository::open(backend, "pencil").is_err());
}

#[test]
fn test_repository_survives_reopen() {
    let temp = TempDir::new().unwrap();

    let mut repo = SnippetRepository::open(FsBackend::new(temp.path().to_path_buf()), "pencil")
        .unwrap();
    repo.add("a", record("A", "pencil", "")).unwrap();
    repo.add("b", record("B {1}", "star", "g")).unwrap();
    repo.add("c", record("C", "pencil", "")).unwrap();
    repo.reorder(2, 0).unwrap();
    repo.update("a", "renamed", record("A2", "pencil", "")).unwrap();
    repo.close();

    let reopened =
        SnippetRepository::open(FsBackend::new(temp.path().to_path_buf()), "pencil").unwrap();
    let keys: Vec<_> = reopened.keys().collect();
    assert_eq!(keys, vec!["c", "renamed", "b"]);
    assert_eq!(reopened.get("b").unwrap().icon, "star");
    assert_eq!(reopened.get("renamed").unwrap().text, "A2");
}
