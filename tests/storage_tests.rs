//! Tests for the archive folder layout and collision handling.

use hwfetch::fetch::DownloadedFile;
use hwfetch::storage::{FolderManager, HOMEWORKS_DIR};
use std::fs;

mod common;
use common::helpers::*;

fn pdf(content: &[u8]) -> DownloadedFile {
    DownloadedFile {
        extension: "pdf".into(),
        content: content.to_vec(),
    }
}

#[tokio::test]
async fn test_save_creates_subject_layout() {
    let temp_dir = create_temp_dir();
    let manager = FolderManager::new(temp_dir.path()).await.unwrap();

    let path = manager.save("Math", "Lab1", &pdf(b"first")).await.unwrap();

    assert_eq!(
        path,
        temp_dir.path().join(HOMEWORKS_DIR).join("Math").join("Lab1.pdf")
    );
    assert_eq!(fs::read(&path).unwrap(), b"first");
}

#[tokio::test]
async fn test_save_collision_resolved_exactly_once() {
    let temp_dir = create_temp_dir();
    let manager = FolderManager::new(temp_dir.path()).await.unwrap();
    let subject_dir = temp_dir.path().join(HOMEWORKS_DIR).join("Math");

    let first = manager.save("Math", "Lab1", &pdf(b"first")).await.unwrap();
    assert_eq!(first, subject_dir.join("Lab1.pdf"));

    let second = manager.save("Math", "Lab1", &pdf(b"second")).await.unwrap();
    assert_eq!(second, subject_dir.join("Lab1_copy.pdf"));
    assert_eq!(fs::read(&first).unwrap(), b"first");
    assert_eq!(fs::read(&second).unwrap(), b"second");

    // The _copy name is not collision-checked again: a third save with the
    // same theme overwrites the existing copy. Documented behavior.
    let third = manager.save("Math", "Lab1", &pdf(b"third")).await.unwrap();
    assert_eq!(third, subject_dir.join("Lab1_copy.pdf"));
    assert_eq!(fs::read(&third).unwrap(), b"third");
}

#[tokio::test]
async fn test_folder_creation_is_idempotent() {
    let temp_dir = create_temp_dir();

    // Construct twice against the same base; the root survives untouched.
    let _first = FolderManager::new(temp_dir.path()).await.unwrap();
    let manager = FolderManager::new(temp_dir.path()).await.unwrap();

    manager.save("Physics", "HW1", &pdf(b"a")).await.unwrap();
    manager.save("Physics", "HW2", &pdf(b"b")).await.unwrap();

    let entries: Vec<_> = fs::read_dir(temp_dir.path().join(HOMEWORKS_DIR))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(entries.len(), 1, "exactly one subject folder expected");
    assert_eq!(entries[0].file_name(), "Physics");
}

#[tokio::test]
async fn test_different_extensions_do_not_collide() {
    let temp_dir = create_temp_dir();
    let manager = FolderManager::new(temp_dir.path()).await.unwrap();

    let doc = DownloadedFile {
        extension: "docx".into(),
        content: b"doc".to_vec(),
    };

    let first = manager.save("Math", "Lab1", &pdf(b"pdf")).await.unwrap();
    let second = manager.save("Math", "Lab1", &doc).await.unwrap();

    assert!(first.ends_with("Lab1.pdf"));
    assert!(second.ends_with("Lab1.docx"));
}
