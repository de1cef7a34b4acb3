use anyhow::Result;
use tempfile::tempdir;

use super::FileStorage;
use crate::domain::models::Storage;
use crate::domain::models::StorageName;

#[tokio::test]
async fn it_returns_none_without_a_file() -> Result<()> {
    let dir = tempdir()?;
    let storage = FileStorage::new(dir.path().join("local-storage.yaml"));

    assert_eq!(storage.name(), StorageName::File);
    assert_eq!(storage.get_item("cartId").await?, None);

    return Ok(());
}

#[tokio::test]
async fn it_persists_items_across_instances() -> Result<()> {
    let dir = tempdir()?;
    let file_path = dir.path().join("nested/local-storage.yaml");

    FileStorage::new(file_path.clone())
        .set_item("cartId", "42")
        .await?;

    let storage = FileStorage::new(file_path);
    assert_eq!(storage.get_item("cartId").await?, Some("42".to_string()));

    return Ok(());
}

#[tokio::test]
async fn it_overwrites_and_removes_items() -> Result<()> {
    let dir = tempdir()?;
    let storage = FileStorage::new(dir.path().join("local-storage.yaml"));

    storage.set_item("cartId", "1").await?;
    storage.set_item("sessionCookie", "session_id=abc").await?;
    storage.set_item("cartId", "2").await?;
    assert_eq!(storage.get_item("cartId").await?, Some("2".to_string()));

    storage.remove_item("cartId").await?;
    assert_eq!(storage.get_item("cartId").await?, None);
    assert_eq!(
        storage.get_item("sessionCookie").await?,
        Some("session_id=abc".to_string())
    );

    return Ok(());
}

#[tokio::test]
async fn it_removes_missing_items_quietly() -> Result<()> {
    let dir = tempdir()?;
    let file_path = dir.path().join("local-storage.yaml");
    let storage = FileStorage::new(file_path.clone());

    storage.remove_item("cartId").await?;
    assert!(!file_path.exists());

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_a_corrupt_file() -> Result<()> {
    let dir = tempdir()?;
    let file_path = dir.path().join("local-storage.yaml");
    tokio::fs::write(&file_path, "- not\n- a map\n").await?;

    let res = FileStorage::new(file_path).get_item("cartId").await;
    assert!(res.is_err());

    return Ok(());
}
