use anyhow::Result;

use super::MemoryStorage;
use crate::domain::models::Storage;
use crate::domain::models::StorageName;

#[tokio::test]
async fn it_sets_gets_and_removes_items() -> Result<()> {
    let storage = MemoryStorage::default();
    assert_eq!(storage.name(), StorageName::Memory);
    assert_eq!(storage.get_item("cartId").await?, None);

    storage.set_item("cartId", "3").await?;
    assert_eq!(storage.get_item("cartId").await?, Some("3".to_string()));

    storage.remove_item("cartId").await?;
    storage.remove_item("cartId").await?;
    assert_eq!(storage.get_item("cartId").await?, None);

    return Ok(());
}
