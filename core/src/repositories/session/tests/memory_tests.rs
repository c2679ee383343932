//! Unit tests for the in-memory TTL store

use std::time::Duration;

use crate::repositories::session::{InMemoryTtlStore, TtlStore};

#[tokio::test]
async fn test_set_and_get() {
    let store = InMemoryTtlStore::new();

    store
        .set("RT:alice_01", "refresh-token", Duration::from_secs(60))
        .await
        .unwrap();

    let value = store.get("RT:alice_01").await.unwrap();
    assert_eq!(value, Some("refresh-token".to_string()));
}

#[tokio::test]
async fn test_get_missing_key() {
    let store = InMemoryTtlStore::new();

    let value = store.get("RT:nobody").await.unwrap();
    assert_eq!(value, None);
}

#[tokio::test]
async fn test_set_overwrites() {
    let store = InMemoryTtlStore::new();

    store
        .set("RT:alice_01", "first", Duration::from_secs(60))
        .await
        .unwrap();
    store
        .set("RT:alice_01", "second", Duration::from_secs(60))
        .await
        .unwrap();

    let value = store.get("RT:alice_01").await.unwrap();
    assert_eq!(value, Some("second".to_string()));
}

#[tokio::test]
async fn test_expired_key_reads_as_absent() {
    let store = InMemoryTtlStore::new();

    store
        .set("short-lived", "value", Duration::from_millis(20))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(40)).await;

    let value = store.get("short-lived").await.unwrap();
    assert_eq!(value, None);
}

#[tokio::test]
async fn test_delete() {
    let store = InMemoryTtlStore::new();

    store
        .set("RT:alice_01", "refresh-token", Duration::from_secs(60))
        .await
        .unwrap();

    assert!(store.delete("RT:alice_01").await.unwrap());
    assert!(!store.delete("RT:alice_01").await.unwrap());
    assert_eq!(store.get("RT:alice_01").await.unwrap(), None);
}
