//! Integration tests for the document cache gateway

mod helpers;

use helpers::{memory_pool, sample_schedule};

use carteira_dl::db::documents::{document_exists, get_document, save_document};
use carteira_dl::transform::transform;

#[tokio::test]
async fn test_exists_false_on_empty_cache() {
    let pool = memory_pool().await;
    assert!(!document_exists(&pool, "doc-x").await.unwrap());
}

#[tokio::test]
async fn test_get_missing_returns_none() {
    let pool = memory_pool().await;
    assert!(get_document(&pool, "doc-x").await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_then_exists_and_round_trip() {
    let pool = memory_pool().await;
    let content = transform(&sample_schedule("doc-x"), "doc-x", 1_700_000_000_000);

    save_document(&pool, &content).await.unwrap();

    assert!(document_exists(&pool, "doc-x").await.unwrap());
    let record = get_document(&pool, "doc-x").await.unwrap().unwrap();
    assert_eq!(record.content, content);
}

#[tokio::test]
async fn test_created_at_is_assigned_by_the_store() {
    let pool = memory_pool().await;
    let content = transform(&sample_schedule("doc-x"), "doc-x", 1_700_000_000_000);

    let before = carteira_common::time::now();
    save_document(&pool, &content).await.unwrap();
    let after = carteira_common::time::now();

    let record = get_document(&pool, "doc-x").await.unwrap().unwrap();
    // Allow a little skew between the process clock and SQLite's clock.
    assert!(record.created_at >= before - chrono::Duration::seconds(5));
    assert!(record.created_at <= after + chrono::Duration::seconds(5));
}

#[tokio::test]
async fn test_duplicate_save_preserves_created_at() {
    let pool = memory_pool().await;
    let content = transform(&sample_schedule("doc-x"), "doc-x", 1_700_000_000_000);
    save_document(&pool, &content).await.unwrap();

    // Pin the stored timestamp so the second write's clock reading cannot
    // mask a rewrite.
    sqlx::query("UPDATE documents SET created_at = '2020-01-01T00:00:00.000Z' WHERE id = ?")
        .bind("doc-x")
        .execute(&pool)
        .await
        .unwrap();

    let mut updated = content.clone();
    updated.full_name = "Replacement Name".to_string();
    save_document(&pool, &updated).await.unwrap();

    let record = get_document(&pool, "doc-x").await.unwrap().unwrap();
    assert_eq!(record.content.full_name, "Replacement Name");
    assert_eq!(
        record.created_at,
        "2020-01-01T00:00:00Z".parse::<chrono::DateTime<chrono::Utc>>().unwrap()
    );
}

#[tokio::test]
async fn test_records_for_different_ids_are_independent() {
    let pool = memory_pool().await;
    let a = transform(&sample_schedule("doc-a"), "doc-a", 1_700_000_000_000);
    let b = transform(&sample_schedule("doc-b"), "doc-b", 1_700_000_111_111);

    save_document(&pool, &a).await.unwrap();
    save_document(&pool, &b).await.unwrap();

    assert_eq!(get_document(&pool, "doc-a").await.unwrap().unwrap().content.id, "doc-a");
    assert_eq!(get_document(&pool, "doc-b").await.unwrap().unwrap().content.id, "doc-b");
}
