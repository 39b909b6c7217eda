mod common;

use shortener::domain::repositories::{StorageError, UrlRepository};
use shortener::infrastructure::persistence::SqliteUrlRepository;

#[tokio::test]
async fn test_save_url_returns_id() {
    let repo = common::test_repository(common::test_pool().await);

    let first = repo.save_url("https://example.com/1", "one").await.unwrap();
    let second = repo.save_url("https://example.com/2", "two").await.unwrap();

    assert!(first > 0);
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_get_url_returns_saved_url() {
    let repo = common::test_repository(common::test_pool().await);

    repo.save_url("https://example.com", "ex").await.unwrap();

    assert_eq!(repo.get_url("ex").await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_get_url_not_found() {
    let repo = common::test_repository(common::test_pool().await);

    let result = repo.get_url("doesnotexist").await;

    assert!(matches!(result, Err(StorageError::UrlNotFound)));
}

#[tokio::test]
async fn test_save_duplicate_url_fails() {
    let repo = common::test_repository(common::test_pool().await);

    repo.save_url("https://example.com", "first").await.unwrap();
    let result = repo.save_url("https://example.com", "second").await;

    assert!(matches!(result, Err(StorageError::UrlExists)));
}

#[tokio::test]
async fn test_save_duplicate_alias_fails() {
    let repo = common::test_repository(common::test_pool().await);

    repo.save_url("https://example.com/a", "same").await.unwrap();
    let result = repo.save_url("https://example.com/b", "same").await;

    assert!(matches!(result, Err(StorageError::UrlExists)));
    assert_eq!(repo.get_url("same").await.unwrap(), "https://example.com/a");
}

#[tokio::test]
async fn test_save_rejects_empty_arguments() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(pool.clone());

    assert!(matches!(
        repo.save_url("", "alias").await,
        Err(StorageError::InvalidInput(_))
    ));
    assert!(matches!(
        repo.save_url("https://example.com", "").await,
        Err(StorageError::InvalidInput(_))
    ));
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[tokio::test]
async fn test_delete_url() {
    let repo = common::test_repository(common::test_pool().await);

    repo.save_url("https://example.com", "ex").await.unwrap();
    repo.delete_url("ex").await.unwrap();

    assert!(matches!(
        repo.get_url("ex").await,
        Err(StorageError::UrlNotFound)
    ));
}

#[tokio::test]
async fn test_delete_url_twice_reports_not_found() {
    let repo = common::test_repository(common::test_pool().await);

    repo.save_url("https://example.com", "ex").await.unwrap();
    repo.delete_url("ex").await.unwrap();

    assert!(matches!(
        repo.delete_url("ex").await,
        Err(StorageError::UrlNotFound)
    ));
}

#[tokio::test]
async fn test_deleted_url_can_be_saved_again() {
    let repo = common::test_repository(common::test_pool().await);

    repo.save_url("https://example.com", "ex").await.unwrap();
    repo.delete_url("ex").await.unwrap();

    assert!(repo.save_url("https://example.com", "ex2").await.is_ok());
}

#[tokio::test]
async fn test_count_and_ping() {
    let pool = common::test_pool().await;
    common::create_test_url(&pool, "a", "https://a.example.com").await;
    common::create_test_url(&pool, "b", "https://b.example.com").await;

    let repo = common::test_repository(pool);

    repo.ping().await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_connect_creates_storage_file() {
    let path = std::env::temp_dir().join(format!(
        "shortener-test-{}-{}.db",
        std::process::id(),
        rand_suffix()
    ));
    let path_str = path.to_str().unwrap().to_string();

    {
        let repo = SqliteUrlRepository::connect(&path_str).await.unwrap();
        repo.save_url("https://example.com", "ex").await.unwrap();
        repo.pool().close().await;
    }

    assert!(path.exists());

    let reopened = SqliteUrlRepository::connect(&path_str).await.unwrap();
    assert_eq!(reopened.get_url("ex").await.unwrap(), "https://example.com");
    reopened.pool().close().await;

    let _ = std::fs::remove_file(&path);
}

fn rand_suffix() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}
