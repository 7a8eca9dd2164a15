use alias_shortener::domain::repositories::UserRepository;
use alias_shortener::error::AppError;
use alias_shortener::infrastructure::persistence::PgUserRepository;
use alias_shortener::utils::password::{hash_password, verify_password};
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_and_find(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));
    let hash = hash_password("secret").unwrap();

    let created = repo.create("user@x.com", &hash).await.unwrap();
    let found = repo.find_by_email("user@x.com").await.unwrap().unwrap();

    assert_eq!(found.id, created.id);
    assert!(verify_password("secret", &found.password_hash).unwrap());
}

#[sqlx::test]
async fn test_find_unknown_email(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    assert!(repo.find_by_email("nouser@x.com").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_duplicate_email_is_conflict(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.create("user@x.com", "hash-a").await.unwrap();
    let result = repo.create("user@x.com", "hash-b").await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_list(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.create("a@x.com", "hash").await.unwrap();
    repo.create("b@x.com", "hash").await.unwrap();

    let users = repo.list().await.unwrap();
    assert_eq!(users.len(), 2);
}
