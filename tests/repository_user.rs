//! PostgreSQL user repository tests. Need `DATABASE_URL` pointing at a
//! PostgreSQL server; `#[sqlx::test]` creates a fresh database per test.

use sqlx::PgPool;
use std::sync::Arc;
use shortlinks::domain::entities::NewUser;
use shortlinks::domain::repositories::UserRepository;
use shortlinks::infrastructure::persistence::PgUserRepository;

#[sqlx::test]
async fn test_create_and_find(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let user = repo
        .create(NewUser::new("Alice@Example.com", "hash".to_string()))
        .await
        .unwrap();

    assert_eq!(user.email, "alice@example.com");

    let by_email = repo.find_by_email("alice@example.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, user.id);

    let by_id = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, user.email);

    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
async fn test_duplicate_email_is_duplicate_identity(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.create(NewUser::new("bob@example.com", "hash-1".to_string()))
        .await
        .unwrap();
    let err = repo
        .create(NewUser::new("BOB@example.com", "hash-2".to_string()))
        .await
        .unwrap_err();

    assert_eq!(err.code(), "duplicate_identity");
}
