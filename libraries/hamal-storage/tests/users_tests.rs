
use hamal_core::types::Role;
use hamal_storage::{users, StorageError};
use std::collections::HashSet;
use test_helpers::{user_rows, TestDb};

#[tokio::test]
async fn test_first_user_becomes_admin() {
    let db = TestDb::new().await;

    let first = users::create(db.pool(), "alice", "hash-a").await.unwrap();
    let second = users::create(db.pool(), "bob", "hash-b").await.unwrap();
    let third = users::create(db.pool(), "carol", "hash-c").await.unwrap();

    assert_eq!(first.role, Role::Admin);
    assert_eq!(second.role, Role::User);
    assert_eq!(third.role, Role::User);
}

#[tokio::test]
async fn test_duplicate_username_conflicts() {
    let db = TestDb::new().await;

    users::create(db.pool(), "alice", "hash-a").await.unwrap();
    let err = users::create(db.pool(), "alice", "hash-b").await.unwrap_err();

    assert!(matches!(err, StorageError::Conflict(_)));
    assert_eq!(user_rows(db.pool()).await, 1);

    let credentials = users::get_credentials(db.pool(), "alice")
        .await
        .unwrap()
        .expect("alice exists");
    assert_eq!(credentials.password_hash, "hash-a");
}

#[tokio::test]
async fn test_get_credentials_unknown_user() {
    let db = TestDb::new().await;

    let credentials = users::get_credentials(db.pool(), "ghost").await.unwrap();
    assert!(credentials.is_none());
}

#[tokio::test]
async fn test_get_all_in_registration_order() {
    let db = TestDb::new().await;

    for name in ["zed", "amy", "max"] {
        users::create(db.pool(), name, "hash").await.unwrap();
    }

    let all = users::get_all(db.pool()).await.unwrap();
    let names: Vec<&str> = all.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["zed", "amy", "max"]);
    assert_eq!(users::count(db.pool()).await.unwrap(), 3);
}

#[tokio::test]
async fn test_schema_allows_single_admin() {
    let db = TestDb::new().await;
    users::create(db.pool(), "alice", "hash").await.unwrap();

    let result = sqlx::query(
        "INSERT INTO users (username, password_hash, role, created_at) VALUES ('mallory', 'h', 'admin', 0)",
    )
    .execute(db.pool())
    .await;
    assert!(result.is_err(), "a second admin row must be refused");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_grant_one_admin() {
    let db = TestDb::new().await;

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let pool = db.pool().clone();
            tokio::spawn(async move { users::create(&pool, &format!("user{i}"), "hash").await })
        })
        .collect();

    let mut created = Vec::new();
    for handle in handles {
        created.push(handle.await.unwrap().unwrap());
    }

    let admins: Vec<_> = created.iter().filter(|u| u.role == Role::Admin).collect();
    assert_eq!(admins.len(), 1, "exactly one registration wins admin");

    // The admin is whoever committed first
    let lowest_id = created.iter().map(|u| u.id).min().unwrap();
    assert_eq!(admins[0].id, lowest_id);

    let names: HashSet<_> = created.iter().map(|u| u.username.clone()).collect();
    assert_eq!(names.len(), 16);
}
