//! Report lifecycle running against a real SQLite file

use hamal_core::{HamalError, PasswordHasher, ReportId, ReportLifecycle, ReportStatus, Role};
use hamal_storage::LocalStorageContext;
use std::sync::Arc;
use test_helpers::{user_rows, TestDb};

struct ReversedHasher;

impl PasswordHasher for ReversedHasher {
    fn hash_password(&self, password: &str) -> hamal_core::Result<String> {
        Ok(password.chars().rev().collect())
    }

    fn verify_password(&self, password: &str, hash: &str) -> hamal_core::Result<bool> {
        Ok(password.chars().rev().eq(hash.chars()))
    }
}

fn lifecycle(db: &TestDb) -> ReportLifecycle {
    let storage = LocalStorageContext::new(db.pool().clone());
    ReportLifecycle::new(Arc::new(storage), Arc::new(ReversedHasher))
}

#[tokio::test]
async fn test_submit_then_list_shows_pending_report() {
    let db = TestDb::new().await;
    let lifecycle = lifecycle(&db);

    let id = lifecycle.submit("T", "C").await.unwrap();

    let reports = lifecycle.list_all().await.unwrap();
    let report = reports.iter().find(|r| r.id == id).expect("submitted report");
    assert_eq!(report.title, "T");
    assert_eq!(report.content, "C");
    assert_eq!(report.status, ReportStatus::Pending);
}

#[tokio::test]
async fn test_approve_then_reject_leaves_rejected() {
    let db = TestDb::new().await;
    let lifecycle = lifecycle(&db);
    let id = lifecycle.submit("T", "C").await.unwrap();

    lifecycle.approve(id).await.unwrap();
    assert_eq!(lifecycle.list_all().await.unwrap()[0].status, ReportStatus::Approved);

    lifecycle.reject(id).await.unwrap();
    assert_eq!(lifecycle.list_all().await.unwrap()[0].status, ReportStatus::Rejected);

    lifecycle.approve(id).await.unwrap();
    assert_eq!(lifecycle.list_all().await.unwrap()[0].status, ReportStatus::Approved);
}

#[tokio::test]
async fn test_decisions_on_missing_report_are_not_found() {
    let db = TestDb::new().await;
    let lifecycle = lifecycle(&db);

    assert!(matches!(
        lifecycle.approve(ReportId::new(7)).await,
        Err(HamalError::NotFound { .. })
    ));
    assert!(matches!(
        lifecycle.reject(ReportId::new(7)).await,
        Err(HamalError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_register_bootstraps_admin_once() {
    let db = TestDb::new().await;
    let lifecycle = lifecycle(&db);

    assert!(lifecycle.awaiting_bootstrap_admin().await.unwrap());
    let admin = lifecycle.register_user("root", "pw").await.unwrap();
    assert!(!lifecycle.awaiting_bootstrap_admin().await.unwrap());
    let user = lifecycle.register_user("guest", "pw").await.unwrap();

    assert_eq!(admin.role, Role::Admin);
    assert_eq!(user.role, Role::User);
}

#[tokio::test]
async fn test_register_duplicate_is_conflict_and_keeps_one_row() {
    let db = TestDb::new().await;
    let lifecycle = lifecycle(&db);

    lifecycle.register_user("alice", "one").await.unwrap();
    let err = lifecycle.register_user("alice", "two").await.unwrap_err();

    assert!(matches!(err, HamalError::Conflict(_)));
    assert_eq!(user_rows(db.pool()).await, 1);
    assert!(lifecycle.authenticate("alice", "one").await.unwrap().is_some());
    assert!(lifecycle.authenticate("alice", "two").await.unwrap().is_none());
}
