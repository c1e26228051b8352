//! Report lifecycle
//!
//! The rules governing a report's status and a user's role. Every mutation
//! of either goes through [`ReportLifecycle`]; HTTP handlers and the CLI only
//! parse input and render output around it.

use crate::error::{HamalError, Result};
use crate::storage::StorageContext;
use crate::traits::PasswordHasher;
use crate::types::{Decision, NewReport, NewUser, Report, ReportId, User};
use std::sync::Arc;

/// Report status state machine and admin bootstrap rule
#[derive(Clone)]
pub struct ReportLifecycle {
    storage: Arc<dyn StorageContext>,
    hasher: Arc<dyn PasswordHasher>,
}

impl ReportLifecycle {
    /// Create a lifecycle over the given storage and password hasher
    pub fn new(storage: Arc<dyn StorageContext>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { storage, hasher }
    }

    /// Submit a new anonymous report. It starts out `pending`.
    ///
    /// # Errors
    /// `Validation` if the title or content is blank; storage errors otherwise.
    pub async fn submit(&self, title: &str, content: &str) -> Result<ReportId> {
        let new_report = NewReport::new(title, content)?;
        let report = self.storage.create_report(new_report).await?;
        tracing::info!(report_id = %report.id, "Report submitted");
        Ok(report.id)
    }

    /// Mark a report `approved`, whatever its current status.
    ///
    /// # Errors
    /// `NotFound` if no report has this id.
    pub async fn approve(&self, id: ReportId) -> Result<Report> {
        self.decide(id, Decision::Approve).await
    }

    /// Mark a report `rejected`, whatever its current status.
    ///
    /// # Errors
    /// `NotFound` if no report has this id.
    pub async fn reject(&self, id: ReportId) -> Result<Report> {
        self.decide(id, Decision::Reject).await
    }

    /// Apply an administrator decision.
    ///
    /// A later decision overwrites an earlier one; there is no way back to
    /// `pending`.
    ///
    /// # Errors
    /// `NotFound` if no report has this id.
    pub async fn decide(&self, id: ReportId, decision: Decision) -> Result<Report> {
        let status = decision.target_status();
        match self.storage.set_report_status(id, status).await? {
            Some(report) => {
                tracing::info!(report_id = %id, %status, "Report decided");
                Ok(report)
            }
            None => {
                tracing::warn!(report_id = %id, ?decision, "Decision on unknown report");
                Err(HamalError::not_found("Report", id))
            }
        }
    }

    /// All reports in insertion order
    pub async fn list_all(&self) -> Result<Vec<Report>> {
        self.storage.get_all_reports().await
    }

    /// Register a user. The very first account becomes `admin`.
    ///
    /// # Errors
    /// `Validation` for blank fields, `Conflict` if the username is taken.
    pub async fn register_user(&self, username: &str, password: &str) -> Result<User> {
        let new_user = NewUser::new(username, password)?;
        let password_hash = self.hasher.hash_password(&new_user.password)?;

        let user = self
            .storage
            .create_user(&new_user.username, &password_hash)
            .await
            .inspect_err(|e| {
                if matches!(e, HamalError::Conflict(_)) {
                    tracing::warn!(username = %new_user.username, "Username already taken");
                }
            })?;

        tracing::info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(user)
    }

    /// Check a username/password pair, returning the user on success.
    ///
    /// Unknown usernames and wrong passwords both yield `Ok(None)`.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>> {
        let Some(credentials) = self.storage.get_user_credentials(username).await? else {
            return Ok(None);
        };

        if self
            .hasher
            .verify_password(password, &credentials.password_hash)?
        {
            Ok(Some(credentials.user))
        } else {
            Ok(None)
        }
    }

    /// Whether the next registration will be granted `admin`
    pub async fn awaiting_bootstrap_admin(&self) -> Result<bool> {
        Ok(self.storage.count_users().await? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MockStorageContext;
    use crate::types::{ReportStatus, Role, UserCredentials, UserId};
    use mockall::predicate::eq;

    /// Reversible stand-in so tests can see what reached storage
    struct PlainHasher;

    impl PasswordHasher for PlainHasher {
        fn hash_password(&self, password: &str) -> Result<String> {
            Ok(format!("hashed:{password}"))
        }

        fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
            Ok(hash == format!("hashed:{password}"))
        }
    }

    fn lifecycle(storage: MockStorageContext) -> ReportLifecycle {
        ReportLifecycle::new(Arc::new(storage), Arc::new(PlainHasher))
    }

    fn report(id: i64, status: ReportStatus) -> Report {
        Report {
            id: ReportId::new(id),
            title: "T".to_string(),
            content: "C".to_string(),
            status,
            created_at: 1_700_000_000,
            decided_at: status.is_decided().then_some(1_700_000_100),
        }
    }

    fn user(id: i64, username: &str, role: Role) -> User {
        User {
            id: UserId::new(id),
            username: username.to_string(),
            role,
            created_at: 1_700_000_000,
        }
    }

    #[tokio::test]
    async fn submit_stores_trimmed_pending_report() {
        let mut storage = MockStorageContext::new();
        storage
            .expect_create_report()
            .withf(|r| r.title == "T" && r.content == "C")
            .times(1)
            .returning(|_| Ok(report(1, ReportStatus::Pending)));

        let id = lifecycle(storage).submit(" T ", "C\n").await.unwrap();
        assert_eq!(id, ReportId::new(1));
    }

    #[tokio::test]
    async fn submit_blank_title_never_reaches_storage() {
        let mut storage = MockStorageContext::new();
        storage.expect_create_report().never();

        let err = lifecycle(storage).submit("  ", "C").await.unwrap_err();
        assert!(matches!(err, HamalError::Validation(_)));
    }

    #[tokio::test]
    async fn approve_and_reject_write_decided_statuses() {
        let mut storage = MockStorageContext::new();
        storage
            .expect_set_report_status()
            .with(eq(ReportId::new(3)), eq(ReportStatus::Approved))
            .times(1)
            .returning(|id, status| Ok(Some(report(id.get(), status))));
        storage
            .expect_set_report_status()
            .with(eq(ReportId::new(3)), eq(ReportStatus::Rejected))
            .times(1)
            .returning(|id, status| Ok(Some(report(id.get(), status))));

        let lifecycle = lifecycle(storage);
        let approved = lifecycle.approve(ReportId::new(3)).await.unwrap();
        assert_eq!(approved.status, ReportStatus::Approved);

        let rejected = lifecycle.reject(ReportId::new(3)).await.unwrap();
        assert_eq!(rejected.status, ReportStatus::Rejected);
    }

    #[tokio::test]
    async fn deciding_unknown_report_is_not_found() {
        let mut storage = MockStorageContext::new();
        storage
            .expect_set_report_status()
            .returning(|_, _| Ok(None));

        let lifecycle = lifecycle(storage);
        let err = lifecycle.approve(ReportId::new(99)).await.unwrap_err();
        assert!(matches!(err, HamalError::NotFound { ref id, .. } if id == "99"));

        let err = lifecycle.reject(ReportId::new(99)).await.unwrap_err();
        assert!(matches!(err, HamalError::NotFound { .. }));
    }

    #[tokio::test]
    async fn register_hashes_password_before_storing() {
        let mut storage = MockStorageContext::new();
        storage
            .expect_create_user()
            .withf(|username, hash| username == "alice" && hash == "hashed:secret")
            .times(1)
            .returning(|username, _| Ok(user(1, username, Role::Admin)));

        let created = lifecycle(storage)
            .register_user(" alice ", "secret")
            .await
            .unwrap();
        assert_eq!(created.role, Role::Admin);
    }

    #[tokio::test]
    async fn register_surfaces_conflict() {
        let mut storage = MockStorageContext::new();
        storage
            .expect_create_user()
            .returning(|username, _| Err(HamalError::conflict(format!("{username} is taken"))));

        let err = lifecycle(storage)
            .register_user("alice", "secret")
            .await
            .unwrap_err();
        assert!(matches!(err, HamalError::Conflict(_)));
    }

    #[tokio::test]
    async fn register_blank_password_is_rejected_without_hashing() {
        let mut storage = MockStorageContext::new();
        storage.expect_create_user().never();

        let err = lifecycle(storage)
            .register_user("alice", "")
            .await
            .unwrap_err();
        assert!(matches!(err, HamalError::Validation(_)));
    }

    #[tokio::test]
    async fn authenticate_checks_password_hash() {
        let mut storage = MockStorageContext::new();
        storage
            .expect_get_user_credentials()
            .returning(|username| {
                Ok((username == "admin").then(|| UserCredentials {
                    user: user(1, "admin", Role::Admin),
                    password_hash: "hashed:pw".to_string(),
                }))
            });

        let lifecycle = lifecycle(storage);
        assert!(lifecycle.authenticate("admin", "pw").await.unwrap().is_some());
        assert!(lifecycle.authenticate("admin", "nope").await.unwrap().is_none());
        assert!(lifecycle.authenticate("ghost", "pw").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn bootstrap_pending_until_first_user() {
        let mut storage = MockStorageContext::new();
        let mut counts = vec![1_i64, 0].into_iter();
        storage
            .expect_count_users()
            .times(2)
            .returning(move || Ok(counts.next().unwrap_or_default()));

        let lifecycle = lifecycle(storage);
        assert!(!lifecycle.awaiting_bootstrap_admin().await.unwrap());
        assert!(lifecycle.awaiting_bootstrap_admin().await.unwrap());
    }
}
