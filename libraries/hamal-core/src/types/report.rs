/// Report domain types and the status state machine
use super::ids::ReportId;
use crate::error::{HamalError, Result};
use serde::{Deserialize, Serialize};

/// Moderation status of a report
///
/// Every report starts `Pending`. `Approved` and `Rejected` are terminal with
/// respect to `Pending`: once decided, a report never returns to the queue,
/// although a later decision may overwrite an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ReportStatus {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Whether an administrator has decided this report
    #[must_use]
    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An administrator's disposition of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// Status a report ends up in after this decision
    #[must_use]
    pub fn target_status(self) -> ReportStatus {
        match self {
            Self::Approve => ReportStatus::Approved,
            Self::Reject => ReportStatus::Rejected,
        }
    }
}

/// A submitted report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub title: String,
    pub content: String,
    pub status: ReportStatus,

    /// Submission timestamp (Unix epoch seconds)
    pub created_at: i64,

    /// Timestamp of the latest decision (Unix epoch seconds)
    pub decided_at: Option<i64>,
}

/// Validated input for a new report
///
/// Reports are anonymous; nothing links them back to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReport {
    pub title: String,
    pub content: String,
}

impl NewReport {
    /// Trim and validate a submission.
    ///
    /// # Errors
    /// Returns `HamalError::Validation` if either field is blank.
    pub fn new(title: &str, content: &str) -> Result<Self> {
        let title = required("title", title)?;
        let content = required("content", content)?;
        Ok(Self { title, content })
    }
}

pub(crate) fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HamalError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}
