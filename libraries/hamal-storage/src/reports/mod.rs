//! Report queries

use crate::error::{Result, StorageError};
use hamal_core::types::{NewReport, Report, ReportId, ReportStatus};
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct ReportRow {
    id: ReportId,
    title: String,
    content: String,
    status: String,
    created_at: i64,
    decided_at: Option<i64>,
}

impl TryFrom<ReportRow> for Report {
    type Error = StorageError;

    fn try_from(row: ReportRow) -> Result<Self> {
        let status = ReportStatus::from_str(&row.status).ok_or_else(|| {
            StorageError::CorruptRow(format!("report {} has status '{}'", row.id, row.status))
        })?;

        Ok(Report {
            id: row.id,
            title: row.title,
            content: row.content,
            status,
            created_at: row.created_at,
            decided_at: row.decided_at,
        })
    }
}

/// Insert a new report with status `pending`
pub async fn create(pool: &SqlitePool, report: &NewReport) -> Result<Report> {
    let now = chrono::Utc::now().timestamp();
    let status = ReportStatus::Pending;

    let result = sqlx::query(
        "INSERT INTO reports (title, content, status, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(&report.title)
    .bind(&report.content)
    .bind(status.as_str())
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Report {
        id: ReportId::new(result.last_insert_rowid()),
        title: report.title.clone(),
        content: report.content.clone(),
        status,
        created_at: now,
        decided_at: None,
    })
}

/// Get all reports in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Report>> {
    let rows = sqlx::query_as::<_, ReportRow>(
        "SELECT id, title, content, status, created_at, decided_at FROM reports ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Report::try_from).collect()
}

/// Overwrite a report's status
///
/// Returns `None` when no report has this id. Only decided statuses may be
/// written; a report never goes back to `pending`.
pub async fn set_status(
    pool: &SqlitePool,
    id: ReportId,
    status: ReportStatus,
) -> Result<Option<Report>> {
    if !status.is_decided() {
        return Err(StorageError::InvalidStatus(status.to_string()));
    }

    let now = chrono::Utc::now().timestamp();

    let row = sqlx::query_as::<_, ReportRow>(
        "UPDATE reports SET status = ?, decided_at = ? WHERE id = ?
         RETURNING id, title, content, status, created_at, decided_at",
    )
    .bind(status.as_str())
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(Report::try_from).transpose()
}
