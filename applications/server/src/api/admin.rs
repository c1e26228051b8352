/// Admin panel routes
use crate::{
    error::Result, i18n::RequestLanguage, middleware::AdminUser, state::AppState, views,
};
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use hamal_core::{Decision, ReportId};

/// GET /admin
/// List every report with approve/reject links
pub async fn list_reports(
    State(app_state): State<AppState>,
    RequestLanguage(language): RequestLanguage,
) -> Result<Html<String>> {
    let reports = app_state.lifecycle.list_all().await?;
    Ok(Html(views::admin_list(language, &reports)))
}

/// GET /admin/approve/:id
pub async fn approve(
    Path(id): Path<i64>,
    State(app_state): State<AppState>,
    admin: Option<AdminUser>,
) -> Result<Redirect> {
    decide(&app_state, ReportId::new(id), Decision::Approve, admin).await
}

/// GET /admin/reject/:id
pub async fn reject(
    Path(id): Path<i64>,
    State(app_state): State<AppState>,
    admin: Option<AdminUser>,
) -> Result<Redirect> {
    decide(&app_state, ReportId::new(id), Decision::Reject, admin).await
}

async fn decide(
    app_state: &AppState,
    id: ReportId,
    decision: Decision,
    admin: Option<AdminUser>,
) -> Result<Redirect> {
    if let Some(admin) = &admin {
        tracing::debug!(report_id = %id, ?decision, admin = admin.username(), "Admin decision");
    }

    app_state.lifecycle.decide(id, decision).await?;
    Ok(Redirect::to("/admin"))
}
