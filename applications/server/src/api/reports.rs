/// Report submission routes
use crate::{error::Result, i18n::RequestLanguage, state::AppState, views};
use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

/// Report fields; the short names `t` and `c` are accepted too
#[derive(Debug, Deserialize)]
pub struct ReportForm {
    #[serde(default, alias = "t")]
    pub title: String,
    #[serde(default, alias = "c")]
    pub content: String,
}

/// GET /add
pub async fn report_form(RequestLanguage(language): RequestLanguage) -> Html<String> {
    Html(views::report_form(language))
}

/// POST /add
/// Submit an anonymous report; replies with a plain-text confirmation
pub async fn submit_report(
    State(app_state): State<AppState>,
    RequestLanguage(language): RequestLanguage,
    Form(form): Form<ReportForm>,
) -> Result<&'static str> {
    app_state
        .lifecycle
        .submit(&form.title, &form.content)
        .await?;

    Ok(language.messages().submitted)
}
