/// Registration routes
use crate::{error::Result, i18n::RequestLanguage, state::AppState, views};
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

/// Registration fields; the short names `u` and `p` are accepted too
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default, alias = "u")]
    pub username: String,
    #[serde(default, alias = "p")]
    pub password: String,
}

/// GET /register
pub async fn register_form(
    State(app_state): State<AppState>,
    RequestLanguage(language): RequestLanguage,
) -> Result<Html<String>> {
    let bootstrap_pending = app_state.lifecycle.awaiting_bootstrap_admin().await?;
    Ok(Html(views::register_form(language, bootstrap_pending)))
}

/// POST /register
/// Create an account; the first one ever becomes the administrator
pub async fn register(
    State(app_state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect> {
    app_state
        .lifecycle
        .register_user(&form.username, &form.password)
        .await?;

    Ok(Redirect::to("/"))
}
