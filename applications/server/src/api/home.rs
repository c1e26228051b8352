/// Landing page
use crate::{i18n::RequestLanguage, views};
use axum::response::Html;

/// GET /
pub async fn index(RequestLanguage(language): RequestLanguage) -> Html<String> {
    Html(views::home(language))
}
