/// Language toggle
use crate::i18n::{Language, LANG_COOKIE};
use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Redirect},
};

/// GET /set_language/:lang
///
/// Stores the choice in the `lang` cookie. Unknown codes store Arabic.
pub async fn set_language(Path(lang): Path<String>) -> impl IntoResponse {
    let language = Language::from_code(&lang).unwrap_or(Language::Arabic);
    let cookie = format!(
        "{LANG_COOKIE}={}; Path=/; Max-Age=31536000; SameSite=Lax",
        language.code()
    );

    ([(header::SET_COOKIE, cookie)], Redirect::to("/"))
}
