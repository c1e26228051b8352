/// Admin panel authentication middleware
use crate::{error::ServerError, state::AppState};
use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use hamal_core::User;

/// The administrator who passed the guard
/// Can be used as an extractor in handlers
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

impl AdminUser {
    pub fn username(&self) -> &str {
        &self.0.username
    }
}

/// Middleware that gates `/admin*` behind HTTP Basic credentials
///
/// A no-op unless `admin.require_auth` is set. When enabled, only a stored
/// user with role `admin` and a matching password gets through.
pub async fn admin_guard(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    if !state.admin_requires_auth {
        return Ok(next.run(request).await);
    }

    let (username, password) = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(parse_basic)
        .ok_or_else(|| ServerError::Unauthorized("Admin credentials required".to_string()))?;

    let user = state
        .lifecycle
        .authenticate(&username, &password)
        .await?
        .ok_or_else(|| {
            tracing::warn!(%username, "Admin login failed");
            ServerError::Unauthorized("Invalid username or password".to_string())
        })?;

    if !user.role.is_admin() {
        tracing::warn!(%username, "Non-admin attempted to reach admin panel");
        return Err(ServerError::Forbidden(
            "Administrator role required".to_string(),
        ));
    }

    request.extensions_mut().insert(AdminUser(user));

    Ok(next.run(request).await)
}

/// Decode `Basic <base64(user:pass)>`
fn parse_basic(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Implement FromRequestParts so AdminUser can be used as an extractor
#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminUser>()
            .cloned()
            .ok_or_else(|| ServerError::Unauthorized("Not authenticated".to_string()))
    }
}
