//! Authentication middleware for session cookie validation

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::SignedCookieJar;

use crate::{
    error::ApiError,
    session::{SESSION_COOKIE, SessionStore},
    state::AppState,
};

/// Authenticated user information attached to the request
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
}

/// Resolve the session cookie to a user id, if a valid session is attached
pub async fn resolve_session(
    sessions: &SessionStore,
    jar: &SignedCookieJar,
) -> Result<Option<String>, ApiError> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Ok(None);
    };

    let user_id = sessions.resolve(cookie.value()).await?;
    Ok(user_id)
}

/// Middleware guarding routes that require an authenticated session.
/// Inserts an [`AuthUser`] into the request extensions on success.
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let user_id = resolve_session(&state.sessions, &jar)
        .await?
        .ok_or_else(|| ApiError::Auth("Not authenticated".to_string()))?;

    req.extensions_mut().insert(AuthUser { id: user_id });

    Ok(next.run(req).await)
}
