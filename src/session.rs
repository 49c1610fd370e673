//! Session management backed by the sessions table
//!
//! A session is an opaque token mapped to a user id. The token travels in a
//! signed cookie, so the transport stays tamper-evident while the store only
//! ever sees the token itself.

use anyhow::Result;
use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Name of the signed session cookie
pub const SESSION_COOKIE: &str = "stylesphere_session";

/// Session store mapping opaque tokens to user ids
#[derive(Clone)]
pub struct SessionStore {
    pool: PgPool,
    ttl_seconds: i64,
}

impl SessionStore {
    /// Create a new session store
    pub fn new(pool: PgPool, ttl_seconds: u64) -> Self {
        Self {
            pool,
            ttl_seconds: ttl_seconds as i64,
        }
    }

    /// Create a new session for a user and return its token
    pub async fn create(&self, user_id: &str) -> Result<String> {
        info!("Creating session for user: {}", user_id);

        let token = Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO sessions (token, user_id, expires_at, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&token)
        .bind(user_id)
        .bind(now + Duration::seconds(self.ttl_seconds))
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(token)
    }

    /// Resolve a token to the bound user id, ignoring expired sessions
    pub async fn resolve(&self, token: &str) -> Result<Option<String>> {
        let row: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT user_id
            FROM sessions
            WHERE token = $1 AND expires_at > $2
            "#,
        )
        .bind(token)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(user_id,)| user_id))
    }

    /// Delete a session. Idempotent; deleting an unknown token is a no-op.
    pub async fn delete(&self, token: &str) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Build the session cookie carrying a freshly issued token
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Build the removal cookie used on logout
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc123".to_string());
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "abc123");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn test_removal_cookie_matches_session_cookie() {
        let cookie = removal_cookie();
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.path(), Some("/"));
        assert!(cookie.value().is_empty());
    }
}
