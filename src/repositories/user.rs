//! User repository for database operations

use anyhow::Result;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::User;

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user with a freshly hashed password
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<User> {
        info!("Creating new user: {}", username);

        let salt = SaltString::generate(&mut rand::thread_rng());
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
            .to_string();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, password_hash, full_name, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, email, password_hash, full_name, created_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(username)
        .bind(email)
        .bind(&password_hash)
        .bind(full_name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, full_name, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, full_name, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, full_name, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Check whether an email is already owned by a user other than `user_id`
    pub async fn email_taken_by_other(&self, email: &str, user_id: &str) -> Result<bool> {
        let existing: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT id
            FROM users
            WHERE email = $1 AND id <> $2
            "#,
        )
        .bind(email)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(existing.is_some())
    }

    /// Apply a partial profile update; absent fields keep their value
    pub async fn update_profile(
        &self,
        user_id: &str,
        full_name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>> {
        info!("Updating profile for user: {}", user_id);

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET full_name = COALESCE($1, full_name),
                email = COALESCE($2, email)
            WHERE id = $3
            RETURNING id, username, email, password_hash, full_name, created_at
            "#,
        )
        .bind(full_name)
        .bind(email)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Verify a user's password against the stored hash
    pub fn verify_password(&self, user: &User, password: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| anyhow::anyhow!("Failed to parse password hash: {}", e))?;

        let argon2 = Argon2::default();
        let result = argon2.verify_password(password.as_bytes(), &parsed_hash);

        Ok(result.is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash(password: &str) -> String {
        let salt = SaltString::generate(&mut rand::thread_rng());
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    fn user_with_password(password: &str) -> User {
        User {
            id: "u-1".to_string(),
            username: "maya".to_string(),
            email: "maya@example.com".to_string(),
            password_hash: hash(password),
            full_name: String::new(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_verify_password_accepts_correct_password() {
        let repo = UserRepository {
            pool: PgPool::connect_lazy("postgresql://localhost/unused").unwrap(),
        };
        let user = user_with_password("hunter22!A");

        assert!(repo.verify_password(&user, "hunter22!A").unwrap());
    }

    #[tokio::test]
    async fn test_verify_password_rejects_wrong_password() {
        let repo = UserRepository {
            pool: PgPool::connect_lazy("postgresql://localhost/unused").unwrap(),
        };
        let user = user_with_password("hunter22!A");

        assert!(!repo.verify_password(&user, "wrong-password").unwrap());
    }

    #[tokio::test]
    async fn test_verify_password_rejects_garbage_hash() {
        let repo = UserRepository {
            pool: PgPool::connect_lazy("postgresql://localhost/unused").unwrap(),
        };
        let mut user = user_with_password("hunter22!A");
        user.password_hash = "not-a-phc-string".to_string();

        assert!(repo.verify_password(&user, "hunter22!A").is_err());
    }
}
