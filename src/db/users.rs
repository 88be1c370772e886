//! Credential store: owns the `users` table and every digest/salt
//! computation. No read path exposes the stored digest or salt.

use crate::db::SqlitePool;
use crate::db::models::{PublicUser, UserRecord};
use crate::error::RealtyError;
use crate::password;
use tracing::info;

#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new account with role `user`. A unique-constraint hit
    /// on username or email surfaces as `RealtyError::Conflict`; the
    /// insert either commits whole or not at all.
    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        email: Option<&str>,
    ) -> Result<i64, RealtyError> {
        let salt = password::generate_salt();
        let password_hash = password::digest(password, &salt);

        let result = sqlx::query(
            "INSERT INTO users (username, password_hash, salt, role, email) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(username)
        .bind(password_hash)
        .bind(salt)
        .bind("user")
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(RealtyError::from_insert)?;

        let id = result.last_insert_rowid();
        info!(user = %username, id, "user registered");
        Ok(id)
    }

    /// Verify credentials. A missing username and a wrong password are
    /// deliberately the same `None` result. On success the last-login
    /// timestamp is bumped before the identity is returned.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<PublicUser>, RealtyError> {
        let row: Option<(i64, String, String, String, String)> = sqlx::query_as(
            "SELECT id, username, password_hash, salt, role FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        let Some((id, username, password_hash, salt, role)) = row else {
            return Ok(None);
        };

        if !password::verify(password, &salt, &password_hash) {
            return Ok(None);
        }

        sqlx::query("UPDATE users SET last_login = CURRENT_TIMESTAMP WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        info!(user = %username, id, "login successful");
        Ok(Some(PublicUser { id, username, role }))
    }

    /// All accounts, most recently created first.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, RealtyError> {
        let rows = sqlx::query_as(
            r#"SELECT id, username, role, email, created_at, last_login
               FROM users
               ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Delete by id. Returns whether a row was removed. Enrollments and
    /// valuations referencing the id are left in place.
    pub async fn delete_user(&self, id: i64) -> Result<bool, RealtyError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
