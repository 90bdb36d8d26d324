//! SQLite storage for users.

use crate::framework::{ResourceStore, StoreError};
use crate::model::{User, UserCreate, UserId};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// `users` table. The UNIQUE constraint on `email` is what turns a duplicate
/// registration into [`StoreError::Conflict`].
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    /// Creates the table if it does not exist yet.
    pub async fn init(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (\
                 id INTEGER PRIMARY KEY AUTOINCREMENT, \
                 name TEXT NOT NULL, \
                 email TEXT NOT NULL UNIQUE\
             )",
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl ResourceStore<User> for SqliteUserStore {
    async fn list(&mut self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn fetch(&mut self, id: &UserId) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn insert(&mut self, params: UserCreate) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email) VALUES (?, ?) RETURNING id, name, email",
        )
        .bind(&params.name)
        .bind(&params.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn save(&mut self, user: &User) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE users SET name = ?, email = ? WHERE id = ?")
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::Backend(format!("no record {} to save", user.id)));
        }
        Ok(())
    }

    async fn remove(&mut self, id: &UserId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
