use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use super::{StoreError, StoreResult, TaskStore, UserStore};
use crate::models::{NewTask, Task, User};

const MAX_CONNECTIONS: u32 = 5;

/// PostgreSQL-backed store.
///
/// Each collection is a table with a `seq` column that records insertion order.
/// `users.username` carries a unique index, so concurrent registrations of the
/// same name cannot both succeed.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connects to `database_url` and applies the embedded migrations.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StoreError::Backend(format!("migration failed: {}", e)))?;
        log::info!("database migrations applied");

        Ok(Self { pool })
    }
}

/// Unique violations become `Duplicate`, everything else is a backend failure.
impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> StoreError {
        match &error {
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                StoreError::Duplicate(db_error.message().to_string())
            }
            _ => StoreError::Backend(error.to_string()),
        }
    }
}

#[async_trait]
impl TaskStore for PgStore {
    async fn create_task(&self, fields: NewTask) -> StoreResult<Task> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (id, ttitle, tdesc, taction)
             VALUES ($1, $2, $3, $4)
             RETURNING id, ttitle, tdesc, taction",
        )
        .bind(Uuid::new_v4())
        .bind(fields.title)
        .bind(fields.description)
        .bind(fields.action)
        .fetch_one(&self.pool)
        .await?;
        Ok(task)
    }

    async fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        let tasks =
            sqlx::query_as::<_, Task>("SELECT id, ttitle, tdesc, taction FROM tasks ORDER BY seq")
                .fetch_all(&self.pool)
                .await?;
        Ok(tasks)
    }

    async fn get_task(&self, id: Uuid) -> StoreResult<Option<Task>> {
        let task =
            sqlx::query_as::<_, Task>("SELECT id, ttitle, tdesc, taction FROM tasks WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(task)
    }

    async fn update_task(&self, id: Uuid, fields: NewTask) -> StoreResult<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks
             SET ttitle = $1, tdesc = $2, taction = $3
             WHERE id = $4
             RETURNING id, ttitle, tdesc, taction",
        )
        .bind(fields.title)
        .bind(fields.description)
        .bind(fields.action)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(task)
    }

    async fn delete_task(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn insert_user(&self, username: &str, password_hash: &str) -> StoreResult<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, password_hash)
             VALUES ($1, $2, $3)
             RETURNING id, username, password_hash",
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }
}
