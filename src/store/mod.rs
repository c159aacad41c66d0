//! Document store abstraction.
//!
//! Handlers talk to the `tasks` and `users` collections through the
//! [`TaskStore`] and [`UserStore`] traits. The concrete backend is chosen once
//! at startup and injected as `web::Data<dyn TaskStore>` / `web::Data<dyn UserStore>`.

pub mod memory;
pub mod postgres;

use actix_web::web;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::{NewTask, Task, User};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors reported by a store backend.
#[derive(Debug)]
pub enum StoreError {
    /// A unique constraint rejected the write.
    Duplicate(String),
    /// The backend is unreachable or the operation failed.
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::Duplicate(msg) => write!(f, "Duplicate: {}", msg),
            StoreError::Backend(msg) => write!(f, "Backend: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;

/// Operations over the `tasks` collection.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persists a new task under a freshly generated id.
    async fn create_task(&self, fields: NewTask) -> StoreResult<Task>;

    /// Returns every task in insertion order.
    async fn list_tasks(&self) -> StoreResult<Vec<Task>>;

    async fn get_task(&self, id: Uuid) -> StoreResult<Option<Task>>;

    /// Replaces all mutable fields. `None` when no task has this id.
    async fn update_task(&self, id: Uuid, fields: NewTask) -> StoreResult<Option<Task>>;

    /// Returns `false` when no task has this id.
    async fn delete_task(&self, id: Uuid) -> StoreResult<bool>;
}

/// Operations over the `users` collection.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Persists a new user. Fails with [`StoreError::Duplicate`] if the username is taken.
    async fn insert_user(&self, username: &str, password_hash: &str) -> StoreResult<User>;
}

/// Shares one backend as both handler-facing views.
pub fn into_app_data<S>(store: S) -> (web::Data<dyn TaskStore>, web::Data<dyn UserStore>)
where
    S: TaskStore + UserStore + 'static,
{
    let store = Arc::new(store);
    let tasks: Arc<dyn TaskStore> = store.clone();
    let users: Arc<dyn UserStore> = store;
    (web::Data::from(tasks), web::Data::from(users))
}
