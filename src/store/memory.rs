use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, StoreResult, TaskStore, UserStore};
use crate::models::{NewTask, Task, User};

/// In-process store used when no database is configured, and by the tests.
///
/// Both collections keep insertion order. Username uniqueness is checked and
/// the user inserted under the same write lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks: RwLock<Vec<Task>>,
    users: RwLock<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn create_task(&self, fields: NewTask) -> StoreResult<Task> {
        let task = Task::new(Uuid::new_v4(), fields);
        self.tasks.write().await.push(task.clone());
        Ok(task)
    }

    async fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        Ok(self.tasks.read().await.clone())
    }

    async fn get_task(&self, id: Uuid) -> StoreResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.iter().find(|task| task.id == id).cloned())
    }

    async fn update_task(&self, id: Uuid, fields: NewTask) -> StoreResult<Option<Task>> {
        let mut tasks = self.tasks.write().await;
        match tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                *task = Task::new(id, fields);
                Ok(Some(task.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_task(&self, id: Uuid) -> StoreResult<bool> {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        Ok(tasks.len() != before)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.username == username).cloned())
    }

    async fn insert_user(&self, username: &str, password_hash: &str) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|user| user.username == username) {
            return Err(StoreError::Duplicate(format!(
                "username {} already exists",
                username
            )));
        }
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }
}
