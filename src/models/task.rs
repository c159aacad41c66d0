use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Action assigned to a task when the client does not provide one.
pub const DEFAULT_ACTION: &str = "Pending";

/// Input structure for creating or replacing a task.
///
/// Field names follow the wire format clients already speak (`ttitle`, `tdesc`,
/// `taction`). Missing required fields deserialize to an empty string and are
/// then rejected by `validate`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// The title of the task. Required and non-empty.
    #[serde(default)]
    #[validate(length(min = 1, message = "ttitle is required"))]
    pub ttitle: String,

    /// The description of the task. Required and non-empty.
    #[serde(default)]
    #[validate(length(min = 1, message = "tdesc is required"))]
    pub tdesc: String,

    /// The action the task is undergoing. Defaults to `"Pending"`.
    #[validate(length(min = 1, message = "taction must not be empty"))]
    pub taction: Option<String>,
}

impl TaskInput {
    /// Converts the request model into the fields the store persists,
    /// filling in the default action.
    pub fn into_new_task(self) -> NewTask {
        NewTask {
            title: self.ttitle,
            description: self.tdesc,
            action: self
                .taction
                .unwrap_or_else(|| DEFAULT_ACTION.to_string()),
        }
    }
}

/// The mutable fields of a task, as handed to the store on create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub action: String,
}

/// A task as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Store-generated identifier.
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "ttitle")]
    #[sqlx(rename = "ttitle")]
    pub title: String,
    #[serde(rename = "tdesc")]
    #[sqlx(rename = "tdesc")]
    pub description: String,
    #[serde(rename = "taction")]
    #[sqlx(rename = "taction")]
    pub action: String,
}

impl Task {
    /// Builds a stored task from its identifier and fields.
    pub fn new(id: Uuid, fields: NewTask) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            action: fields.action,
        }
    }
}
