use crate::{
    error::AppError,
    models::TaskInput,
    store::TaskStore,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

const TASK_NOT_FOUND: &str = "Task Not Found";
const ID_NOT_FOUND: &str = "Something went wrong!ID not found";

/// Parses a path id. Malformed ids are reported exactly like absent ones.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/// Creates a new task.
///
/// ## Request Body:
/// - `ttitle`: The title of the task (required).
/// - `tdesc`: The description of the task (required).
/// - `taction` (optional): The action the task is undergoing. Defaults to `"Pending"`.
///
/// ## Responses:
/// - `200 OK`: `{ message, taskData }` with the stored task, including its `_id`.
/// - `400 Bad Request`: If the body is malformed or misses a required field.
/// - `500 Internal Server Error`: If the store fails.
#[post("/createTask")]
pub async fn create_task(
    store: web::Data<dyn TaskStore>,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = store.create_task(task_data.into_inner().into_new_task()).await?;
    log::info!("created task {}", task.id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task saved Successfully",
        "taskData": task
    })))
}

/// Lists every task in insertion order.
///
/// ## Responses:
/// - `200 OK`: `{ message, taskData: [...] }`. The list is empty, never null, when no task exists.
/// - `500 Internal Server Error`: If the store fails.
#[get("/getAllTasks")]
pub async fn get_all_tasks(store: web::Data<dyn TaskStore>) -> Result<impl Responder, AppError> {
    let tasks = store.list_tasks().await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Tasks fetched Successfully",
        "taskData": tasks
    })))
}

/// Retrieves a single task by id.
///
/// ## Responses:
/// - `200 OK`: `{ message, taskData }`.
/// - `404 Not Found`: If no task has this id, or the id is malformed.
/// - `500 Internal Server Error`: If the store fails.
#[get("/getTasksById/{id}")]
pub async fn get_task_by_id(
    store: web::Data<dyn TaskStore>,
    task_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let id = parse_id(&task_id).ok_or_else(|| AppError::NotFound(TASK_NOT_FOUND.into()))?;

    match store.get_task(id).await? {
        Some(task) => Ok(HttpResponse::Ok().json(json!({
            "message": "Tasks Successfully fetched",
            "taskData": task
        }))),
        None => Err(AppError::NotFound(TASK_NOT_FOUND.into())),
    }
}

/// Replaces the title, description and action of a task.
///
/// There is no partial update: an omitted `taction` resets the action to `"Pending"`.
///
/// ## Responses:
/// - `200 OK`: `{ message, updated }` with the task as stored after the update.
/// - `400 Bad Request`: If no task has this id, or the body is invalid.
/// - `500 Internal Server Error`: If the store fails.
#[put("/updateTask/{id}")]
pub async fn update_task(
    store: web::Data<dyn TaskStore>,
    task_id: web::Path<String>,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;
    let id = parse_id(&task_id).ok_or_else(|| AppError::BadRequest(ID_NOT_FOUND.into()))?;

    let updated = store
        .update_task(id, task_data.into_inner().into_new_task())
        .await?
        .ok_or_else(|| AppError::BadRequest(ID_NOT_FOUND.into()))?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task Updated Succesfully",
        "updated": updated
    })))
}

/// Deletes a task by id.
///
/// ## Responses:
/// - `200 OK`: `{ message }`.
/// - `400 Bad Request`: If no task has this id. A second delete of the same id lands here.
/// - `500 Internal Server Error`: If the store fails.
#[delete("/deleteTask/{id}")]
pub async fn delete_task(
    store: web::Data<dyn TaskStore>,
    task_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let id = parse_id(&task_id).ok_or_else(|| AppError::BadRequest(ID_NOT_FOUND.into()))?;

    if !store.delete_task(id).await? {
        return Err(AppError::BadRequest(ID_NOT_FOUND.into()));
    }
    log::info!("deleted task {}", id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task Deleted Succesfully"
    })))
}
