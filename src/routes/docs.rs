//! Machine-readable API description.
//!
//! Serves an OpenAPI 3.0 document for the task and user routes. It is purely
//! descriptive; nothing in the request handling reads it.

use actix_web::{get, HttpResponse, Responder};
use lazy_static::lazy_static;
use serde_json::{json, Map, Value};

lazy_static! {
    static ref OPENAPI_DOCUMENT: Value = build_document();
}

fn message_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/Message" }
            }
        }
    })
}

fn id_parameter() -> Value {
    json!({
        "in": "path",
        "name": "id",
        "required": true,
        "schema": { "type": "string" },
        "description": "The task id"
    })
}

fn task_body() -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/TaskInput" }
            }
        }
    })
}

fn user_body() -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/User" }
            }
        }
    })
}

fn build_document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Task API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "A simple CRUD Application."
        },
        "servers": [{ "url": "/" }],
        "tags": [
            { "name": "Tasks", "description": "The tasks managing API" },
            { "name": "Users", "description": "User Registration API" }
        ],
        "paths": paths(),
        "components": components()
    })
}

fn paths() -> Value {
    let mut paths = Map::new();
    paths.insert(
        "/createTask".into(),
        json!({
            "post": {
                "summary": "Create a new task",
                "tags": ["Tasks"],
                "requestBody": task_body(),
                "responses": {
                    "200": { "description": "The task was successfully created" },
                    "400": message_response("The request body is invalid"),
                    "500": message_response("Some server error")
                }
            }
        }),
    );
    paths.insert(
        "/getAllTasks".into(),
        json!({
            "get": {
                "summary": "Returns the list of all the tasks",
                "tags": ["Tasks"],
                "responses": {
                    "200": { "description": "The list of the tasks" },
                    "500": message_response("Some server error")
                }
            }
        }),
    );
    paths.insert(
        "/getTasksById/{id}".into(),
        json!({
            "get": {
                "summary": "Get the task by id",
                "tags": ["Tasks"],
                "parameters": [id_parameter()],
                "responses": {
                    "200": { "description": "The task description by id" },
                    "404": message_response("The task was not found"),
                    "500": message_response("Some server error")
                }
            }
        }),
    );
    paths.insert(
        "/updateTask/{id}".into(),
        json!({
            "put": {
                "summary": "Update the task by the id",
                "tags": ["Tasks"],
                "parameters": [id_parameter()],
                "requestBody": task_body(),
                "responses": {
                    "200": { "description": "The task was updated" },
                    "400": message_response("The task was not found, or the body is invalid"),
                    "500": message_response("Some server error")
                }
            }
        }),
    );
    paths.insert(
        "/deleteTask/{id}".into(),
        json!({
            "delete": {
                "summary": "Remove the task by id",
                "tags": ["Tasks"],
                "parameters": [id_parameter()],
                "responses": {
                    "200": message_response("The task was deleted"),
                    "400": message_response("The task was not found"),
                    "500": message_response("Some server error")
                }
            }
        }),
    );
    paths.insert(
        "/register".into(),
        json!({
            "post": {
                "summary": "Create a new user",
                "tags": ["Users"],
                "requestBody": user_body(),
                "responses": {
                    "200": { "description": "The user was successfully created" },
                    "401": message_response("The user already exists"),
                    "500": message_response("Some server error")
                }
            }
        }),
    );
    paths.insert(
        "/login".into(),
        json!({
            "post": {
                "summary": "Log in and receive a bearer token",
                "tags": ["Users"],
                "requestBody": user_body(),
                "responses": {
                    "200": { "description": "The user was logged in" },
                    "401": message_response("Username/Password is incorrect"),
                    "500": message_response("Some server error")
                }
            }
        }),
    );
    paths.insert(
        "/protected".into(),
        json!({
            "get": {
                "summary": "Return the identity carried by the bearer token",
                "tags": ["Users"],
                "security": [{ "bearerAuth": [] }],
                "responses": {
                    "200": { "description": "The token is valid" },
                    "401": message_response("The token is missing, invalid or expired")
                }
            }
        }),
    );
    Value::Object(paths)
}

fn components() -> Value {
    let task_input = json!({
        "type": "object",
        "required": ["ttitle", "tdesc"],
        "properties": {
            "ttitle": { "type": "string", "description": "The task title" },
            "tdesc": { "type": "string", "description": "The task description" },
            "taction": {
                "type": "string",
                "description": "The task undergoing action",
                "default": "Pending"
            }
        },
        "example": {
            "ttitle": "Task 1",
            "tdesc": "Task is going on",
            "taction": "Pending"
        }
    });
    let task = json!({
        "allOf": [
            { "$ref": "#/components/schemas/TaskInput" },
            {
                "type": "object",
                "properties": {
                    "_id": {
                        "type": "string",
                        "format": "uuid",
                        "description": "The auto-generated id of the task"
                    }
                }
            }
        ]
    });
    let user = json!({
        "type": "object",
        "required": ["username", "password"],
        "properties": {
            "username": { "type": "string" },
            "password": { "type": "string" }
        },
        "example": { "username": "rudra", "password": "password" }
    });
    let message = json!({
        "type": "object",
        "properties": {
            "message": { "type": "string" },
            "error": { "type": "string" }
        }
    });

    json!({
        "securitySchemes": {
            "bearerAuth": {
                "type": "http",
                "scheme": "bearer",
                "bearerFormat": "JWT"
            }
        },
        "schemas": {
            "Message": message,
            "TaskInput": task_input,
            "Task": task,
            "User": user
        }
    })
}

/// Serves the OpenAPI document.
#[get("/api-docs")]
pub async fn api_docs() -> impl Responder {
    HttpResponse::Ok().json(&*OPENAPI_DOCUMENT)
}
