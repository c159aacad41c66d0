//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used by every handler.
//! Each variant maps to a fixed HTTP status and a JSON body carrying a
//! human-readable `message`, matching the response shapes the API has always used.
//!
//! `AppError` implements `actix_web::error::ResponseError`, and `From` conversions
//! exist for `StoreError` and `validator::ValidationErrors`, so handlers can
//! propagate failures with `?`. Hashing and token failures are mapped where they
//! happen, in the `auth` module.
//!
//! Server-side failures are logged in full but only a coarse category is sent
//! back to the client.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

use crate::store::StoreError;

/// Message returned with every 500-class response.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something Went Wrong!";

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// The request body is malformed or misses a required field (HTTP 400).
    Validation(String),
    /// The request referenced something that does not exist, on a mutating route (HTTP 400).
    BadRequest(String),
    /// The requested resource was not found (HTTP 404).
    NotFound(String),
    /// The entity already exists (HTTP 401).
    ///
    /// Duplicate registrations have always been answered with 401, and clients rely on it.
    Conflict(String),
    /// Authentication failed or is missing (HTTP 401).
    Unauthorized(String),
    /// The document store is unreachable or an operation failed (HTTP 500).
    Persistence(String),
    /// Any other unexpected server-side failure, e.g. hashing or signing (HTTP 500).
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Persistence(msg) => write!(f, "Persistence Error: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Persistence(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            AppError::Validation(details) => builder.json(json!({
                "message": "Invalid request body",
                "error": details
            })),
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::Unauthorized(msg) => builder.json(json!({
                "message": msg
            })),
            AppError::Persistence(details) => {
                log::error!("store failure: {}", details);
                builder.json(json!({
                    "message": GENERIC_FAILURE_MESSAGE,
                    "error": "persistence error"
                }))
            }
            AppError::InternalServerError(details) => {
                log::error!("internal failure: {}", details);
                builder.json(json!({
                    "message": GENERIC_FAILURE_MESSAGE,
                    "error": "internal error"
                }))
            }
        }
    }
}

/// Duplicate keys become `Conflict`; everything else the store reports is a persistence failure.
impl From<StoreError> for AppError {
    fn from(error: StoreError) -> AppError {
        match error {
            StoreError::Duplicate(what) => AppError::Conflict(what),
            StoreError::Backend(msg) => AppError::Persistence(msg),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::Validation(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(error: AppError) -> serde_json::Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_error_statuses() {
        let cases = [
            (AppError::Validation("ttitle".into()), 400),
            (AppError::BadRequest("missing".into()), 400),
            (AppError::NotFound("Task Not Found".into()), 404),
            (AppError::Conflict("User Already Exists!".into()), 401),
            (AppError::Unauthorized("nope".into()), 401),
            (AppError::Persistence("connection reset".into()), 500),
            (AppError::InternalServerError("bcrypt".into()), 500),
        ];
        for (error, expected) in cases {
            assert_eq!(error.error_response().status(), expected, "{}", error);
        }
    }

    #[actix_rt::test]
    async fn test_client_errors_carry_message_only() {
        let json = body_json(AppError::NotFound("Task Not Found".into())).await;
        assert_eq!(json, json!({ "message": "Task Not Found" }));
    }

    #[actix_rt::test]
    async fn test_server_errors_hide_details() {
        let json = body_json(AppError::Persistence("password=hunter2 host=db".into())).await;
        assert_eq!(json["message"], GENERIC_FAILURE_MESSAGE);
        assert_eq!(json["error"], "persistence error");
        assert!(!json.to_string().contains("hunter2"));
    }

    #[test]
    fn test_store_error_conversion() {
        match AppError::from(StoreError::Duplicate("taken".into())) {
            AppError::Conflict(msg) => assert_eq!(msg, "taken"),
            other => panic!("unexpected conversion: {:?}", other),
        }
        match AppError::from(StoreError::Backend("down".into())) {
            AppError::Persistence(msg) => assert_eq!(msg, "down"),
            other => panic!("unexpected conversion: {:?}", other),
        }
    }
}
