#![doc = "The `taskboard` library crate."]
#![doc = ""]
#![doc = "Domain models, document store backends, authentication (bcrypt passwords and"]
#![doc = "signed bearer tokens), route handlers and error handling for the task service."]
#![doc = "The binary (`main.rs`) wires these together into an actix-web server."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

pub use crate::error::AppError;
pub use crate::models::{Task, TaskInput, UserProfile};
