pub mod docs;
pub mod tasks;
pub mod users;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::error::AppError;

/// Registers every route of the service at the root path.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(tasks::create_task)
        .service(tasks::get_all_tasks)
        .service(tasks::get_task_by_id)
        .service(tasks::update_task)
        .service(tasks::delete_task)
        .service(users::register)
        .service(users::login)
        .service(users::protected)
        .service(docs::api_docs);
}

/// JSON body settings: unreadable bodies are answered with the same JSON error shape as validation failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}
