#![allow(dead_code)]

use actix_cors::Cors;
use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::middleware::Logger;
use actix_web::{test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};
use uuid::Uuid;

use taskboard::auth::token::DEFAULT_TOKEN_TTL_SECS;
use taskboard::auth::TokenService;
use taskboard::models::{NewTask, Task, User};
use taskboard::routes;
use taskboard::store::{
    into_app_data, MemoryStore, StoreError, StoreResult, TaskStore, UserStore,
};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Builds the full application over a fresh in-memory store.
pub async fn init_app() -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    init_app_with_tokens(TokenService::new(TEST_SECRET, DEFAULT_TOKEN_TTL_SECS)).await
}

pub async fn init_app_with_tokens(
    tokens: TokenService,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    init_app_with(MemoryStore::new(), tokens).await
}

/// Builds the full application over `store`.
pub async fn init_app_with<S>(
    store: S,
    tokens: TokenService,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
where
    S: TaskStore + UserStore + 'static,
{
    let (tasks, users) = into_app_data(store);
    test::init_service(
        App::new()
            .app_data(tasks)
            .app_data(users)
            .app_data(web::Data::new(tokens))
            .app_data(routes::json_config())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config),
    )
    .await
}

/// Sends `req` and returns the status with the body parsed as JSON (`Null` if it is not JSON).
pub async fn send<S, B>(app: &S, req: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub async fn register<S, B>(app: &S, username: &str, password: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "username": username, "password": password }))
        .to_request();
    send(app, req).await
}

pub async fn login<S, B>(app: &S, username: &str, password: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "username": username, "password": password }))
        .to_request();
    send(app, req).await
}

pub async fn create_task<S, B>(app: &S, payload: Value) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/createTask")
        .set_json(payload)
        .to_request();
    send(app, req).await
}

/// Detail reported by [`FailingStore`]; it must never reach a response body.
pub const BACKEND_DETAIL: &str = "connection refused: db.internal:5432";

/// A store whose backend is unreachable: every operation fails.
pub struct FailingStore;

fn unreachable_backend<T>() -> StoreResult<T> {
    Err(StoreError::Backend(BACKEND_DETAIL.to_string()))
}

#[async_trait]
impl TaskStore for FailingStore {
    async fn create_task(&self, _fields: NewTask) -> StoreResult<Task> {
        unreachable_backend()
    }

    async fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        unreachable_backend()
    }

    async fn get_task(&self, _id: Uuid) -> StoreResult<Option<Task>> {
        unreachable_backend()
    }

    async fn update_task(&self, _id: Uuid, _fields: NewTask) -> StoreResult<Option<Task>> {
        unreachable_backend()
    }

    async fn delete_task(&self, _id: Uuid) -> StoreResult<bool> {
        unreachable_backend()
    }
}

#[async_trait]
impl UserStore for FailingStore {
    async fn find_user_by_username(&self, _username: &str) -> StoreResult<Option<User>> {
        unreachable_backend()
    }

    async fn insert_user(&self, _username: &str, _password_hash: &str) -> StoreResult<User> {
        unreachable_backend()
    }
}
