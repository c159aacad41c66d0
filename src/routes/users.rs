use crate::{
    auth::{
        hash_password, verify_absent_user, verify_password, AuthMiddleware, AuthenticatedUser,
        TokenService,
    },
    error::AppError,
    models::Credentials,
    store::{StoreError, UserStore},
};
use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;
use validator::Validate;

const USER_EXISTS: &str = "User Already Exists!";
/// Sent for both an unknown username and a wrong password.
pub const BAD_CREDENTIALS: &str = "Username/Password is incorrect!!";

/// Register a new user
///
/// Rejects a taken username with 401 and otherwise stores the bcrypt hash of the
/// password. The response carries `{ id, username }`, never the hash.
#[post("/register")]
pub async fn register(
    store: web::Data<dyn UserStore>,
    credentials: web::Json<Credentials>,
) -> Result<impl Responder, AppError> {
    credentials.validate()?;

    if store
        .find_user_by_username(&credentials.username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(USER_EXISTS.into()));
    }

    let password_hash = hash_password(&credentials.password)?;

    // The unique username constraint in the store settles concurrent registrations.
    let user = store
        .insert_user(&credentials.username, &password_hash)
        .await
        .map_err(|e| match e {
            StoreError::Duplicate(_) => AppError::Conflict(USER_EXISTS.into()),
            other => other.into(),
        })?;
    log::info!("registered user {}", user.id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "User registered Successfully!",
        "user": user.profile()
    })))
}

/// Login user
///
/// Answers an unknown username and a wrong password with the same 401 message,
/// after the same amount of hashing work.
/// On success returns a bearer token valid for the configured lifetime.
#[post("/login")]
pub async fn login(
    store: web::Data<dyn UserStore>,
    tokens: web::Data<TokenService>,
    credentials: web::Json<Credentials>,
) -> Result<impl Responder, AppError> {
    credentials.validate()?;

    // Unknown usernames still pay for a bcrypt verification.
    let user = match store.find_user_by_username(&credentials.username).await? {
        Some(user) => user,
        None => {
            verify_absent_user(&credentials.password);
            return Err(AppError::Unauthorized(BAD_CREDENTIALS.into()));
        }
    };

    if !verify_password(&credentials.password, &user.password_hash)? {
        return Err(AppError::Unauthorized(BAD_CREDENTIALS.into()));
    }

    let token = tokens.issue(&user.profile())?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "User Logged in Successfully!",
        "token": token
    })))
}

/// Protected resource
///
/// Returns the identity embedded in a valid bearer token.
#[get("/protected", wrap = "AuthMiddleware")]
pub async fn protected(user: AuthenticatedUser) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": "true",
        "user": user.0
    }))
}
