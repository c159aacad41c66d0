use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::middleware::UNAUTHORIZED_MESSAGE;
use crate::auth::token::Claims;
use crate::error::AppError;
use crate::models::UserProfile;

/// The identity carried by a verified bearer token.
///
/// Only available on routes wrapped in `AuthMiddleware`, which puts the
/// verified `Claims` into the request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub UserProfile);

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AuthenticatedUser(claims.user_data.clone()))),
            None => {
                let err = AppError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string());
                ready(Err(err.into()))
            }
        }
    }
}
