use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage, ResponseError,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::token::TokenService;
use crate::error::AppError;

/// Message sent for every rejected bearer token.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Requires a valid `Authorization: Bearer <token>` header.
///
/// On success the verified `Claims` are inserted into the request extensions,
/// where `AuthenticatedUser` picks them up. Rejected requests are answered here
/// with a 401 JSON body. The `TokenService` is read from app data.
pub struct AuthMiddleware;

/// Extracts the credentials of a `Bearer` authorization header.
///
/// The scheme name is case-insensitive (`bearer`, `BEARER` are accepted).
fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.trim().split_once(char::is_whitespace)?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let verified = match req.app_data::<web::Data<TokenService>>() {
            Some(tokens) => req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(bearer_token)
                .ok_or_else(|| AppError::Unauthorized("Missing token".into()))
                .and_then(|token| tokens.verify(token)),
            None => Err(AppError::InternalServerError(
                "TokenService not configured".into(),
            )),
        };

        match verified {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(app_err) => {
                log::debug!("rejected request to {}: {}", req.path(), app_err);
                let app_err = match app_err {
                    AppError::Unauthorized(_) => AppError::Unauthorized(UNAUTHORIZED_MESSAGE.into()),
                    other => other,
                };
                let response = req
                    .into_response(app_err.error_response())
                    .map_into_right_body();
                Box::pin(ready(Ok(response)))
            }
        }
    }
}
