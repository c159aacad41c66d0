use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::UserProfile;

/// Lifetime of a login token: two hours.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 7200;

/// Longest token lifetime accepted from configuration: thirty days.
pub const MAX_TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Represents the claims encoded within a JWT.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Identity of the user the token was issued to.
    #[serde(rename = "userData")]
    pub user_data: UserProfile,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Signs and verifies bearer tokens with a server-held HMAC secret.
///
/// Built once from configuration and shared with handlers and the auth
/// middleware as `web::Data<TokenService>`.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Issues a token for `user` that expires `ttl_secs` after now.
    pub fn issue(&self, user: &UserProfile) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = Duration::try_seconds(self.ttl_secs)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::InternalServerError(format!(
                    "Token lifetime of {}s is out of range",
                    self.ttl_secs
                ))
            })?;
        let claims = Claims {
            user_data: user.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
    }

    /// Verifies signature and expiry, returning the embedded claims.
    ///
    /// Expiry is checked without leeway: a token is rejected as soon as `exp` has passed.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {:?}", e.kind())))
    }
}
