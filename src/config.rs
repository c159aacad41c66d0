use std::env;
use std::fmt;

use crate::auth::token::{DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS};

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "{} must be set", var),
            ConfigError::Invalid(var, value) => write!(f, "{} has an invalid value: {}", var, value),
        }
    }
}

impl std::error::Error for ConfigError {}

pub struct Config {
    /// PostgreSQL URL. When absent the in-memory store is used.
    pub database_url: Option<String>,
    pub server_port: u16,
    pub server_host: String,
    /// HMAC secret for signing bearer tokens.
    pub secret_key: String,
    pub token_ttl_secs: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            server_port: parse_var("PORT", 3000)?,
            server_host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            secret_key: env::var("SECRET_KEY").map_err(|_| ConfigError::Missing("SECRET_KEY"))?,
            token_ttl_secs: parse_token_ttl()?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

/// Token lifetime must lie in `1..=MAX_TOKEN_TTL_SECS`.
fn parse_token_ttl() -> Result<i64, ConfigError> {
    let ttl_secs = parse_var("TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?;
    if (1..=MAX_TOKEN_TTL_SECS).contains(&ttl_secs) {
        Ok(ttl_secs)
    } else {
        Err(ConfigError::Invalid("TOKEN_TTL_SECS", ttl_secs.to_string()))
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(default),
    }
}
