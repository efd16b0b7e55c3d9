use std::{
    env,
    fmt::Display,
    str::FromStr,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} is required")]
    Missing(&'static str),
    #[error("invalid {key} value: {message}")]
    Invalid { key: &'static str, message: String },
}

pub struct Config {
    /// Unset means the in-memory store
    pub database_url: Option<String>,
    pub bind_address: String,
    pub jwt_secret: String,
    pub token_ttl_seconds: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").ok(),
            bind_address: var_or("BIND_ADDRESS", "0.0.0.0:3003"),
            jwt_secret: env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?,
            token_ttl_seconds: parse_or("TOKEN_TTL_SECONDS", 60 * 60)?,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        tracing::info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn parse_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Ok(raw) = env::var(key) else {
        tracing::info!("{key} not set, using default: {default}");
        return Ok(default);
    };

    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        message: e.to_string(),
    })
}
