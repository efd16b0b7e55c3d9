use axum::{
    Json,
    extract::rejection::{
        JsonRejection,
        PathRejection,
    },
    http::StatusCode,
    response::{
        IntoResponse,
        Response,
    },
};
use serde_json::json;
use strum::IntoStaticStr;
use thiserror::Error;

#[derive(Error, Debug, IntoStaticStr)]
pub enum Error {
    #[error("expected `username` to be unique")]
    UsernameTaken,

    #[error("invalid username or password")]
    WrongCredentials,
    #[error("token missing")]
    MissingToken,
    #[error("token invalid")]
    InvalidToken,
    #[error("token expired")]
    TokenExpired,
    #[error("unauthorized user")]
    NotBlogOwner,

    #[error("blog not found")]
    BlogNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("unknown endpoint")]
    UnknownEndpoint,

    #[error("{0}")]
    InvalidData(#[from] garde::Report),
    #[error(transparent)]
    InvalidJson(#[from] JsonRejection),
    #[error("malformatted id")]
    MalformedId(#[from] PathRejection),

    // Internal
    #[error("database: {0}")]
    Database(sqlx::Error),
    #[error("password hash: {0}")]
    PasswordHash(argon2::password_hash::Error),
    #[error("json web token: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl From<&Error> for StatusCode {
    fn from(value: &Error) -> Self {
        match value {
            Error::UsernameTaken
            | Error::InvalidData(_)
            | Error::InvalidJson(_)
            | Error::MalformedId(_) => Self::BAD_REQUEST,

            Error::WrongCredentials
            | Error::MissingToken
            | Error::InvalidToken
            | Error::TokenExpired
            | Error::NotBlogOwner => Self::UNAUTHORIZED,

            Error::BlogNotFound | Error::UserNotFound | Error::UnknownEndpoint => Self::NOT_FOUND,

            Error::Database(_) | Error::PasswordHash(_) | Error::Jwt(_) => {
                Self::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(error: argon2::password_hash::Error) -> Self {
        match error {
            argon2::password_hash::Error::Password => Self::WrongCredentials,
            _ => Self::PasswordHash(error),
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(err) = &error
            && err.is_unique_violation()
            && err.constraint() == Some("users_username_key")
        {
            return Self::UsernameTaken;
        }
        Self::Database(error)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status: StatusCode = (&self).into();
        let code: &'static str = (&self).into();

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{self}:\n{self:#?}");
            "an internal server error has occurred".to_string()
        } else {
            tracing::debug!(code, "{self}");
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
