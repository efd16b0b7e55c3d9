use axum::{
    RequestPartsExt,
    extract::FromRequestParts,
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{
        Authorization,
        authorization::Bearer,
    },
};
use chrono::{
    Duration,
    Utc,
};
use jsonwebtoken::{
    DecodingKey,
    EncodingKey,
    Header,
    Validation,
    decode,
    encode,
    errors::ErrorKind,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    AppState,
    errors::Error,
    features::users::User,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub username: String,
    pub exp: u64,
}

pub fn sign(
    sub: i64,
    username: &str,
    secret: &str,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let expiration = Utc::now()
        .checked_add_signed(ttl)
        .unwrap_or(chrono::DateTime::<Utc>::MAX_UTC)
        .timestamp();
    let claims = Claims {
        sub,
        username: username.into(),
        exp: expiration.cast_unsigned(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn verify(token: &str, secret: &str) -> Result<Claims, Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => Error::TokenExpired,
        _ => Error::InvalidToken,
    })
}

/// Bearer token of the request, if any. Never rejects.
pub struct BearerToken(pub Option<String>);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .ok()
            .map(|TypedHeader(Authorization(bearer))| bearer.token().to_owned());

        Ok(Self(token))
    }
}

/// The user behind a valid bearer token
pub struct Authenticated {
    pub user: User,
}

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = parts.extract::<BearerToken>().await?;
        let token = token.ok_or(Error::MissingToken)?;

        let claims = verify(&token, &state.jwt_secret)?;

        // Tokens of users that no longer exist are worthless
        let user = state
            .store
            .user_by_id(claims.sub)
            .await?
            .ok_or(Error::InvalidToken)?;

        Ok(Self { user })
    }
}
