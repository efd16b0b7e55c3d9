use axum::{
    Json,
    extract::{
        FromRequest,
        FromRequestParts,
        Path,
        Request,
    },
    http::request::Parts,
};
use garde::{
    Unvalidated,
    Valid,
    Validate,
};
use serde::de::DeserializeOwned;

use crate::errors::Error;

pub struct Validated<T>(pub Valid<T>);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    <T as Validate>::Context: Default,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;

        Ok(Self(Unvalidated::new(data).validate()?))
    }
}

/// Numeric `{id}` path segment, rejected as a malformed id otherwise
pub struct Id(pub i64);

impl<S> FromRequestParts<S> for Id
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;

        Ok(Self(id))
    }
}
