use std::sync::LazyLock;

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash,
        PasswordHasher,
        PasswordVerifier,
        SaltString,
        rand_core::OsRng,
    },
};
use axum::{
    Json,
    extract::State,
};

use crate::{
    AppState,
    errors::Error,
    extractors::Validated,
    features::auth::{
        LoginRequest,
        LoginResponse,
        TAG,
        jwt::sign,
    },
    responses::Login,
};

/// Verified against when the username is unknown, so both failures cost one argon2 run
static DUMMY_HASH: LazyLock<Option<String>> = LazyLock::new(|| {
    Argon2::default()
        .hash_password(b"not a real password", &SaltString::generate(&mut OsRng))
        .map(|hash| hash.to_string())
        .ok()
});

fn verify_password(password: &str, hash: &str) -> Result<(), Error> {
    Argon2::default().verify_password(password.as_bytes(), &PasswordHash::new(hash)?)?;
    Ok(())
}

/// Log in with username and password
///
/// Returns a bearer token for the blog endpoints.
#[utoipa::path(
    post,
    path = "",
    request_body = LoginRequest,
    responses(Login),
    tag = TAG
)]
pub async fn login(
    State(state): State<AppState>,
    Validated(payload): Validated<LoginRequest>,
) -> Result<Json<LoginResponse>, Error> {
    let Some(user) = state.store.user_by_username(&payload.username).await? else {
        if let Some(hash) = DUMMY_HASH.as_deref() {
            // Always fails; only the time spent matters
            let _ = verify_password(&payload.password, hash);
        }
        return Err(Error::WrongCredentials);
    };

    verify_password(&payload.password, &user.password_hash)?;

    let token = sign(user.id, &user.username, &state.jwt_secret, state.token_ttl)?;
    tracing::info!(user_id = user.id, "user logged in");

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_hash_rejects_every_password() {
        let hash = DUMMY_HASH.as_deref().expect("dummy hash");

        assert!(matches!(
            verify_password("sekret", hash),
            Err(Error::WrongCredentials)
        ));
        assert!(matches!(
            verify_password("", hash),
            Err(Error::WrongCredentials)
        ));
    }

    #[test]
    fn matching_password_verifies() {
        let hash = Argon2::default()
            .hash_password(b"sekret", &SaltString::generate(&mut OsRng))
            .expect("hash")
            .to_string();

        assert!(verify_password("sekret", &hash).is_ok());
        assert!(matches!(
            verify_password("wrong", &hash),
            Err(Error::WrongCredentials)
        ));
    }
}
