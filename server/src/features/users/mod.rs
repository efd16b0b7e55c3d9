use argon2::{
    Argon2,
    password_hash::{
        PasswordHasher,
        SaltString,
        rand_core::OsRng,
    },
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use utoipa_axum::{
    router::OpenApiRouter,
    routes,
};

use crate::{
    AppState,
    errors::Error,
    extractors::{
        Id,
        Validated,
    },
    responses::{
        GetUser,
        GetUsers,
        PostUser,
    },
};

mod types;

use types::CreateUser;
pub use types::{
    Note,
    User,
    UserWithNotes,
};

pub const TAG: &str = "Users";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(post, get_all))
        .routes(routes!(get))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "",
    request_body = CreateUser,
    responses(PostUser),
    tag = TAG
)]
pub async fn post(
    State(state): State<AppState>,
    Validated(payload): Validated<CreateUser>,
) -> Result<(StatusCode, Json<User>), Error> {
    let password_hash = Argon2::default()
        .hash_password(
            payload.password.as_bytes(),
            &SaltString::generate(&mut OsRng),
        )?
        .to_string();

    let user = state
        .store
        .create_user(&payload.username, payload.name.as_deref(), &password_hash)
        .await?;
    tracing::info!(user_id = user.id, username = %user.username, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users with the blogs they own
#[utoipa::path(get, path = "", responses(GetUsers), tag = TAG)]
pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<UserWithNotes>>, Error> {
    let users = state.store.list_users().await?;
    let blogs = state.store.list_blogs().await?;

    Ok(Json(UserWithNotes::collect(users, &blogs)))
}

/// Get a user with the blogs they own
#[utoipa::path(
    get,
    path = "/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(GetUser),
    tag = TAG
)]
pub async fn get(
    State(state): State<AppState>,
    Id(id): Id,
) -> Result<Json<UserWithNotes>, Error> {
    let user = state
        .store
        .user_by_id(id)
        .await?
        .ok_or(Error::UserNotFound)?;
    let blogs = state.store.list_blogs().await?;

    Ok(Json(UserWithNotes::new(user, &blogs)))
}
