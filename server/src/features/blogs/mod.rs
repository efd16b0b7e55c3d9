use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::Serialize;
use utoipa::{
    IntoResponses,
    ToSchema,
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
    features::auth::Authenticated,
    responses::{
        DeleteBlog,
        GetBlog,
        GetBlogs,
        PostBlog,
        PutBlog,
    },
};

pub mod list_helper;
mod types;

use list_helper::{
    AuthorBlogs,
    AuthorLikes,
    FavoriteBlog,
};
pub use types::{
    Blog,
    BlogRequest,
    BlogResponse,
    Owner,
};

pub const TAG: &str = "Blogs";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(post, get_all))
        .routes(routes!(stats))
        .routes(routes!(get, put, delete))
}

/// List all blogs with their owners
#[utoipa::path(get, path = "", responses(GetBlogs), tag = TAG)]
pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<BlogResponse>>, Error> {
    let blogs = state.store.list_blogs().await?;
    let users = state.store.list_users().await?;

    Ok(Json(BlogResponse::populate(blogs, &users)))
}

/// Get a single blog
#[utoipa::path(
    get,
    path = "/{id}",
    params(("id" = i64, Path, description = "Blog id")),
    responses(GetBlog),
    tag = TAG
)]
pub async fn get(State(state): State<AppState>, Id(id): Id) -> Result<Json<BlogResponse>, Error> {
    let blog = state
        .store
        .blog_by_id(id)
        .await?
        .ok_or(Error::BlogNotFound)?;

    Ok(Json(with_owner(&state, blog).await?))
}

/// Create a blog owned by the caller
///
/// `likes` defaults to 0 when omitted.
#[utoipa::path(
    post,
    path = "",
    request_body = BlogRequest,
    responses(PostBlog),
    tag = TAG,
    security(("jwt" = []))
)]
pub async fn post(
    State(state): State<AppState>,
    auth: Authenticated,
    Validated(payload): Validated<BlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>), Error> {
    let blog = state.store.create_blog(auth.user.id, payload).await?;
    tracing::info!(blog_id = blog.id, user_id = auth.user.id, "blog created");

    let owner = Owner::from(&auth.user);
    Ok((StatusCode::CREATED, Json(BlogResponse::new(blog, Some(owner)))))
}

/// Replace the fields of a blog
#[utoipa::path(
    put,
    path = "/{id}",
    params(("id" = i64, Path, description = "Blog id")),
    request_body = BlogRequest,
    responses(PutBlog),
    tag = TAG
)]
pub async fn put(
    State(state): State<AppState>,
    Id(id): Id,
    Validated(payload): Validated<BlogRequest>,
) -> Result<Json<BlogResponse>, Error> {
    let blog = state.store.update_blog(id, payload).await?;

    Ok(Json(with_owner(&state, blog).await?))
}

/// Delete a blog
///
/// Only the owner may delete it.
#[utoipa::path(
    delete,
    path = "/{id}",
    params(("id" = i64, Path, description = "Blog id")),
    responses(DeleteBlog),
    tag = TAG,
    security(("jwt" = []))
)]
pub async fn delete(
    State(state): State<AppState>,
    auth: Authenticated,
    Id(id): Id,
) -> Result<StatusCode, Error> {
    state.store.delete_blog(id, auth.user.id).await?;
    tracing::info!(blog_id = id, user_id = auth.user.id, "blog deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Aggregates over every blog
#[derive(Serialize, ToSchema, IntoResponses)]
#[response(status = OK)]
pub struct BlogStats {
    pub total_likes: i64,
    pub favorite_blog: Option<FavoriteBlog>,
    pub most_blogs: Option<AuthorBlogs>,
    pub most_likes: Option<AuthorLikes>,
}

/// Likes total, favorite blog and most prolific authors
#[utoipa::path(get, path = "/stats", responses(BlogStats), tag = TAG)]
pub async fn stats(State(state): State<AppState>) -> Result<Json<BlogStats>, Error> {
    let blogs = state.store.list_blogs().await?;

    Ok(Json(BlogStats {
        total_likes: list_helper::total_likes(&blogs),
        favorite_blog: list_helper::favorite_blog(&blogs),
        most_blogs: list_helper::most_blogs(&blogs),
        most_likes: list_helper::most_likes(&blogs),
    }))
}

async fn with_owner(state: &AppState, blog: Blog) -> Result<BlogResponse, Error> {
    let owner = state.store.user_by_id(blog.user_id).await?;

    Ok(BlogResponse::new(blog, owner.as_ref().map(Owner::from)))
}
