#![allow(clippy::needless_for_each)] // HACK: OpenApi macro silencing

use axum::Router;
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{
    Scalar,
    Servable,
};

use crate::{
    AppState,
    errors::Error,
    features::{
        auth::{
            self,
            SecurityAddon,
        },
        blogs,
        system,
        users,
    },
    responses::ErrorResponse,
};

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Bloglist",
        version = env!("CARGO_PKG_VERSION"),
        description = "Bloglist OpenAPI Specification",
    ),
    components(schemas(ErrorResponse))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(system::router())
        .nest("/api/users", users::router())
        .nest("/api/login", auth::router())
        .nest("/api/blogs", blogs::router())
        .split_for_parts();

    tracing::info!("Scalar is available at /");
    router
        .merge(Scalar::with_url("/", api))
        .fallback(unknown_endpoint)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn unknown_endpoint() -> Error {
    Error::UnknownEndpoint
}
