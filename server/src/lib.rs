//! REST backend for a blog list: user registration, token login and blogs
//! owned by users.

use std::sync::Arc;

use axum::Router;

pub mod config;
pub mod errors;
pub mod extractors;
pub mod features;
pub mod responses;
pub mod router;
pub mod store;

use store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub jwt_secret: Arc<str>,
    pub token_ttl: chrono::Duration,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, jwt_secret: &str, token_ttl: chrono::Duration) -> Self {
        Self {
            store,
            jwt_secret: jwt_secret.into(),
            token_ttl,
        }
    }
}

/// Fully layered application ready to serve
pub fn app(state: AppState) -> Router {
    router::router().with_state(state)
}
