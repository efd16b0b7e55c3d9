//! Persistence seam shared by every handler.
//!
//! The user → blogs relation is derived from `Blog::user_id` on read, so every
//! write touches exactly one record.

use async_trait::async_trait;
use garde::Valid;

use crate::{
    errors::Error,
    features::{
        blogs::{
            Blog,
            BlogRequest,
        },
        users::User,
    },
};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// Whether the backing store answers
    async fn ping(&self) -> bool;

    /// Fails with [`Error::UsernameTaken`] when the username exists
    async fn create_user(
        &self,
        username: &str,
        name: Option<&str>,
        password_hash: &str,
    ) -> Result<User, Error>;
    async fn user_by_id(&self, id: i64) -> Result<Option<User>, Error>;
    async fn user_by_username(&self, username: &str) -> Result<Option<User>, Error>;
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    async fn list_blogs(&self) -> Result<Vec<Blog>, Error>;
    async fn blog_by_id(&self, id: i64) -> Result<Option<Blog>, Error>;
    async fn create_blog(&self, owner_id: i64, data: Valid<BlogRequest>) -> Result<Blog, Error>;
    /// Replaces title, author and url, and likes when given. Fails with [`Error::BlogNotFound`]
    async fn update_blog(&self, id: i64, data: Valid<BlogRequest>) -> Result<Blog, Error>;
    /// Deletes the blog only when `requester_id` owns it
    async fn delete_blog(&self, id: i64, requester_id: i64) -> Result<(), Error>;
}
