use std::time::Duration;

use async_trait::async_trait;
use garde::Valid;
use sqlx::{
    PgPool,
    postgres::PgPoolOptions,
};

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

use super::Store;

const USER_COLUMNS: &str = "id, username, name, password_hash";
const BLOG_COLUMNS: &str = "id, title, author, url, likes, user_id";

pub struct PgStore {
    pool: PgPool, // pool cloning is cheap
}

impl PgStore {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a small pool and runs pending migrations
    pub async fn connect(url: &str) -> sqlx::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .connect(url)
            .await?;
        tracing::debug!("database pool connected");

        sqlx::migrate!().run(&pool).await?;
        tracing::debug!("finished running migrations");

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    async fn create_user(
        &self,
        username: &str,
        name: Option<&str>,
        password_hash: &str,
    ) -> Result<User, Error> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, name, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(username)
        .bind(name)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn user_by_id(&self, id: i64) -> Result<Option<User>, Error> {
        Ok(
            sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, Error> {
        Ok(sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        Ok(
            sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn list_blogs(&self) -> Result<Vec<Blog>, Error> {
        Ok(
            sqlx::query_as::<_, Blog>(&format!("SELECT {BLOG_COLUMNS} FROM blogs ORDER BY id"))
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn blog_by_id(&self, id: i64) -> Result<Option<Blog>, Error> {
        Ok(
            sqlx::query_as::<_, Blog>(&format!("SELECT {BLOG_COLUMNS} FROM blogs WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn create_blog(&self, owner_id: i64, data: Valid<BlogRequest>) -> Result<Blog, Error> {
        let data = data.into_inner();

        let blog = sqlx::query_as::<_, Blog>(&format!(
            "INSERT INTO blogs (title, author, url, likes, user_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {BLOG_COLUMNS}"
        ))
        .bind(data.title)
        .bind(data.author)
        .bind(data.url)
        .bind(data.likes.unwrap_or(0))
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(blog)
    }

    async fn update_blog(&self, id: i64, data: Valid<BlogRequest>) -> Result<Blog, Error> {
        let data = data.into_inner();

        sqlx::query_as::<_, Blog>(&format!(
            "UPDATE blogs SET title = $1, author = $2, url = $3, likes = COALESCE($4, likes)
             WHERE id = $5
             RETURNING {BLOG_COLUMNS}"
        ))
        .bind(data.title)
        .bind(data.author)
        .bind(data.url)
        .bind(data.likes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(Error::BlogNotFound)
    }

    async fn delete_blog(&self, id: i64, requester_id: i64) -> Result<(), Error> {
        let mut tx = self.pool.begin().await?;

        // Lock the row so the ownership check holds until the delete commits
        let owner_id: i64 =
            sqlx::query_scalar("SELECT user_id FROM blogs WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(Error::BlogNotFound)?;

        if owner_id != requester_id {
            return Err(Error::NotBlogOwner);
        }

        sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
