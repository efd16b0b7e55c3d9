use std::collections::BTreeMap;

use async_trait::async_trait;
use garde::Valid;
use tokio::sync::RwLock;

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

/// In-process store for development and tests
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    users: BTreeMap<i64, User>,
    blogs: BTreeMap<i64, Blog>,
    next_user_id: i64,
    next_blog_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inner {
    fn user_id(&mut self) -> i64 {
        self.next_user_id += 1;
        self.next_user_id
    }

    fn blog_id(&mut self) -> i64 {
        self.next_blog_id += 1;
        self.next_blog_id
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> bool {
        true
    }

    async fn create_user(
        &self,
        username: &str,
        name: Option<&str>,
        password_hash: &str,
    ) -> Result<User, Error> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|user| user.username == username) {
            return Err(Error::UsernameTaken);
        }

        let user = User {
            id: inner.user_id(),
            username: username.to_owned(),
            name: name.map(str::to_owned),
            password_hash: password_hash.to_owned(),
        };
        inner.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn user_by_id(&self, id: i64) -> Result<Option<User>, Error> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, Error> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        Ok(self.inner.read().await.users.values().cloned().collect())
    }

    async fn list_blogs(&self) -> Result<Vec<Blog>, Error> {
        Ok(self.inner.read().await.blogs.values().cloned().collect())
    }

    async fn blog_by_id(&self, id: i64) -> Result<Option<Blog>, Error> {
        Ok(self.inner.read().await.blogs.get(&id).cloned())
    }

    async fn create_blog(&self, owner_id: i64, data: Valid<BlogRequest>) -> Result<Blog, Error> {
        let data = data.into_inner();
        let mut inner = self.inner.write().await;

        if !inner.users.contains_key(&owner_id) {
            return Err(Error::UserNotFound);
        }

        let blog = Blog {
            id: inner.blog_id(),
            title: data.title,
            author: data.author,
            url: data.url,
            likes: data.likes.unwrap_or(0),
            user_id: owner_id,
        };
        inner.blogs.insert(blog.id, blog.clone());

        Ok(blog)
    }

    async fn update_blog(&self, id: i64, data: Valid<BlogRequest>) -> Result<Blog, Error> {
        let data = data.into_inner();
        let mut inner = self.inner.write().await;

        let blog = inner.blogs.get_mut(&id).ok_or(Error::BlogNotFound)?;
        blog.title = data.title;
        blog.author = data.author;
        blog.url = data.url;
        if let Some(likes) = data.likes {
            blog.likes = likes;
        }

        Ok(blog.clone())
    }

    async fn delete_blog(&self, id: i64, requester_id: i64) -> Result<(), Error> {
        let mut inner = self.inner.write().await;

        let blog = inner.blogs.get(&id).ok_or(Error::BlogNotFound)?;
        if blog.user_id != requester_id {
            return Err(Error::NotBlogOwner);
        }
        inner.blogs.remove(&id);

        Ok(())
    }
}
