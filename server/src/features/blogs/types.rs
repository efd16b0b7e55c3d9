use std::collections::HashMap;

use garde::Validate;
use serde::{
    Deserialize,
    Serialize,
};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::features::users::User;

/// Stored blog entry
#[derive(Debug, Clone, FromRow)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
    pub user_id: i64,
}

/// Public part of the owning user
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Owner {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
}

/// Blog with its owner populated
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = Blog)]
pub struct BlogResponse {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
    pub user: Option<Owner>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[garde(allow_unvalidated)]
pub struct BlogRequest {
    #[serde(default)]
    #[garde(custom(not_blank))]
    #[schema(example = "Go To Statement Considered Harmful")]
    pub title: String,
    #[schema(example = "Edsger W. Dijkstra")]
    pub author: Option<String>,
    #[serde(default)]
    #[garde(custom(not_blank))]
    #[schema(example = "https://homepages.cwi.nl/~storm/teaching/reader/Dijkstra68.pdf")]
    pub url: String,
    /// New blogs start at 0, updates keep the stored value when omitted
    #[garde(range(min = 0))]
    #[schema(minimum = 0)]
    pub likes: Option<i64>,
}

fn not_blank(value: &str, _context: &()) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new("is required"));
    }
    Ok(())
}

impl From<&User> for Owner {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
        }
    }
}

impl BlogResponse {
    pub fn new(blog: Blog, owner: Option<Owner>) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user: owner,
        }
    }

    /// Attaches owners to a batch of blogs
    pub fn populate(blogs: Vec<Blog>, users: &[User]) -> Vec<Self> {
        let owners: HashMap<i64, Owner> = users
            .iter()
            .map(|user| (user.id, Owner::from(user)))
            .collect();

        blogs
            .into_iter()
            .map(|blog| {
                let owner = owners.get(&blog.user_id).cloned();
                Self::new(blog, owner)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use garde::Validate;

    use super::*;

    fn request(json: &str) -> BlogRequest {
        serde_json::from_str(json).unwrap_or_else(|e| panic!("bad fixture: {e}"))
    }

    #[test]
    fn likes_may_be_omitted() {
        let blog = request(r#"{"title": "t", "url": "http://t.example"}"#);
        assert_eq!(blog.likes, None);
        assert!(blog.validate().is_ok());
    }

    #[test]
    fn missing_title_is_reported_by_name() {
        let blog = request(r#"{"author": "me", "url": "http://t.example", "likes": 3}"#);
        let report = blog.validate().err().map(|r| r.to_string()).unwrap_or_default();
        assert!(report.contains("title"), "{report}");
        assert!(!report.contains("url"), "{report}");
    }

    #[test]
    fn negative_likes_are_rejected() {
        let blog = request(r#"{"title": "t", "url": "u", "likes": -1}"#);
        assert!(blog.validate().is_err());
    }

    #[test]
    fn populate_finds_owner_by_id() {
        let users = vec![User {
            id: 7,
            username: "root".into(),
            name: Some("Superuser".into()),
            password_hash: String::new(),
        }];
        let blogs = vec![Blog {
            id: 1,
            title: "t".into(),
            author: None,
            url: "u".into(),
            likes: 0,
            user_id: 7,
        }];

        let populated = BlogResponse::populate(blogs, &users);
        let owner = populated[0].user.as_ref().map(|o| o.username.as_str());
        assert_eq!(owner, Some("root"));
    }
}
