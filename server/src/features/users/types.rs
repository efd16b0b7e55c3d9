use garde::Validate;
use serde::{
    Deserialize,
    Serialize,
};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::features::blogs::Blog;

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
    #[serde(skip)]
    pub password_hash: String,
}

/// Blog as listed under its owner
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub likes: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserWithNotes {
    #[serde(flatten)]
    pub user: User,
    pub notes: Vec<Note>,
}

#[derive(Deserialize, Validate, ToSchema)]
#[garde(allow_unvalidated)]
#[schema(as = CreateUserRequest)]
pub struct CreateUser {
    #[garde(length(chars, min = 3))]
    #[schema(min_length = 3, example = "mluukkai")]
    pub username: String,
    #[schema(example = "Matti Luukkainen")]
    pub name: Option<String>,
    #[garde(length(chars, min = 3))]
    #[schema(min_length = 3, example = "salainen")]
    pub password: String,
}

impl From<&Blog> for Note {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title.clone(),
            url: blog.url.clone(),
            likes: blog.likes,
        }
    }
}

impl UserWithNotes {
    /// Picks the blogs owned by `user`, keeping the order of `blogs`
    pub fn new(user: User, blogs: &[Blog]) -> Self {
        let notes = blogs
            .iter()
            .filter(|blog| blog.user_id == user.id)
            .map(Note::from)
            .collect();
        Self { user, notes }
    }

    pub fn collect(users: Vec<User>, blogs: &[Blog]) -> Vec<Self> {
        users
            .into_iter()
            .map(|user| Self::new(user, blogs))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, username: &str) -> User {
        User {
            id,
            username: username.into(),
            name: None,
            password_hash: "hash".into(),
        }
    }

    fn blog(id: i64, user_id: i64) -> Blog {
        Blog {
            id,
            title: format!("title {id}"),
            author: None,
            url: format!("http://blog{id}.example"),
            likes: id,
            user_id,
        }
    }

    #[test]
    fn notes_are_derived_from_ownership() {
        let users = vec![user(1, "root"), user(2, "mluukkai")];
        let blogs = vec![blog(10, 2), blog(11, 1), blog(12, 2)];

        let listed = UserWithNotes::collect(users, &blogs);

        assert_eq!(listed[0].notes.len(), 1);
        assert_eq!(listed[0].notes[0].id, 11);
        let ids: Vec<i64> = listed[1].notes.iter().map(|note| note.id).collect();
        assert_eq!(ids, vec![10, 12]);
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let json = serde_json::to_value(user(1, "root")).unwrap_or_default();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "root");
    }
}
