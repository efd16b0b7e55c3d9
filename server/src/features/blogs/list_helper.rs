//! Aggregates over a list of blogs.
//!
//! Author aggregates group blogs in order of each author's first appearance
//! and the first group reaching the maximum wins. Blogs without an author are
//! not attributed to anyone. Sums saturate at `i64::MAX`.

use serde::Serialize;
use utoipa::ToSchema;

use super::Blog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FavoriteBlog {
    pub title: String,
    pub author: Option<String>,
    pub likes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthorBlogs {
    pub author: String,
    pub blogs: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: i64,
}

pub fn total_likes(blogs: &[Blog]) -> i64 {
    blogs
        .iter()
        .fold(0_i64, |total, blog| total.saturating_add(blog.likes))
}

pub fn favorite_blog(blogs: &[Blog]) -> Option<FavoriteBlog> {
    let top = blogs.iter().reduce(|top, blog| {
        if blog.likes > top.likes { blog } else { top }
    })?;

    Some(FavoriteBlog {
        title: top.title.clone(),
        author: top.author.clone(),
        likes: top.likes,
    })
}

pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogs> {
    let (author, count) = first_max(group_by_author(blogs, |_| 1))?;
    Some(AuthorBlogs {
        author,
        blogs: usize::try_from(count).unwrap_or(usize::MAX),
    })
}

pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    let (author, likes) = first_max(group_by_author(blogs, |blog| blog.likes))?;
    Some(AuthorLikes { author, likes })
}

/// Sums `metric` per author, in order of first appearance
fn group_by_author<F>(blogs: &[Blog], metric: F) -> Vec<(String, i64)>
where
    F: Fn(&Blog) -> i64,
{
    let mut groups: Vec<(String, i64)> = Vec::new();

    for blog in blogs {
        let Some(author) = blog.author.as_deref() else {
            continue;
        };
        let value = metric(blog);
        match groups.iter_mut().find(|(name, _)| name == author) {
            Some((_, total)) => *total = total.saturating_add(value),
            None => groups.push((author.to_owned(), value)),
        }
    }

    groups
}

fn first_max(groups: Vec<(String, i64)>) -> Option<(String, i64)> {
    groups
        .into_iter()
        .reduce(|top, group| if group.1 > top.1 { group } else { top })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog(title: &str, author: &str, likes: i64) -> Blog {
        Blog {
            id: 0,
            title: title.into(),
            author: Some(author.into()),
            url: format!("http://{title}.example"),
            likes,
            user_id: 1,
        }
    }

    fn fixture() -> Vec<Blog> {
        vec![
            blog("html is easy", "Ibrahim", 504),
            blog("javascipt promise heck", "arthur magelli", 1073),
            blog("the hardest thing in the world", "sadi", 20131),
        ]
    }

    fn many() -> Vec<Blog> {
        vec![
            blog("React patterns", "Michael Chan", 7),
            blog("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
            blog("Canonical string reduction", "Edsger W. Dijkstra", 12),
            blog("First class tests", "Robert C. Martin", 10),
            blog("TDD harms architecture", "Robert C. Martin", 0),
            blog("Type wars", "Robert C. Martin", 2),
        ]
    }

    #[test]
    fn total_likes_of_empty_list_is_zero() {
        assert_eq!(total_likes(&[]), 0);
    }

    #[test]
    fn total_likes_sums_every_blog() {
        let blogs = vec![blog("a", "x", 5), blog("b", "y", 0), blog("c", "z", 10)];
        assert_eq!(total_likes(&blogs), 15);
        assert_eq!(total_likes(&many()), 36);
    }

    #[test]
    fn sums_saturate_instead_of_overflowing() {
        let blogs = vec![
            blog("a", "x", i64::MAX),
            blog("b", "x", i64::MAX),
            blog("c", "y", 1),
        ];

        assert_eq!(total_likes(&blogs), i64::MAX);
        assert_eq!(
            most_likes(&blogs),
            Some(AuthorLikes {
                author: "x".into(),
                likes: i64::MAX,
            })
        );
        assert_eq!(most_blogs(&blogs).map(|top| top.blogs), Some(2));
    }

    #[test]
    fn favorite_blog_of_empty_list_is_none() {
        assert_eq!(favorite_blog(&[]), None);
    }

    #[test]
    fn favorite_blog_picks_most_liked() {
        assert_eq!(
            favorite_blog(&fixture()),
            Some(FavoriteBlog {
                title: "the hardest thing in the world".into(),
                author: Some("sadi".into()),
                likes: 20131,
            })
        );
    }

    #[test]
    fn favorite_blog_keeps_first_on_ties() {
        let blogs = vec![blog("first", "x", 3), blog("second", "y", 3)];
        let favorite = favorite_blog(&blogs).map(|fav| fav.title);
        assert_eq!(favorite.as_deref(), Some("first"));
    }

    #[test]
    fn author_aggregates_of_empty_list_are_none() {
        assert_eq!(most_blogs(&[]), None);
        assert_eq!(most_likes(&[]), None);
    }

    #[test]
    fn distinct_authors_resolve_to_the_maximum() {
        assert_eq!(
            most_blogs(&fixture()),
            Some(AuthorBlogs {
                author: "Ibrahim".into(),
                blogs: 1,
            })
        );
        assert_eq!(
            most_likes(&fixture()),
            Some(AuthorLikes {
                author: "sadi".into(),
                likes: 20131,
            })
        );
    }

    #[test]
    fn author_aggregates_group_by_author() {
        assert_eq!(
            most_blogs(&many()),
            Some(AuthorBlogs {
                author: "Robert C. Martin".into(),
                blogs: 3,
            })
        );
        assert_eq!(
            most_likes(&many()),
            Some(AuthorLikes {
                author: "Edsger W. Dijkstra".into(),
                likes: 17,
            })
        );
    }

    #[test]
    fn blogs_without_author_are_not_attributed() {
        let mut anonymous = blog("anon", "", 100);
        anonymous.author = None;
        let blogs = vec![anonymous, blog("named", "x", 1)];

        assert_eq!(most_likes(&blogs).map(|top| top.author).as_deref(), Some("x"));
        assert_eq!(most_blogs(&[blogs[0].clone()]), None);
    }
}
