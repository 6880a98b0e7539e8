//! Field and mutation resolvers.
//!
//! Plain functions over the domain model. The GraphQL roots in
//! [`crate::graphql`] only adapt arguments and return types around them.

use crate::context::Viewer;
use crate::error::{GqlMockError, Result};
use crate::model::{Post, User, mock_users};

pub fn hello() -> &'static str {
    "world"
}

/// Always `true`; not derived from the viewer.
pub fn is_admin() -> bool {
    true
}

/// Returns the mock users in their original order, keeping at most `limit`.
pub fn users(limit: Option<usize>) -> Vec<User> {
    let mut users = mock_users();
    if let Some(limit) = limit {
        users.truncate(limit);
    }
    tracing::debug!(?limit, count = users.len(), "Resolved users");
    users
}

/// Input message for [`create_user`].
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct CreateUserPayload {
    pub user: User,
}

pub fn create_user(input: CreateUser) -> CreateUserPayload {
    let user = User::new(input.username);
    tracing::debug!(id = %user.id, username = %user.username, "Created user");
    CreateUserPayload { user }
}

/// Input message for [`create_post`].
#[derive(Debug, Clone)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct CreatePostPayload {
    pub post: Post,
}

/// Creates a post for an authenticated viewer.
///
/// Anonymous viewers get [`GqlMockError::Unauthenticated`] and no post is built.
pub fn create_post(viewer: Viewer, input: CreatePost) -> Result<CreatePostPayload> {
    if viewer.anonymous {
        tracing::warn!(title = %input.title, "Rejected createPost from anonymous viewer");
        return Err(GqlMockError::Unauthenticated);
    }
    let post = Post::new(input.title, input.content);
    tracing::debug!(title = %post.title, "Created post");
    Ok(CreatePostPayload { post })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usernames(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.username.as_str()).collect()
    }

    #[test]
    fn test_users_without_limit() {
        assert_eq!(usernames(&users(None)), ["Fred", "Doug"]);
    }

    #[test]
    fn test_users_limit_truncates_in_order() {
        assert!(users(Some(0)).is_empty());
        assert_eq!(usernames(&users(Some(1))), ["Fred"]);
        assert_eq!(usernames(&users(Some(5))), ["Fred", "Doug"]);
    }

    #[test]
    fn test_constants() {
        assert_eq!(hello(), "world");
        assert!(is_admin());
    }

    #[test]
    fn test_create_user_uses_fresh_defaults() {
        let first = create_user(CreateUser {
            username: "Dave".to_string(),
        });
        let second = create_user(CreateUser {
            username: "Dave".to_string(),
        });
        assert_eq!(first.user.username, "Dave");
        assert_ne!(first.user.id, second.user.id);
    }

    #[test]
    fn test_create_post_anonymous_rejected() {
        let input = CreatePost {
            title: "Hello".to_string(),
            content: "World".to_string(),
        };
        assert!(matches!(
            create_post(Viewer::anonymous(), input),
            Err(GqlMockError::Unauthenticated)
        ));
    }

    #[test]
    fn test_create_post_authenticated() {
        let input = CreatePost {
            title: "Hello".to_string(),
            content: "World".to_string(),
        };
        let payload = create_post(Viewer::authenticated(), input).unwrap();
        assert_eq!(payload.post, Post::new("Hello".to_string(), "World".to_string()));
    }
}
