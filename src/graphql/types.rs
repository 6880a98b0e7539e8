use async_graphql::{ComplexObject, ID, SimpleObject};

use crate::model::{self, Post as ModelPost, User as ModelUser};
use crate::resolvers;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub username: String,
    pub created_at: String,
}

#[ComplexObject]
impl User {
    /// Avatar location derived from the username and id
    async fn avatar_url(&self) -> String {
        model::avatar_url(&self.username, &self.id)
    }
}

impl From<ModelUser> for User {
    fn from(u: ModelUser) -> Self {
        Self {
            id: ID(u.id),
            username: u.username,
            created_at: u.created_at.to_rfc3339(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Post {
    pub title: String,
    pub content: String,
}

impl From<ModelPost> for Post {
    fn from(p: ModelPost) -> Self {
        Self {
            title: p.title,
            content: p.content,
        }
    }
}

#[derive(SimpleObject)]
pub struct CreateUserPayload {
    pub user: User,
}

impl From<resolvers::CreateUserPayload> for CreateUserPayload {
    fn from(p: resolvers::CreateUserPayload) -> Self {
        Self {
            user: p.user.into(),
        }
    }
}

#[derive(SimpleObject)]
pub struct CreatePostPayload {
    pub post: Post,
}

impl From<resolvers::CreatePostPayload> for CreatePostPayload {
    fn from(p: resolvers::CreatePostPayload) -> Self {
        Self {
            post: p.post.into(),
        }
    }
}
