use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, Object, Request, Response, Schema, Variables,
};

use crate::config::ExecutionSettings;
use crate::context::Viewer;
use crate::resolvers;

use super::types::*;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(settings: &ExecutionSettings) -> AppSchema {
    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription);
    if let Some(depth) = settings.max_depth {
        builder = builder.limit_depth(depth);
    }
    if let Some(complexity) = settings.max_complexity {
        builder = builder.limit_complexity(complexity);
    }
    builder.finish()
}

/// Executes one document with the given variables and viewer attached.
pub async fn execute(
    schema: &AppSchema,
    document: &str,
    variables: Variables,
    viewer: Viewer,
) -> Response {
    let request = Request::new(document).variables(variables).data(viewer);
    let response = schema.execute(request).await;
    tracing::info!(
        anonymous = viewer.anonymous,
        errors = response.errors.len(),
        "Executed operation"
    );
    response
}

fn get_viewer(ctx: &Context<'_>) -> Viewer {
    ctx.data_opt::<Viewer>().copied().unwrap_or_default()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Always "world"
    async fn hello(&self) -> String {
        resolvers::hello().to_string()
    }

    /// Whether the caller is an administrator
    async fn is_admin(&self) -> bool {
        resolvers::is_admin()
    }

    /// List users, keeping at most `limit` of them
    async fn users(&self, limit: Option<usize>) -> Vec<User> {
        resolvers::users(limit).into_iter().map(|u| u.into()).collect()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new user
    async fn create_user(&self, username: String) -> CreateUserPayload {
        resolvers::create_user(resolvers::CreateUser { username }).into()
    }

    /// Create a new post; requires an authenticated viewer
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: String,
    ) -> async_graphql::Result<Option<CreatePostPayload>> {
        let input = resolvers::CreatePost { title, content };
        match resolvers::create_post(get_viewer(ctx), input) {
            Ok(payload) => Ok(Some(payload.into())),
            Err(e) => {
                // Record the error at this field and resolve to null so the
                // key stays in `data` next to its siblings.
                let error = e.extend().into_server_error(ctx.item.pos);
                ctx.add_error(ctx.set_error_path(error));
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hello() {
        let schema = build_schema(&ExecutionSettings::default());
        let response = execute(&schema, "{ hello }", Variables::default(), Viewer::anonymous()).await;
        assert!(response.errors.is_empty());
        assert_eq!(
            response.data.into_json().unwrap(),
            serde_json::json!({ "hello": "world" })
        );
    }

    #[tokio::test]
    async fn test_missing_viewer_is_authenticated() {
        let schema = build_schema(&ExecutionSettings::default());
        let response = schema
            .execute(r#"mutation { createPost(title: "a", content: "b") { post { title } } }"#)
            .await;
        assert!(response.errors.is_empty());
    }

    #[tokio::test]
    async fn test_anonymous_create_post_alone_keeps_data_object() {
        let schema = build_schema(&ExecutionSettings::default());
        let response = execute(
            &schema,
            r#"mutation { createPost(title: "Hi", content: "There") { post { title } } }"#,
            Variables::default(),
            Viewer::anonymous(),
        )
        .await;
        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].path,
            vec![async_graphql::PathSegment::Field("createPost".to_string())]
        );
        assert_eq!(
            response.data.into_json().unwrap(),
            serde_json::json!({ "createPost": null })
        );
    }

    #[tokio::test]
    async fn test_create_user_rejects_null_username() {
        let schema = build_schema(&ExecutionSettings::default());
        let response = execute(
            &schema,
            "mutation { createUser(username: null) { user { id } } }",
            Variables::default(),
            Viewer::default(),
        )
        .await;
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.data.into_json().unwrap(), serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_depth_limit() {
        let settings = ExecutionSettings {
            max_depth: Some(1),
            ..Default::default()
        };
        let schema = build_schema(&settings);
        let response = execute(
            &schema,
            "{ users { id } }",
            Variables::default(),
            Viewer::default(),
        )
        .await;
        assert_eq!(response.errors.len(), 1);
    }

    #[test]
    fn test_sdl_uses_camel_case() {
        let sdl = build_schema(&ExecutionSettings::default()).sdl();
        assert!(sdl.contains("isAdmin: Boolean!"));
        assert!(sdl.contains("createdAt: String!"));
        assert!(sdl.contains("avatarUrl: String!"));
        assert!(sdl.contains("createPost("));
        assert!(sdl.contains("type CreatePostPayload"));
    }
}
