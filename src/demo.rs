//! The fixed sample operations run by `gqlmock demo`.

use async_graphql::{Response, Variables};
use serde_json::json;

use crate::context::Viewer;
use crate::graphql::{AppSchema, execute};

/// Name of the sample whose `data` the demo prints by default.
pub const USERS_SAMPLE: &str = "getUsersQuery";

/// One canned document with its variables and viewer.
pub struct SampleOperation {
    pub name: &'static str,
    pub document: &'static str,
    pub variables: serde_json::Value,
    pub viewer: Viewer,
}

pub struct SampleResult {
    pub name: &'static str,
    pub response: Response,
}

pub fn sample_operations() -> Vec<SampleOperation> {
    vec![
        SampleOperation {
            name: "hello",
            document: "{ hello }",
            variables: json!({}),
            viewer: Viewer::default(),
        },
        SampleOperation {
            name: "isAdmin",
            document: "{ isAdmin }",
            variables: json!({}),
            viewer: Viewer::default(),
        },
        SampleOperation {
            name: USERS_SAMPLE,
            document: r#"
                query getUsersQuery($limit: Int) {
                    users(limit: $limit) {
                        id
                        username
                        createdAt
                        avatarUrl
                    }
                }
            "#,
            variables: json!({ "limit": 2 }),
            viewer: Viewer::default(),
        },
        SampleOperation {
            name: "createUser",
            document: r#"
                mutation ($username: String!) {
                    createUser(username: $username) {
                        user {
                            id
                            username
                            createdAt
                        }
                    }
                }
            "#,
            variables: json!({ "username": "Dave" }),
            viewer: Viewer::default(),
        },
        SampleOperation {
            name: "createPost",
            document: r#"
                mutation ($title: String!, $content: String!) {
                    createPost(title: $title, content: $content) {
                        post {
                            title
                            content
                        }
                    }
                }
            "#,
            variables: json!({ "title": "Hello", "content": "World" }),
            viewer: Viewer::anonymous(),
        },
    ]
}

/// Runs every sample in order, one at a time.
pub async fn run_samples(schema: &AppSchema) -> Vec<SampleResult> {
    let mut results = Vec::new();
    for op in sample_operations() {
        tracing::debug!(name = op.name, "Running sample operation");
        let response = execute(
            schema,
            op.document,
            Variables::from_json(op.variables),
            op.viewer,
        )
        .await;
        results.push(SampleResult {
            name: op.name,
            response,
        });
    }
    results
}
