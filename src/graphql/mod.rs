//! GraphQL schema for gqlmock.
//!
//! Wraps the resolvers in [`crate::resolvers`] in an async-graphql schema.
//!
//! ## Usage
//!
//! ```bash
//! # Run the sample operations
//! gqlmock demo
//!
//! # Execute a query from CLI
//! gqlmock query 'query ($limit: Int) { users(limit: $limit) { id avatarUrl } }' --variables '{"limit": 1}'
//!
//! # Execute a mutation from CLI
//! gqlmock mutate 'createPost(title: "Hi", content: "There") { post { title } }' --context '{"is_anonymous": true}'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `hello`, `isAdmin`, `users`
//! - **Mutations**: `createUser`, `createPost`

mod schema;
mod types;

pub use schema::{AppSchema, MutationRoot, QueryRoot, build_schema, execute};
pub use types::*;
