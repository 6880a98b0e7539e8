//! # gqlmock - a mock users-and-posts GraphQL schema
//!
//! A small GraphQL schema (users, posts, `hello`, `isAdmin`, and the
//! `createUser`/`createPost` mutations) backed by in-memory mock data, plus an
//! in-process driver that runs operations against it and prints JSON.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the sample operations and print the users query result
//! gqlmock demo
//!
//! # Run an ad hoc query
//! gqlmock query '{ users(limit: 1) { username avatarUrl } }'
//!
//! # Print the schema
//! gqlmock schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`context`]: Request-scoped viewer claims
//! - [`demo`]: The fixed sample operations
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema types and roots
//! - [`model`]: Data models (User, Post)
//! - [`resolvers`]: Field and mutation resolvers

/// Command-line interface using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.gqlmock.toml` discovery and defaults.
pub mod config;

pub mod context;
pub mod demo;

/// Error types and result aliases.
///
/// Defines `GqlMockError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and roots.
///
/// Provides the async-graphql schema over the resolvers.
pub mod graphql;

pub mod logging;

/// Data models.
///
/// Includes `User`, `Post` and the mock user population.
pub mod model;

pub mod resolvers;
