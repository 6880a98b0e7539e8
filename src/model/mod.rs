//! Domain models for gqlmock.
//!
//! - [`User`]: a user with a generated id, creation timestamp and derived avatar URL
//! - [`Post`]: a titled piece of content
//! - [`mock_users`]: the fixed in-memory user population

mod post;
mod user;

pub use post::Post;
pub use user::{AVATAR_BASE_URL, User, avatar_url, mock_users};
