mod demo;
mod mutate;
mod query;
mod schema;
mod utils;

pub use demo::handle_demo;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;

use crate::config::GqlMockConfig;
use crate::graphql::{AppSchema, build_schema};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: GqlMockConfig,
    pub schema: AppSchema,
}

impl CommandContext {
    pub fn new(config: GqlMockConfig) -> Self {
        let schema = build_schema(&config.execution);
        Self { config, schema }
    }
}
