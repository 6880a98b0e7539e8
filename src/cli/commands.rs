use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gqlmock")]
#[command(
    author,
    version,
    about = "Run GraphQL operations against a mock users-and-posts schema"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file (searches upward for .gqlmock.toml by default)
    #[arg(long, global = true, env = "GQLMOCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the sample operations and print the users query result
    Demo {
        /// Print every sample's full response instead
        #[arg(long)]
        all: bool,
    },

    /// Execute a GraphQL query
    #[command(visible_alias = "q")]
    Query {
        /// GraphQL document
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Request context as JSON, e.g. '{"is_anonymous": true}'
        #[arg(long)]
        context: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Request context as JSON, e.g. '{"is_anonymous": true}'
        #[arg(long)]
        context: Option<String>,
    },

    /// Print the schema in SDL form
    Schema,
}
