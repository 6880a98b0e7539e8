use anyhow::Result;

use super::CommandContext;
use super::query::handle_query;

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
    context: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    handle_query(ctx, query, variables, context)
}
