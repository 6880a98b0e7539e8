use anyhow::Result;

use crate::graphql::execute;

use super::CommandContext;
use super::utils::{parse_variables, resolve_viewer, to_json};

pub fn handle_query(
    ctx: CommandContext,
    query: String,
    variables: Option<String>,
    context: Option<String>,
) -> Result<()> {
    let vars = parse_variables(variables.as_deref())?;
    let viewer = resolve_viewer(context.as_deref(), &ctx.config)?;

    let response = tokio::runtime::Runtime::new()?
        .block_on(execute(&ctx.schema, &query, vars, viewer));

    println!("{}", to_json(&response, &ctx.config)?);
    Ok(())
}
