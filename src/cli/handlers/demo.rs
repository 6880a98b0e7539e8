use anyhow::{Context, Result};
use serde_json::json;

use crate::demo::{USERS_SAMPLE, run_samples};

use super::CommandContext;
use super::utils::to_json;

pub fn handle_demo(ctx: CommandContext, all: bool) -> Result<()> {
    let results = tokio::runtime::Runtime::new()?.block_on(run_samples(&ctx.schema));

    if all {
        let report: Vec<_> = results
            .iter()
            .map(|r| json!({ "name": r.name, "response": r.response }))
            .collect();
        println!("{}", to_json(&report, &ctx.config)?);
        return Ok(());
    }

    let users = results
        .into_iter()
        .find(|r| r.name == USERS_SAMPLE)
        .context("Users sample did not run")?;
    let data = users.response.data.into_json()?;
    println!("{}", to_json(&data, &ctx.config)?);
    Ok(())
}
