use anyhow::{Context, Result};
use async_graphql::{Request, Variables};

use super::CommandContext;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    execute(ctx, query, variables)
}

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    execute(ctx, query, variables)
}

fn execute(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let vars: Variables = match variables {
        Some(v) => serde_json::from_str(&v).context("Invalid --variables JSON")?,
        None => Variables::default(),
    };

    let schema = ctx.schema();
    let request = Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_err() {
        anyhow::bail!("GraphQL request returned {} error(s)", response.errors.len());
    }
    Ok(())
}
