use anyhow::{Context, Result};
use colored::Colorize;

use crate::graphql::{GRAPHQL_PATH, run_server};

use super::CommandContext;

pub fn handle_serve(mut ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        ctx.config.server.host = host;
    }
    if let Some(port) = port {
        ctx.config.server.port = port;
    }

    let settings = ctx.config.server.clone();
    let schema = ctx.schema();

    let url = format!("http://{}{}", settings.address(), GRAPHQL_PATH);
    println!("{} {}", "Starting GraphQL server on".green(), url.cyan());
    if settings.graphiql {
        println!("GraphiQL: {}", url.cyan());
    }

    tokio::runtime::Runtime::new()?
        .block_on(async { run_server(schema, &settings).await })
        .with_context(|| format!("GraphQL server on {} failed", settings.address()))?;
    Ok(())
}
