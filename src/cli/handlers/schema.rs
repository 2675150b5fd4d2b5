use anyhow::Result;

use super::CommandContext;

pub fn handle_schema(ctx: CommandContext) -> Result<()> {
    println!("{}", ctx.schema().sdl());
    Ok(())
}
