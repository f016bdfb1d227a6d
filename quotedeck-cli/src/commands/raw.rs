use anyhow::Result;
use clap::Subcommand;

use crate::helper::ctx::{api_for, Context};

#[derive(Subcommand, Debug)]
pub enum RawCmd {
    /// GET an arbitrary backend path and pretty-print the JSON
    Get { path: String },
}

pub async fn run(ctx: impl Context<'_>, cmd: RawCmd) -> Result<()> {
    let RawCmd::Get { path } = cmd;
    let api = api_for(&ctx)?;
    let value = api.get(&path).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
