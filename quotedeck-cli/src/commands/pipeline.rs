use anyhow::Result;
use clap::Subcommand;
use tracing::info;

use quotedeck_api::PipelineKind;

use crate::helper::ctx::{api_for, Context};

#[derive(Subcommand, Debug)]
pub enum PipelineCmd {
    /// Ingest the daily tweets and generate AI comments for them
    Process,
    /// Start quoting everything currently marked To Quote
    Quote,
}

pub async fn run(ctx: impl Context<'_>, cmd: PipelineCmd) -> Result<()> {
    let (kind, flow) = match cmd {
        PipelineCmd::Process => (PipelineKind::ProcessTweets, ctx.process_flow()),
        PipelineCmd::Quote => (PipelineKind::QuoteTweets, ctx.quote_flow()),
    };
    if flow.is_empty() {
        anyhow::bail!(
            "no workflow id configured for this trigger: pass --process-flow/--quote-flow \
             or set QUOTEDECK_PROCESS_FLOW/QUOTEDECK_QUOTE_FLOW"
        );
    }

    let api = api_for(&ctx)?;
    // Fire-and-forget: a 2xx only means the backend accepted the trigger.
    let response = api.trigger_pipeline(kind).await?;
    info!("trigger accepted");
    if !response.is_null() {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}
