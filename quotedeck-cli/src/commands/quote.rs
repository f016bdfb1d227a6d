use anyhow::Result;
use clap::Subcommand;
use tracing::{error, info, warn};

use crate::helper::cooldown::CooldownGate;
use crate::helper::ctx::{api_for, Context};

#[derive(Subcommand, Debug)]
pub enum QuoteCmd {
    /// Mark tweets eligible for the quote cycle
    Enable {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Pull tweets out of the quote cycle
    Disable {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

pub async fn run(ctx: impl Context<'_>, cmd: QuoteCmd) -> Result<()> {
    let (ids, enabled) = match cmd {
        QuoteCmd::Enable { ids } => (ids, true),
        QuoteCmd::Disable { ids } => (ids, false),
    };

    let api = api_for(&ctx)?;
    let mut gate = CooldownGate::new(ctx.cooldown());
    let mut failed = 0usize;

    for id in &ids {
        if !gate.try_begin(id) {
            warn!("skipping {id}: toggled again within the cooldown window");
            continue;
        }
        match api.set_quote_flag(id, enabled).await {
            Ok(_) => info!(
                "{} quote flag for {id}",
                if enabled { "enabled" } else { "disabled" },
            ),
            Err(err) => {
                error!("failed to update quote flag for {id}: {err}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} toggle(s) failed");
    }
    Ok(())
}
