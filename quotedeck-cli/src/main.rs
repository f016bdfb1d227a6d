use std::env;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, level_filters::LevelFilter, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use quotedeck_cli::commands::{
    oauth::OauthCmd, pipeline::PipelineCmd, profile::ProfileCmd, quote::QuoteCmd, raw::RawCmd,
    tweets::{DailyCmd, TweetsCmd},
};
use quotedeck_cli::{commands, helper::ctx::Args};

#[derive(Parser, Debug)]
#[command(author, version, about = "Admin console for the quote automation backend")]
struct Cli {
    /// Backend base URL; falls back to QUOTEDECK_BASE_URL
    #[arg(long)]
    base_url: Option<String>,
    /// Workflow id behind the process-tweets trigger; falls back to
    /// QUOTEDECK_PROCESS_FLOW
    #[arg(long)]
    process_flow: Option<String>,
    /// Workflow id behind the quote-tweets trigger; falls back to
    /// QUOTEDECK_QUOTE_FLOW
    #[arg(long)]
    quote_flow: Option<String>,
    /// Cooldown in seconds between repeated quote toggles of one tweet
    #[arg(long, default_value_t = 4)]
    cooldown: u64,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect or edit the account profile and credentials
    Profile {
        #[command(subcommand)]
        action: ProfileCmd,
    },
    /// Working tweets awaiting the quote cycle
    Tweets {
        #[command(subcommand)]
        action: TweetsCmd,
    },
    /// Raw daily input tweets, before comment generation
    Daily {
        #[command(subcommand)]
        action: DailyCmd,
    },
    /// Toggle per-tweet quote flags
    Quote {
        #[command(subcommand)]
        action: QuoteCmd,
    },
    /// OAuth authorization-code flow against the social platform
    Oauth {
        #[command(subcommand)]
        action: OauthCmd,
    },
    /// Fire-and-forget backend workflow triggers
    Pipeline {
        #[command(subcommand)]
        action: PipelineCmd,
    },
    /// Ad-hoc backend access
    Raw {
        #[command(subcommand)]
        action: RawCmd,
    },
}

fn flag_or_env(flag: Option<String>, var: &str) -> Option<String> {
    flag.or_else(|| env::var(var).ok())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_writer(std::io::stderr)
                .with_filter(LevelFilter::from_level(Level::INFO)),
        )
        .init();

    let cli = Cli::parse();
    debug!("started with arguments: {cli:?}");

    let base_url = flag_or_env(cli.base_url, "QUOTEDECK_BASE_URL")
        .context("backend base URL required: pass --base-url or set QUOTEDECK_BASE_URL")?;
    let process_flow =
        flag_or_env(cli.process_flow, "QUOTEDECK_PROCESS_FLOW").unwrap_or_default();
    let quote_flow = flag_or_env(cli.quote_flow, "QUOTEDECK_QUOTE_FLOW").unwrap_or_default();

    let args = Args::builder()
        .base_url(base_url)
        .process_flow(process_flow)
        .quote_flow(quote_flow)
        .cooldown(Duration::from_secs(cli.cooldown))
        .build()?;

    match cli.command {
        Command::Profile { action } => commands::profile::run(&args, action).await,
        Command::Tweets { action } => commands::tweets::run(&args, action).await,
        Command::Daily { action } => commands::tweets::run_daily(&args, action).await,
        Command::Quote { action } => commands::quote::run(&args, action).await,
        Command::Oauth { action } => commands::oauth::run(&args, action).await,
        Command::Pipeline { action } => commands::pipeline::run(&args, action).await,
        Command::Raw { action } => commands::raw::run(&args, action).await,
    }
}
