use std::time::Duration;

use anyhow::Result;
use derive_builder::Builder;

use quotedeck_api::{Config, API};

pub trait Context<'a> {
    /// Base url of the automation backend.
    fn base_url(&self) -> &'a str;
    /// Workflow identifier behind the process-tweets trigger.
    fn process_flow(&self) -> &'a str;
    /// Workflow identifier behind the quote-tweets trigger.
    fn quote_flow(&self) -> &'a str;
    /// Window during which repeated quote toggles of the same tweet are
    /// swallowed.
    fn cooldown(&self) -> Duration;
}

#[derive(Clone, Builder, PartialEq, Eq, Default)]
#[builder(setter(into))]
pub struct Args {
    base_url: String,
    #[builder(default)]
    process_flow: String,
    #[builder(default)]
    quote_flow: String,
    #[builder(default = "Duration::from_secs(4)")]
    cooldown: Duration,
}

impl Args {
    pub fn builder() -> ArgsBuilder {
        ArgsBuilder::default()
    }
}

impl<'a> Context<'a> for &'a Args {
    fn base_url(&self) -> &'a str {
        &self.base_url
    }

    fn process_flow(&self) -> &'a str {
        &self.process_flow
    }

    fn quote_flow(&self) -> &'a str {
        &self.quote_flow
    }

    fn cooldown(&self) -> Duration {
        self.cooldown
    }
}

pub fn api_for<'a>(ctx: &impl Context<'a>) -> Result<API> {
    let config = Config::builder()
        .base_url(ctx.base_url())
        .process_flow(ctx.process_flow())
        .quote_flow(ctx.quote_flow())
        .build()?;
    Ok(API::try_with_config(config)?)
}
