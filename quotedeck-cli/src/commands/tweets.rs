use anyhow::Result;
use clap::Subcommand;

use quotedeck_api::model::{DailyTweet, WorkingTweet};

use crate::helper::ctx::{api_for, Context};
use crate::utils::{filter_tweets, preview};

#[derive(Subcommand, Debug)]
pub enum TweetsCmd {
    /// List the tweets queued for the quote cycle
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Keep only tweets whose quote flag matches
    #[arg(long)]
    quote: Option<bool>,
    /// Keep only tweets whose tweeted flag matches
    #[arg(long)]
    tweeted: Option<bool>,
    /// Print full texts instead of previews
    #[arg(long)]
    full: bool,
}

#[derive(Subcommand, Debug)]
pub enum DailyCmd {
    /// List the raw daily input tweets
    List,
}

pub async fn run(ctx: impl Context<'_>, cmd: TweetsCmd) -> Result<()> {
    let TweetsCmd::List(args) = cmd;
    let api = api_for(&ctx)?;

    let tweets: Vec<WorkingTweet> = serde_json::from_value(api.get("workingtweets").await?)?;
    let tweets = filter_tweets(tweets, args.quote, args.tweeted);

    for tweet in &tweets {
        let flags = format!(
            "{} | {}",
            if tweet.quote { "to quote" } else { "not to quote" },
            if tweet.is_tweeted { "tweeted" } else { "not tweeted" },
        );
        println!("{}  {}  [{}]", tweet.id, tweet.date, flags);
        let comment = if tweet.comment.trim().is_empty() {
            "(no comment)".to_owned()
        } else if args.full {
            tweet.comment.clone()
        } else {
            preview(&tweet.comment, 120)
        };
        println!("  comment: {comment}");
        if !tweet.tweet_text.is_empty() {
            let text = if args.full {
                tweet.tweet_text.clone()
            } else {
                preview(&tweet.tweet_text, 120)
            };
            println!("  tweet:   {text}");
        }
    }
    println!("{} tweet(s)", tweets.len());

    Ok(())
}

pub async fn run_daily(ctx: impl Context<'_>, cmd: DailyCmd) -> Result<()> {
    let DailyCmd::List = cmd;
    let api = api_for(&ctx)?;

    let tweets: Vec<DailyTweet> = serde_json::from_value(api.get("dailyworkingtweets").await?)?;

    for tweet in &tweets {
        println!(
            "{}  {} (@{}, {} followers)",
            tweet.id, tweet.author.name, tweet.author.user_name, tweet.author.followers,
        );
        println!("  {}", preview(&tweet.text, 200));
        if !tweet.url.is_empty() {
            println!("  {}", tweet.url);
        }
    }
    println!("{} tweet(s)", tweets.len());

    Ok(())
}
