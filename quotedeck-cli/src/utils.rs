use quotedeck_api::model::WorkingTweet;

/// Tri-state filters over the working set: `None` keeps everything,
/// `Some(flag)` keeps only matching tweets.
pub fn filter_tweets(
    tweets: Vec<WorkingTweet>,
    quote: Option<bool>,
    tweeted: Option<bool>,
) -> Vec<WorkingTweet> {
    tweets
        .into_iter()
        .filter(|t| quote.is_none_or(|q| t.quote == q))
        .filter(|t| tweeted.is_none_or(|w| t.is_tweeted == w))
        .collect()
}

/// First `max_chars` characters, with an ellipsis when truncated.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push('…');
    cut
}
