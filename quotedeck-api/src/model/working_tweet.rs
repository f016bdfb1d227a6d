use serde::Deserialize;
use serde::Serialize;

/// A queued tweet waiting for the quote cycle, as served by the
/// `workingtweets` resource.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingTweet {
    #[serde(rename = "_id")]
    pub id: String,
    pub date: String,
    /// Eligible for the automated quote action.
    pub quote: bool,
    #[serde(rename = "isTweeted")]
    pub is_tweeted: bool,
    /// AI generated comment; capitalised on the wire.
    #[serde(rename = "Text")]
    pub comment: String,
    /// The original tweet being quoted.
    #[serde(rename = "tweetText")]
    pub tweet_text: String,
}
