use serde::Deserialize;
use serde::Serialize;

/// A raw ingested tweet from the `dailyworkingtweets` resource, before any
/// comment generation has happened.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyTweet {
    #[serde(rename = "_id")]
    pub id: String,
    pub url: String,
    pub text: String,
    pub author: Author,
    pub profile_bio: Bio,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "profilePicture")]
    pub profile_picture: String,
    pub followers: u64,
    #[serde(rename = "statusesCount")]
    pub statuses_count: u64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bio {
    pub description: String,
}
