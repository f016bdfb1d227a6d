pub mod daily_tweet;
pub mod profile;
pub mod working_tweet;

pub use daily_tweet::DailyTweet;
pub use profile::{Profile, ProfileUpdate};
pub use working_tweet::WorkingTweet;
