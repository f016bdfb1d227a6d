pub mod oauth;
pub mod pipeline;
pub mod profile;
pub mod quote;
pub mod raw;
pub mod tweets;
