use derive_builder::Builder;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::model::{Profile, ProfileUpdate};
use crate::oauth;

/// The two workflow triggers, addressed by kind instead of raw path
/// segments. The identifiers themselves are deployment-specific and live in
/// [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineKind {
    /// Ingest the daily tweets and generate AI comments for them.
    ProcessTweets,
    /// Quote everything currently marked To Quote.
    QuoteTweets,
}

#[derive(Clone, Builder, PartialEq, Eq, Default)]
#[builder(setter(into))]
pub struct Config {
    /// Base url of the automation backend, e.g. an n8n webhook root.
    base_url: String,
    #[builder(default)]
    process_flow: String,
    #[builder(default)]
    quote_flow: String,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    fn flow_path(&self, kind: PipelineKind) -> &str {
        match kind {
            PipelineKind::ProcessTweets => &self.process_flow,
            PipelineKind::QuoteTweets => &self.quote_flow,
        }
    }
}

/// Stateless gateway to the automation backend. Every call is one fresh
/// round trip: no retries, no caching, no local timeout, no shared mutable
/// state, so concurrent use from multiple callers is fine.
pub struct API {
    client: reqwest::Client,
    config: Config,
}

impl API {
    pub fn try_with_config(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(API { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Uncached GET of an arbitrary resource, returned as parsed JSON with
    /// no schema applied.
    pub async fn get(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        debug!("GET {url}");
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Request {
                path: path.into(),
                status: resp.status(),
            });
        }
        Ok(resp.json().await?)
    }

    pub async fn fetch_profile(&self) -> Result<Profile> {
        let url = self.url("profile");
        debug!("GET {url}");
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Fetch {
                path: "profile".into(),
                status: resp.status(),
            });
        }
        resp.json().await.map_err(|e| ApiError::Schema {
            path: "profile".into(),
            reason: e.to_string(),
        })
    }

    /// PUT a partial record. The backend is authoritative: the returned
    /// record is the new canonical state and must replace whatever the
    /// caller submitted.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile> {
        let url = self.url("profile");
        debug!("PUT {url}");
        let resp = self.client.put(&url).json(update).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Update {
                path: "profile".into(),
                status: resp.status(),
            });
        }
        resp.json().await.map_err(|e| ApiError::Schema {
            path: "profile".into(),
            reason: e.to_string(),
        })
    }

    /// Flip the per-tweet quote flag. Some backend versions answer 2xx with
    /// an empty body, so a body that does not parse as JSON still counts as
    /// success with an empty result.
    pub async fn set_quote_flag(&self, id: &str, enabled: bool) -> Result<Value> {
        let path = if enabled { "enableQuote" } else { "disableQuote" };
        let url = self.url(path);
        debug!("POST {url} _id={id}");
        let resp = self
            .client
            .post(&url)
            .json(&json!({ "_id": id }))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::Update {
                path: path.into(),
                status: resp.status(),
            });
        }
        let text = resp.text().await?;
        Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
    }

    /// Resolve the upstream pagination cursor from whatever credential
    /// fields are known. Recovery on failure (falling back to an empty
    /// cursor) is caller policy, not done here.
    pub async fn fetch_pagination_cursor(&self, known: &ProfileUpdate) -> Result<String> {
        #[derive(serde::Deserialize)]
        struct CursorResponse {
            #[serde(rename = "twitterAPIio_2ndCursor")]
            cursor: Option<String>,
        }

        let url = self.url("ValidateCursor");
        debug!("POST {url}");
        let resp = self.client.post(&url).json(known).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Fetch {
                path: "ValidateCursor".into(),
                status: resp.status(),
            });
        }
        let parsed: CursorResponse = resp.json().await.map_err(|e| ApiError::Schema {
            path: "ValidateCursor".into(),
            reason: e.to_string(),
        })?;
        parsed.cursor.ok_or_else(|| ApiError::Schema {
            path: "ValidateCursor".into(),
            reason: "missing twitterAPIio_2ndCursor".into(),
        })
    }

    /// Trade a pasted authorization code for the long-lived refresh token.
    /// The `authorize` value is re-derived from the pair on every call; the
    /// code's validity window is entirely backend-defined.
    pub async fn exchange_authorization_code(
        &self,
        code: &str,
        client_id: &str,
        client_secret: &str,
    ) -> Result<String> {
        #[derive(serde::Deserialize)]
        struct TokenResponse {
            #[serde(rename = "refreshToken")]
            refresh_token: Option<String>,
        }

        let authorize = oauth::encode_authorize(client_id, client_secret);
        let url = self.url("getrefreshToken");
        debug!("POST {url}");
        let resp = self
            .client
            .post(&url)
            .json(&json!({
                "authorize": authorize,
                "clientId": client_id,
                "code": code,
            }))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::TokenExchange {
                status: resp.status(),
            });
        }
        let parsed: TokenResponse = resp.json().await.map_err(|e| ApiError::Schema {
            path: "getrefreshToken".into(),
            reason: e.to_string(),
        })?;
        parsed.refresh_token.ok_or_else(|| ApiError::Schema {
            path: "getrefreshToken".into(),
            reason: "missing refreshToken".into(),
        })
    }

    /// Fire-and-forget workflow trigger. The backend's own execution status
    /// is not observed; whatever body comes back is passed through
    /// unvalidated, with an empty body tolerated as an empty result.
    pub async fn trigger_pipeline(&self, kind: PipelineKind) -> Result<Value> {
        let path = self.config.flow_path(kind).to_owned();
        let url = self.url(&path);
        debug!("GET {url} ({kind:?})");
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Request {
                path,
                status: resp.status(),
            });
        }
        let text = resp.text().await?;
        Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
    }
}
