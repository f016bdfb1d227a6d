use serde::Deserialize;
use serde::Serialize;

/// Credential-and-configuration record for one managed account. Field names
/// follow the backend wire format.
///
/// `expireAt` is derived by the backend from `createAt + expireDays`; both
/// timestamps are kept as opaque strings and passed through verbatim, no
/// date arithmetic happens on this side.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    /// How many queued To Quote tweets the backend picks per cycle.
    #[serde(rename = "quoteNumber")]
    pub quote_number: u32,
    #[serde(rename = "clientID")]
    pub client_id: String,
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
    /// base64 of `clientID:clientSecret`, see [`crate::oauth::encode_authorize`].
    #[serde(rename = "xAuthorize")]
    pub x_authorize: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
    #[serde(rename = "twitterAPIkey")]
    pub twitter_api_key: String,
    /// Opaque pagination token for the backend's upstream data source.
    #[serde(rename = "twitterAPIio_2ndCursor")]
    pub cursor: String,
    /// Free-text instructions for the downstream comment generation.
    #[serde(rename = "agentPrompt")]
    pub agent_prompt: String,
    #[serde(rename = "createAt")]
    pub create_at: String,
    #[serde(rename = "expireAt")]
    pub expire_at: String,
    #[serde(rename = "expireDays")]
    pub expire_days: u32,
}

/// Partial record for PUT updates. Absent fields are left untouched by the
/// backend; the PUT response is the canonical updated [`Profile`].
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(rename = "userName", skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(rename = "quoteNumber", skip_serializing_if = "Option::is_none")]
    pub quote_number: Option<u32>,
    #[serde(rename = "clientID", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(rename = "clientSecret", skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(rename = "xAuthorize", skip_serializing_if = "Option::is_none")]
    pub x_authorize: Option<String>,
    #[serde(rename = "refreshToken", skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(rename = "twitterAPIkey", skip_serializing_if = "Option::is_none")]
    pub twitter_api_key: Option<String>,
    #[serde(
        rename = "twitterAPIio_2ndCursor",
        skip_serializing_if = "Option::is_none"
    )]
    pub cursor: Option<String>,
    #[serde(rename = "agentPrompt", skip_serializing_if = "Option::is_none")]
    pub agent_prompt: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.user_name.is_none()
            && self.quote_number.is_none()
            && self.client_id.is_none()
            && self.client_secret.is_none()
            && self.x_authorize.is_none()
            && self.refresh_token.is_none()
            && self.twitter_api_key.is_none()
            && self.cursor.is_none()
            && self.agent_prompt.is_none()
    }
}

/// Every editable field of the current record, used when the backend wants
/// "whatever credential fields are known" (cursor resolution).
impl From<&Profile> for ProfileUpdate {
    fn from(profile: &Profile) -> Self {
        ProfileUpdate {
            user_name: Some(profile.user_name.clone()),
            quote_number: Some(profile.quote_number),
            client_id: Some(profile.client_id.clone()),
            client_secret: Some(profile.client_secret.clone()),
            x_authorize: Some(profile.x_authorize.clone()),
            refresh_token: Some(profile.refresh_token.clone()),
            twitter_api_key: Some(profile.twitter_api_key.clone()),
            cursor: Some(profile.cursor.clone()),
            agent_prompt: Some(profile.agent_prompt.clone()),
        }
    }
}
