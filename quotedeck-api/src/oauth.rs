use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub const AUTHORIZE_URL: &str = "https://twitter.com/i/oauth2/authorize";
pub const REDIRECT_URI: &str = "https://oauth.n8n.cloud/oauth2/callback";
pub const SCOPES: &str = "tweet.read tweet.write users.read offline.access";

// The backend's callback flow expects these exact placeholder values, so no
// per-session state/PKCE entropy is generated. Known gap: CSRF and code
// interception are not actually mitigated until the backend issues real
// values.
pub const STATE: &str = "xyz";
pub const CODE_CHALLENGE: &str = "challenge123";

/// Standard base64 of the literal `client_id:client_secret` pair, the value
/// the backend calls `authorize`. Must be recomputed whenever either input
/// changes.
pub fn encode_authorize(client_id: &str, client_secret: &str) -> String {
    STANDARD.encode(format!("{client_id}:{client_secret}"))
}

/// Browser URL starting the authorization-code flow. The operator approves
/// in the browser and copies the `code` parameter out of the callback URL
/// by hand; how long that code stays valid is entirely backend-defined.
pub fn authorize_url(client_id: &str) -> String {
    let params = [
        ("response_type", "code"),
        ("client_id", client_id),
        ("redirect_uri", REDIRECT_URI),
        ("scope", SCOPES),
        ("state", STATE),
        ("code_challenge", CODE_CHALLENGE),
        ("code_challenge_method", "plain"),
    ];

    let query = params
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{AUTHORIZE_URL}?{query}")
}
