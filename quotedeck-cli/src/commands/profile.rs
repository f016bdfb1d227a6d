use anyhow::Result;
use clap::Subcommand;
use tracing::{info, warn};

use quotedeck_api::model::{Profile, ProfileUpdate};
use quotedeck_api::oauth;
use quotedeck_api::API;

use crate::helper::ctx::{api_for, Context};

#[derive(Subcommand, Debug)]
pub enum ProfileCmd {
    /// Print the stored account profile
    Show,
    /// Update profile fields; only the provided flags are submitted
    Update(UpdateArgs),
    /// Resolve the upstream pagination cursor from the stored credentials
    Cursor {
        /// Write the resolved cursor back to the profile
        #[arg(long)]
        save: bool,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct UpdateArgs {
    #[arg(long)]
    user_name: Option<String>,
    /// Tweets chosen per quote cycle; must be a non-negative integer
    #[arg(long)]
    quote_number: Option<u32>,
    #[arg(long)]
    client_id: Option<String>,
    #[arg(long)]
    client_secret: Option<String>,
    /// twitterapi.io API key
    #[arg(long)]
    api_key: Option<String>,
    /// Instructions for the AI comment generation
    #[arg(long)]
    agent_prompt: Option<String>,
}

pub async fn run(ctx: impl Context<'_>, cmd: ProfileCmd) -> Result<()> {
    let api = api_for(&ctx)?;

    match cmd {
        ProfileCmd::Show => {
            let profile = api.fetch_profile().await?;
            print_profile(&profile);
        }
        ProfileCmd::Update(args) => {
            let mut update = build_update(&args)?;

            if args.client_id.is_some() || args.client_secret.is_some() {
                let current = api.fetch_profile().await?;
                apply_pair_change(&mut update, &current, &args);
            }

            // The backend's response is the canonical state, not the partial
            // we just sent.
            let updated = api.update_profile(&update).await?;
            info!("profile updated");
            print_profile(&updated);
        }
        ProfileCmd::Cursor { save } => {
            let current = api.fetch_profile().await?;
            let cursor = resolve_cursor(&api, &current).await;
            println!("{cursor}");
            if save {
                let update = ProfileUpdate {
                    cursor: Some(cursor),
                    ..Default::default()
                };
                api.update_profile(&update).await?;
                info!("cursor stored on profile");
            }
        }
    }

    Ok(())
}

/// The derived authorize value always travels with the pair that produced
/// it: a change to either half re-derives it from the effective pair (the
/// current record overlaid with the change) and puts all three on the
/// update. An unrelated update leaves the pair alone.
fn apply_pair_change(update: &mut ProfileUpdate, current: &Profile, args: &UpdateArgs) {
    if args.client_id.is_none() && args.client_secret.is_none() {
        return;
    }
    let id = args
        .client_id
        .clone()
        .unwrap_or_else(|| current.client_id.clone());
    let secret = args
        .client_secret
        .clone()
        .unwrap_or_else(|| current.client_secret.clone());
    update.x_authorize = Some(oauth::encode_authorize(&id, &secret));
    update.client_id = Some(id);
    update.client_secret = Some(secret);
}

/// Caller-side recovery: a failed resolution falls back to the empty
/// string, never to whatever stale cursor the record held before.
async fn resolve_cursor(api: &API, current: &Profile) -> String {
    match api
        .fetch_pagination_cursor(&ProfileUpdate::from(current))
        .await
    {
        Ok(cursor) => cursor,
        Err(err) => {
            warn!("cursor resolution failed, clearing local value: {err}");
            String::new()
        }
    }
}

/// Local checks before anything goes over the wire. Required fields may be
/// omitted from a partial update, but when provided they must carry a
/// value.
fn build_update(args: &UpdateArgs) -> Result<ProfileUpdate> {
    for (flag, value) in [
        ("--user-name", &args.user_name),
        ("--client-id", &args.client_id),
        ("--client-secret", &args.client_secret),
        ("--api-key", &args.api_key),
        ("--agent-prompt", &args.agent_prompt),
    ] {
        if let Some(v) = value {
            if v.trim().is_empty() {
                anyhow::bail!("{flag} must not be empty");
            }
        }
    }

    if let Some(prompt) = &args.agent_prompt {
        if !prompt.contains("{{ $json.text }}") {
            warn!("agent prompt has no {{{{ $json.text }}}} placeholder, the generator will see no tweet context");
        }
    }

    let update = ProfileUpdate {
        user_name: args.user_name.clone(),
        quote_number: args.quote_number,
        client_id: args.client_id.clone(),
        client_secret: args.client_secret.clone(),
        twitter_api_key: args.api_key.clone(),
        agent_prompt: args.agent_prompt.clone(),
        ..Default::default()
    };
    if update.is_empty() {
        anyhow::bail!("nothing to update: pass at least one field flag");
    }
    Ok(update)
}

fn print_profile(profile: &Profile) {
    println!("id:             {}", profile.id);
    println!("user:           {} ({})", profile.user_name, profile.user_id);
    println!("quote number:   {}", profile.quote_number);
    println!("client id:      {}", profile.client_id);
    println!("client secret:  {}", profile.client_secret);
    println!("x authorize:    {}", profile.x_authorize);
    println!("refresh token:  {}", profile.refresh_token);
    println!("api key:        {}", profile.twitter_api_key);
    println!("cursor:         {}", profile.cursor);
    // Lifecycle values come straight from the backend, expireAt included.
    println!("created at:     {}", profile.create_at);
    println!("expires at:     {} ({} days)", profile.expire_at, profile.expire_days);
    println!("agent prompt:\n{}", profile.agent_prompt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotedeck_api::Config;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn stored() -> Profile {
        Profile {
            client_id: "abc".into(),
            client_secret: "xyz".into(),
            x_authorize: oauth::encode_authorize("abc", "xyz"),
            cursor: "cursor-stale".into(),
            ..Default::default()
        }
    }

    fn gateway(server: &MockServer) -> API {
        let config = Config::builder().base_url(server.uri()).build().unwrap();
        API::try_with_config(config).unwrap()
    }

    #[test]
    fn changing_only_the_id_rederives_from_the_effective_pair() {
        let args = UpdateArgs {
            client_id: Some("new-id".into()),
            ..Default::default()
        };
        let mut update = ProfileUpdate::default();
        apply_pair_change(&mut update, &stored(), &args);
        assert_eq!(update.client_id.as_deref(), Some("new-id"));
        assert_eq!(update.client_secret.as_deref(), Some("xyz"));
        assert_eq!(
            update.x_authorize,
            Some(oauth::encode_authorize("new-id", "xyz")),
        );
    }

    #[test]
    fn changing_only_the_secret_rederives_from_the_effective_pair() {
        let args = UpdateArgs {
            client_secret: Some("new-secret".into()),
            ..Default::default()
        };
        let mut update = ProfileUpdate::default();
        apply_pair_change(&mut update, &stored(), &args);
        assert_eq!(update.client_id.as_deref(), Some("abc"));
        assert_eq!(update.client_secret.as_deref(), Some("new-secret"));
        assert_eq!(
            update.x_authorize,
            Some(oauth::encode_authorize("abc", "new-secret")),
        );
    }

    #[test]
    fn unrelated_update_never_touches_the_pair() {
        let args = UpdateArgs {
            user_name: Some("cris".into()),
            ..Default::default()
        };
        let mut update = build_update(&args).unwrap();
        apply_pair_change(&mut update, &stored(), &args);
        assert!(update.client_id.is_none());
        assert!(update.client_secret.is_none());
        assert!(update.x_authorize.is_none());
    }

    #[tokio::test]
    async fn failed_cursor_resolution_falls_back_to_the_empty_string() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ValidateCursor"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let cursor = resolve_cursor(&gateway(&server), &stored()).await;
        assert_eq!(cursor, "");
    }

    #[tokio::test]
    async fn successful_cursor_resolution_returns_the_fresh_value() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ValidateCursor"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "twitterAPIio_2ndCursor": "cursor-2" })),
            )
            .mount(&server)
            .await;

        let cursor = resolve_cursor(&gateway(&server), &stored()).await;
        assert_eq!(cursor, "cursor-2");
    }

    #[test]
    fn update_requires_at_least_one_field() {
        let err = build_update(&UpdateArgs::default()).unwrap_err();
        assert!(err.to_string().contains("nothing to update"));
    }

    #[test]
    fn provided_required_fields_must_be_non_empty() {
        let args = UpdateArgs {
            client_id: Some("  ".into()),
            ..Default::default()
        };
        let err = build_update(&args).unwrap_err();
        assert!(err.to_string().contains("--client-id"));
    }

    #[test]
    fn partial_update_only_carries_provided_fields() {
        let args = UpdateArgs {
            quote_number: Some(0),
            ..Default::default()
        };
        let update = build_update(&args).unwrap();
        assert_eq!(update.quote_number, Some(0));
        assert!(update.user_name.is_none());
        assert!(update.x_authorize.is_none());
    }
}
