use anyhow::Result;
use clap::Subcommand;
use tracing::info;

use quotedeck_api::model::ProfileUpdate;
use quotedeck_api::oauth;
use quotedeck_api::API;

use crate::helper::ctx::{api_for, Context};

#[derive(Subcommand, Debug)]
pub enum OauthCmd {
    /// Print the browser authorization URL for the configured client id
    Url {
        /// Client id; defaults to the one stored on the profile
        #[arg(long)]
        client_id: Option<String>,
    },
    /// Exchange a pasted callback code for the long-lived refresh token
    Exchange {
        /// The `code` parameter copied out of the callback URL
        #[arg(long)]
        code: String,
        #[arg(long)]
        client_id: Option<String>,
        #[arg(long)]
        client_secret: Option<String>,
        /// Store the token, and the pair that produced it, on the profile
        #[arg(long)]
        save: bool,
    },
}

pub async fn run(ctx: impl Context<'_>, cmd: OauthCmd) -> Result<()> {
    let api = api_for(&ctx)?;

    match cmd {
        OauthCmd::Url { client_id } => {
            let client_id = resolve(&api, client_id, |p| p.client_id.clone(), "client id").await?;
            println!("{}", oauth::authorize_url(&client_id));
            info!("approve in the browser, then copy the code out of the callback URL");
        }
        OauthCmd::Exchange {
            code,
            client_id,
            client_secret,
            save,
        } => {
            // At most one profile round trip, whichever half is missing.
            let (client_id, client_secret) = match (client_id, client_secret) {
                (Some(id), Some(secret)) => (id, secret),
                (id, secret) => {
                    let current = api.fetch_profile().await?;
                    (
                        id.unwrap_or(current.client_id),
                        secret.unwrap_or(current.client_secret),
                    )
                }
            };
            for (what, value) in [
                ("client id", &client_id),
                ("client secret", &client_secret),
            ] {
                if value.trim().is_empty() {
                    anyhow::bail!(
                        "no {what} available: pass the flag or store it on the profile first"
                    );
                }
            }

            let token = api
                .exchange_authorization_code(&code, &client_id, &client_secret)
                .await?;
            println!("{token}");

            if save {
                // The token is stored together with the pair and the
                // authorize value derived from it.
                let update = ProfileUpdate {
                    refresh_token: Some(token),
                    x_authorize: Some(oauth::encode_authorize(&client_id, &client_secret)),
                    client_id: Some(client_id),
                    client_secret: Some(client_secret),
                    ..Default::default()
                };
                api.update_profile(&update).await?;
                info!("refresh token stored on profile");
            }
        }
    }

    Ok(())
}

/// Flag value if given, otherwise the field from the stored profile.
async fn resolve(
    api: &API,
    flag: Option<String>,
    field: impl Fn(&quotedeck_api::model::Profile) -> String,
    what: &str,
) -> Result<String> {
    let value = match flag {
        Some(value) => value,
        None => field(&api.fetch_profile().await?),
    };
    if value.trim().is_empty() {
        anyhow::bail!("no {what} available: pass the flag or store it on the profile first");
    }
    Ok(value)
}
