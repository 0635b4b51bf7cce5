//! Credential lifecycle for both API integrations.
//!
//! The Spotify access token expires hourly and is refreshed unconditionally
//! once per run. The Reddit application token is cheaper to keep around:
//! it is re-acquired only during two fixed wall-clock windows per day (the
//! hour after midnight and the hour after noon); between windows the cached
//! token is reused without any expiry check. Both tokens are persisted into
//! the config store, which the other modules read synchronously later in
//! the same run.

use chrono::{NaiveDateTime, Timelike};
use reqwest::Client;

use crate::{
    Res,
    config::{self, ConfigStore},
    error::SyncError,
    reddit, spotify,
};

/// Refreshes the Spotify access token and persists it. When the response
/// rotates the refresh token, the new one is persisted too; rotation is
/// optional per response, not guaranteed.
pub async fn refresh_primary(client: &Client, config: &mut ConfigStore) -> Res<()> {
    let token = spotify::auth::refresh_access_token(client, config).await?;

    config
        .set(config::SPOTIFY_ACCESS_TOKEN, &token.access_token)
        .await?;
    if let Some(rotated) = token.refresh_token {
        config.set(config::SPOTIFY_REFRESH_TOKEN, &rotated).await?;
    }

    Ok(())
}

/// Returns a Reddit access token, re-acquiring it only inside the two daily
/// refresh windows (hour 0 and hour 12) or when no token has ever been
/// cached. Outside the windows the cached token is reused as-is.
pub async fn secondary_token(
    client: &Client,
    config: &mut ConfigStore,
    now: NaiveDateTime,
) -> Res<String> {
    let in_window = now.hour() == 0 || now.hour() == 12;

    if !in_window {
        match config.get(config::REDDIT_ACCESS_TOKEN) {
            Ok(token) => return Ok(token),
            // No cached token yet; fall through to the grant.
            Err(SyncError::MissingConfig(_)) => {}
            Err(e) => return Err(e),
        }
    }

    let token = reddit::access_token(client, config).await?;
    config.set(config::REDDIT_ACCESS_TOKEN, &token).await?;
    Ok(token)
}
