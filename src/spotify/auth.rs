use reqwest::Client;

use crate::{
    Res,
    config::{self, ConfigStore},
    http,
    types::TokenResponse,
};

/// Exchanges the stored refresh token for a fresh access token.
///
/// Spotify access tokens only last an hour, so this runs unconditionally at
/// the start of every scheduled run. The response may or may not carry a
/// rotated refresh token; persistence of both is the credential manager's
/// job.
pub async fn refresh_access_token(client: &Client, config: &ConfigStore) -> Res<TokenResponse> {
    let token_url = config.get(config::SPOTIFY_TOKEN_URL)?;
    let refresh_token = config.get(config::SPOTIFY_REFRESH_TOKEN)?;
    let basic = http::basic_auth(
        &config.get(config::SPOTIFY_CLIENT_ID)?,
        &config.get(config::SPOTIFY_CLIENT_SECRET)?,
    );

    let request = client
        .post(&token_url)
        .header("Authorization", basic)
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token.as_str()),
        ]);

    http::execute_json(request).await
}
