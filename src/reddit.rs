//! Wiki content endpoint and the Reddit token grant.
//!
//! The release listing is a subreddit wiki page per calendar month, fetched
//! as `{RELEASES_URL}/{year}/{Month}.json`. The JSON envelope carries the
//! raw markdown in `data.content_md`, which is what the table parser
//! consumes.

use reqwest::Client;

use crate::{
    Res,
    config::{self, ConfigStore},
    http,
    types::{TokenResponse, WikiPageResponse},
};

/// Fetches the raw markdown payload of one month's wiki page.
pub async fn wiki_page(
    client: &Client,
    config: &ConfigStore,
    token: &str,
    month: &str,
    year: i32,
) -> Res<String> {
    let releases_url = config.get(config::RELEASES_URL)?;

    let request = client
        .get(format!("{}/{}/{}.json", releases_url, year, month))
        .bearer_auth(token);

    let response: WikiPageResponse = http::execute_json(request).await?;
    Ok(response.data.content_md)
}

/// Acquires an application-only access token via the client-credentials
/// grant. Unlike the Spotify side there is no refresh token; the grant is
/// simply repeated on the credential manager's schedule.
pub async fn access_token(client: &Client, config: &ConfigStore) -> Res<String> {
    let token_url = config.get(config::REDDIT_TOKEN_URL)?;
    let basic = http::basic_auth(
        &config.get(config::REDDIT_CLIENT_ID)?,
        &config.get(config::REDDIT_CLIENT_SECRET)?,
    );

    let request = client
        .post(&token_url)
        .header("Authorization", basic)
        .form(&[("grant_type", "client_credentials")]);

    let response: TokenResponse = http::execute_json(request).await?;
    Ok(response.access_token)
}
