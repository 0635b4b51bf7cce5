use reqwest::Client;

use crate::{
    Res,
    config::{self, ConfigStore},
    http,
    types::{AlbumTracksResponse, TrackResponse},
};

/// Resolves a track id from a web URL into its Spotify URI
/// (`spotify:track:...`), which is the form the playlist endpoints accept.
pub async fn track_uri(client: &Client, config: &ConfigStore, track_id: &str) -> Res<String> {
    let api_url = config.get(config::SPOTIFY_API_URL)?;
    let token = config.get(config::SPOTIFY_ACCESS_TOKEN)?;

    let request = client
        .get(format!("{}/tracks/{}", api_url, track_id))
        .bearer_auth(token);

    let response: TrackResponse = http::execute_json(request).await?;
    Ok(response.uri)
}

/// Fetches the URIs of all tracks on an album, in album order.
pub async fn album_track_uris(
    client: &Client,
    config: &ConfigStore,
    album_id: &str,
) -> Res<Vec<String>> {
    let api_url = config.get(config::SPOTIFY_API_URL)?;
    let token = config.get(config::SPOTIFY_ACCESS_TOKEN)?;

    let request = client
        .get(format!("{}/albums/{}/tracks", api_url, album_id))
        .bearer_auth(token);

    let response: AlbumTracksResponse = http::execute_json(request).await?;
    Ok(response.items.into_iter().map(|t| t.uri).collect())
}
