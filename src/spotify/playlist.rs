use reqwest::Client;

use crate::{
    Res,
    config::{self, ConfigStore},
    http,
    types::{CreatePlaylistRequest, CreatePlaylistResponse, PlaylistTracksRequest, Scope},
};

/// Creates a public playlist for the given scope and returns its Spotify id.
pub async fn create(client: &Client, config: &ConfigStore, scope: &Scope) -> Res<String> {
    let api_url = config.get(config::SPOTIFY_API_URL)?;
    let releases_url = config.get(config::RELEASES_URL)?;
    let token = config.get(config::SPOTIFY_ACCESS_TOKEN)?;

    let body = CreatePlaylistRequest {
        name: scope.display_name(),
        description: scope.description(&releases_url),
        public: true,
    };

    let request = client
        .post(format!("{}/me/playlists", api_url))
        .bearer_auth(token)
        .json(&body);

    let response: CreatePlaylistResponse = http::execute_json(request).await?;
    Ok(response.id)
}

/// Replaces the playlist's entire membership. An empty `uris` list empties
/// the playlist without deleting it.
pub async fn replace_tracks(
    client: &Client,
    config: &ConfigStore,
    playlist_id: &str,
    uris: Vec<String>,
) -> Res<()> {
    let api_url = config.get(config::SPOTIFY_API_URL)?;
    let token = config.get(config::SPOTIFY_ACCESS_TOKEN)?;

    let body = PlaylistTracksRequest {
        uris,
        position: None,
    };

    let request = client
        .put(format!("{}/playlists/{}/tracks", api_url, playlist_id))
        .bearer_auth(token)
        .json(&body);

    http::execute(request).await?;
    Ok(())
}

/// Inserts the whole batch at position zero, ahead of all prior contents.
/// Batch-internal order is preserved, so repeated runs keep the playlist in
/// reverse chronological order of processing with album tracks contiguous.
pub async fn insert_at_top(
    client: &Client,
    config: &ConfigStore,
    playlist_id: &str,
    uris: &[String],
) -> Res<()> {
    let api_url = config.get(config::SPOTIFY_API_URL)?;
    let token = config.get(config::SPOTIFY_ACCESS_TOKEN)?;

    let body = PlaylistTracksRequest {
        uris: uris.to_vec(),
        position: Some(0),
    };

    let request = client
        .post(format!("{}/playlists/{}/tracks", api_url, playlist_id))
        .bearer_auth(token)
        .json(&body);

    http::execute(request).await?;
    Ok(())
}
