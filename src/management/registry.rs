//! Maps logical scopes onto remote playlists, creating each at most once.

use reqwest::Client;

use crate::{
    Res,
    config::ConfigStore,
    error::SyncError,
    info, spotify,
    store::Store,
    types::Scope,
};

/// Returns the Spotify playlist id for the scope, creating the playlist on
/// first use and recording its id so the create call never repeats.
///
/// Lookup-then-create is not atomic; the run model is single-writer and
/// sequential, which keeps the pair safe.
pub async fn create_or_fetch(
    client: &Client,
    config: &ConfigStore,
    store: &mut Store,
    scope: &Scope,
) -> Res<String> {
    if let Some(id) = store.playlist_id(scope) {
        return Ok(id);
    }

    let spotify_id = spotify::playlist::create(client, config, scope).await?;
    store
        .add_playlist(scope, &spotify_id, &scope.display_name())
        .await?;
    info!("Created playlist '{}' ({})", scope.display_name(), spotify_id);

    Ok(spotify_id)
}

/// Empties the Current playlist's membership for the month rollover. The
/// playlist itself and its registry record stay; only the contents go.
pub async fn clear_current(client: &Client, config: &ConfigStore, store: &Store) -> Res<()> {
    let playlist_id = store.playlist_id(&Scope::Current).ok_or_else(|| {
        SyncError::MissingState("the Current playlist has never been created".to_string())
    })?;

    spotify::playlist::replace_tracks(client, config, &playlist_id, Vec::new()).await
}
