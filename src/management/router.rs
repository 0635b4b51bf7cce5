//! Routes one release URL into a set of target playlists.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;

use crate::{
    Res,
    config::ConfigStore,
    error::SyncError,
    spotify,
    store::Store,
    types::{Release, ReleaseKind},
};

static ALBUM_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/album/([A-Za-z0-9]+)").expect("album pattern must compile"));
static TRACK_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/track/([A-Za-z0-9]+)").expect("track pattern must compile"));

/// Outcome of routing a single release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed {
    /// The release was already in the processed set; nothing was sent.
    AlreadySeen,
    /// The release was inserted into every target playlist, carrying this
    /// many tracks per insertion.
    Added { tracks: usize },
}

/// Classifies a release URL by its path shape. Anything that is neither an
/// album nor a track link is a contract drift between the wiki table and
/// our patterns, and fails rather than being skipped silently.
pub fn classify(url: &str) -> Res<Release> {
    if let Some(captures) = ALBUM_ID.captures(url) {
        return Ok(Release {
            url: url.to_string(),
            kind: ReleaseKind::Album,
            id: captures[1].to_string(),
        });
    }

    if let Some(captures) = TRACK_ID.captures(url) {
        return Ok(Release {
            url: url.to_string(),
            kind: ReleaseKind::Track,
            id: captures[1].to_string(),
        });
    }

    Err(SyncError::UnparseableRelease(url.to_string()))
}

/// Pushes one release into every target playlist, then marks it processed.
///
/// Already-processed releases are a no-op. A track resolves to a single
/// URI; an album resolves to its full track list in album order, inserted
/// into each playlist as one batch at the top. The processed marker is only
/// written after every insertion succeeded, so a partial failure leaves the
/// release eligible for a full re-attempt on the next run (re-inserting
/// into playlists that already succeeded is accepted).
pub async fn route(
    client: &Client,
    config: &ConfigStore,
    store: &mut Store,
    release_url: &str,
    targets: &[String],
) -> Res<Routed> {
    if store.is_processed(release_url) {
        return Ok(Routed::AlreadySeen);
    }

    let release = classify(release_url)?;
    let uris = match release.kind {
        ReleaseKind::Track => vec![spotify::tracks::track_uri(client, config, &release.id).await?],
        ReleaseKind::Album => spotify::tracks::album_track_uris(client, config, &release.id).await?,
    };

    for playlist_id in targets {
        spotify::playlist::insert_at_top(client, config, playlist_id, &uris).await?;
    }

    store.mark_processed(release_url).await?;

    Ok(Routed::Added { tracks: uris.len() })
}
