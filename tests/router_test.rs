use relaylist::config::ConfigStore;
use relaylist::error::SyncError;
use relaylist::management::router::{self, Routed};
use relaylist::store::Store;
use relaylist::types::ReleaseKind;

#[test]
fn test_classify_track_url() {
    let release = router::classify("https://open.spotify.com/track/1UyYXStg3u4KoZSZix3LGF").unwrap();
    assert_eq!(release.kind, ReleaseKind::Track);
    assert_eq!(release.id, "1UyYXStg3u4KoZSZix3LGF");
}

#[test]
fn test_classify_album_url() {
    let release = router::classify("https://play.spotify.com/album/BBB222").unwrap();
    assert_eq!(release.kind, ReleaseKind::Album);
    assert_eq!(release.id, "BBB222");
}

#[test]
fn test_classify_rejects_other_shapes() {
    let err = router::classify("https://open.spotify.com/playlist/37i9abc").unwrap_err();
    assert!(matches!(err, SyncError::UnparseableRelease(_)));
}

#[tokio::test]
async fn test_routing_a_processed_release_is_a_pure_noop() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = Store::open_at(dir.path().to_path_buf()).await.unwrap();
    // Deliberately empty config: any remote call would fail on a missing
    // key, so a clean no-op proves nothing was attempted.
    let config = ConfigStore::open_at(dir.path().join("config.env"))
        .await
        .unwrap();
    let client = reqwest::Client::new();

    let url = "https://open.spotify.com/track/AAA111";
    store.mark_processed(url).await.unwrap();

    let routed = router::route(
        &client,
        &config,
        &mut store,
        url,
        &["month-id".to_string(), "year-id".to_string()],
    )
    .await
    .unwrap();

    assert_eq!(routed, Routed::AlreadySeen);
    assert_eq!(store.processed_count(), 1);
}

#[tokio::test]
async fn test_unparseable_release_fails_before_any_remote_work() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = Store::open_at(dir.path().to_path_buf()).await.unwrap();
    let config = ConfigStore::open_at(dir.path().join("config.env"))
        .await
        .unwrap();
    let client = reqwest::Client::new();

    let err = router::route(
        &client,
        &config,
        &mut store,
        "https://example.invalid/release/123",
        &["month-id".to_string()],
    )
    .await
    .unwrap_err();

    assert!(matches!(err, SyncError::UnparseableRelease(_)));
    // Failed releases stay unmarked so they are re-attempted next run.
    assert!(!store.is_processed("https://example.invalid/release/123"));
}
