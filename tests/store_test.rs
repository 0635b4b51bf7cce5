use relaylist::error::SyncError;
use relaylist::store::Store;
use relaylist::types::Scope;

const URL: &str = "https://open.spotify.com/album/BBB222";

#[tokio::test]
async fn test_fresh_store_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path().to_path_buf()).await.unwrap();

    assert!(!store.is_processed(URL));
    assert_eq!(store.processed_count(), 0);
    assert!(store.playlists().is_empty());
}

#[tokio::test]
async fn test_mark_processed_and_duplicate_rejection() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = Store::open_at(dir.path().to_path_buf()).await.unwrap();

    store.mark_processed(URL).await.unwrap();
    assert!(store.is_processed(URL));

    let err = store.mark_processed(URL).await.unwrap_err();
    assert!(matches!(err, SyncError::DuplicateKey { table: "processed", .. }));
}

#[tokio::test]
async fn test_processed_markers_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = Store::open_at(dir.path().to_path_buf()).await.unwrap();
    store.mark_processed(URL).await.unwrap();
    drop(store);

    let reopened = Store::open_at(dir.path().to_path_buf()).await.unwrap();
    assert!(reopened.is_processed(URL));
    assert_eq!(reopened.processed_count(), 1);
}

#[tokio::test]
async fn test_playlist_registry_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = Store::open_at(dir.path().to_path_buf()).await.unwrap();

    let scope = Scope::Month {
        month: "June".to_string(),
        year: 2024,
    };
    assert!(store.playlist_id(&scope).is_none());

    store
        .add_playlist(&scope, "37i9abc", &scope.display_name())
        .await
        .unwrap();
    assert_eq!(store.playlist_id(&scope).as_deref(), Some("37i9abc"));

    // Same id after reopen.
    drop(store);
    let reopened = Store::open_at(dir.path().to_path_buf()).await.unwrap();
    assert_eq!(reopened.playlist_id(&scope).as_deref(), Some("37i9abc"));
}

#[tokio::test]
async fn test_at_most_one_record_per_scope_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = Store::open_at(dir.path().to_path_buf()).await.unwrap();

    let scope = Scope::Year(2024);
    store.add_playlist(&scope, "year-one", "2024 Releases").await.unwrap();

    let err = store
        .add_playlist(&scope, "year-two", "2024 Releases")
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::DuplicateKey { table: "playlists", .. }));
}

#[tokio::test]
async fn test_current_scope_uses_sentinel_year() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = Store::open_at(dir.path().to_path_buf()).await.unwrap();

    store
        .add_playlist(&Scope::Current, "cur123", "Current Month's Releases")
        .await
        .unwrap();

    let record = &store.playlists()[0];
    assert_eq!(record.label, "Current");
    assert_eq!(record.year, 0);

    // A year playlist for some real year must not collide with Current.
    assert!(store.playlist_id(&Scope::Year(2024)).is_none());
}
