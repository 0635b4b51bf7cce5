use relaylist::config::ConfigStore;
use relaylist::error::SyncError;

#[tokio::test]
async fn test_missing_file_opens_empty_and_get_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigStore::open_at(dir.path().join("config.env"))
        .await
        .unwrap();

    let err = config.get("SPOTIFY_ACCESS_TOKEN").unwrap_err();
    assert!(matches!(err, SyncError::MissingConfig(key) if key == "SPOTIFY_ACCESS_TOKEN"));
}

#[tokio::test]
async fn test_set_then_get_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ConfigStore::open_at(dir.path().join("config.env"))
        .await
        .unwrap();

    config.set("SPOTIFY_ACCESS_TOKEN", "abc123").await.unwrap();
    assert_eq!(config.get("SPOTIFY_ACCESS_TOKEN").unwrap(), "abc123");
}

#[tokio::test]
async fn test_values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.env");

    let mut config = ConfigStore::open_at(path.clone()).await.unwrap();
    config.set("USER_AGENT", "relaylist/test").await.unwrap();
    config.set("RELEASES_URL", "https://example.invalid/wiki").await.unwrap();
    drop(config);

    let reopened = ConfigStore::open_at(path).await.unwrap();
    assert_eq!(reopened.get("USER_AGENT").unwrap(), "relaylist/test");
    assert_eq!(
        reopened.get("RELEASES_URL").unwrap(),
        "https://example.invalid/wiki"
    );
}

#[tokio::test]
async fn test_set_overwrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.env");

    let mut config = ConfigStore::open_at(path.clone()).await.unwrap();
    config.set("SPOTIFY_REFRESH_TOKEN", "old").await.unwrap();
    config.set("SPOTIFY_REFRESH_TOKEN", "rotated").await.unwrap();

    let reopened = ConfigStore::open_at(path).await.unwrap();
    assert_eq!(reopened.get("SPOTIFY_REFRESH_TOKEN").unwrap(), "rotated");
}

#[tokio::test]
async fn test_comments_and_blank_lines_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.env");
    std::fs::write(&path, "# a comment\n\nUSER_AGENT=relaylist/test\n").unwrap();

    let config = ConfigStore::open_at(path).await.unwrap();
    assert_eq!(config.get("USER_AGENT").unwrap(), "relaylist/test");
    assert!(config.get("# a comment").is_err());
}
