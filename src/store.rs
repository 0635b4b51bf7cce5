//! Durable run state: the processed-release set and the playlist registry.
//!
//! One `Store` handle is opened at the start of a run and passed by
//! reference to everything that needs it. It owns two disjoint tables,
//! persisted as JSON files in the local data directory:
//!
//! - `processed.json` - release URLs that have already been routed
//! - `playlists.json` - `(label, year)` to Spotify playlist id mappings
//!
//! Every mutation rewrites its table immediately; there are no transaction
//! boundaries spanning multiple calls. Neither table has a delete
//! operation: processed markers are global and permanent, and playlist
//! records outlive even a cleared-out Current playlist.

use std::path::PathBuf;

use crate::{
    Res,
    error::SyncError,
    types::{PlaylistRecord, Scope},
};

const PROCESSED_FILE: &str = "processed.json";
const PLAYLISTS_FILE: &str = "playlists.json";

pub struct Store {
    dir: PathBuf,
    processed: Vec<String>,
    playlists: Vec<PlaylistRecord>,
}

impl Store {
    /// Opens the store at the default location, creating empty tables when
    /// the files do not exist yet.
    pub async fn open() -> Res<Self> {
        Self::open_at(Self::default_dir()).await
    }

    /// Opens the store rooted at an explicit directory.
    pub async fn open_at(dir: PathBuf) -> Res<Self> {
        let processed = Self::load_table(dir.join(PROCESSED_FILE)).await?;
        let playlists = Self::load_table(dir.join(PLAYLISTS_FILE)).await?;
        Ok(Self {
            dir,
            processed,
            playlists,
        })
    }

    pub fn is_processed(&self, url: &str) -> bool {
        self.processed.iter().any(|u| u == url)
    }

    /// Marks a release URL as processed. Marking the same URL twice is a
    /// unique-key violation; callers must check `is_processed` first.
    pub async fn mark_processed(&mut self, url: &str) -> Res<()> {
        if self.is_processed(url) {
            return Err(SyncError::DuplicateKey {
                table: "processed",
                key: url.to_string(),
            });
        }

        self.processed.push(url.to_string());
        self.persist_table(PROCESSED_FILE, &self.processed).await
    }

    pub fn playlist_id(&self, scope: &Scope) -> Option<String> {
        self.playlists
            .iter()
            .find(|p| p.label == scope.label() && p.year == scope.year())
            .map(|p| p.spotify_id.clone())
    }

    /// Registers a newly-created playlist under its scope key. At most one
    /// record may exist per `(label, year)`.
    pub async fn add_playlist(&mut self, scope: &Scope, spotify_id: &str, name: &str) -> Res<()> {
        if self.playlist_id(scope).is_some() {
            return Err(SyncError::DuplicateKey {
                table: "playlists",
                key: format!("{}/{}", scope.label(), scope.year()),
            });
        }

        self.playlists.push(PlaylistRecord {
            label: scope.label().to_string(),
            year: scope.year(),
            spotify_id: spotify_id.to_string(),
            name: name.to_string(),
        });
        self.persist_table(PLAYLISTS_FILE, &self.playlists).await
    }

    pub fn playlists(&self) -> &[PlaylistRecord] {
        &self.playlists
    }

    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    async fn load_table<T: serde::de::DeserializeOwned>(path: PathBuf) -> Res<Vec<T>> {
        match async_fs::read_to_string(&path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(SyncError::Io(e)),
        }
    }

    async fn persist_table<T: serde::Serialize>(&self, file: &str, table: &[T]) -> Res<()> {
        async_fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_string_pretty(table)?;
        async_fs::write(self.dir.join(file), json).await?;
        Ok(())
    }

    fn default_dir() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("relaylist/store");
        path
    }
}
