//! Persisted key/value configuration store.
//!
//! All credentials and API base URLs live in one flat `KEY=VALUE` file under
//! the platform's local data directory (`relaylist/config.env`). The file is
//! read once when the store is opened and rewritten in place on every `set`,
//! since token refreshes have to survive across scheduled runs.
//!
//! Rewrites are guarded by a lock file. An external writer holding the lock
//! is rare, so contention is handled with a bounded, jittered retry loop;
//! if the lock never frees up within the ceiling the write is dropped and
//! the in-memory value stays authoritative for the rest of the run.

use std::{collections::BTreeMap, path::PathBuf, time::Duration};

use rand::Rng;

use crate::{Res, error::SyncError, warning};

/// Total time budget for acquiring the config lock before a write is dropped.
const LOCK_WAIT_CEILING: Duration = Duration::from_secs(2);

// Config keys. Base URLs and client credentials are operator-provided;
// the token keys are written back by the credential manager.
pub const USER_AGENT: &str = "USER_AGENT";
pub const RELEASES_URL: &str = "RELEASES_URL";
pub const SPOTIFY_TOKEN_URL: &str = "SPOTIFY_TOKEN_URL";
pub const SPOTIFY_API_URL: &str = "SPOTIFY_API_URL";
pub const SPOTIFY_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub const SPOTIFY_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub const SPOTIFY_ACCESS_TOKEN: &str = "SPOTIFY_ACCESS_TOKEN";
pub const SPOTIFY_REFRESH_TOKEN: &str = "SPOTIFY_REFRESH_TOKEN";
pub const REDDIT_TOKEN_URL: &str = "REDDIT_TOKEN_URL";
pub const REDDIT_CLIENT_ID: &str = "REDDIT_CLIENT_ID";
pub const REDDIT_CLIENT_SECRET: &str = "REDDIT_CLIENT_SECRET";
pub const REDDIT_ACCESS_TOKEN: &str = "REDDIT_ACCESS_TOKEN";

pub struct ConfigStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl ConfigStore {
    /// Opens the config store at the default location. A missing file is not
    /// an error; required keys are checked at `get` time instead.
    pub async fn open() -> Res<Self> {
        Self::open_at(Self::default_path()).await
    }

    /// Opens the config store at an explicit path.
    pub async fn open_at(path: PathBuf) -> Res<Self> {
        let values = match async_fs::read_to_string(&path).await {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(SyncError::Io(e)),
        };
        Ok(Self { path, values })
    }

    /// Retrieves the value for `key`, failing if it has never been set.
    pub fn get(&self, key: &str) -> Res<String> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| SyncError::MissingConfig(key.to_string()))
    }

    /// Updates `key` in memory and rewrites the backing file.
    ///
    /// If the lock cannot be acquired within the ceiling the on-disk write
    /// is skipped; the in-memory value is still used for the remainder of
    /// the run and will be re-persisted on the next successful refresh.
    pub async fn set(&mut self, key: &str, value: &str) -> Res<()> {
        self.values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let lock_path = self.path.with_extension("lock");
        if !self.acquire_lock(&lock_path).await {
            warning!(
                "Config lock at {} held too long; keeping '{}' in memory only",
                lock_path.display(),
                key
            );
            return Ok(());
        }

        let result = self.write_file().await;
        let _ = async_fs::remove_file(&lock_path).await;
        result
    }

    async fn acquire_lock(&self, lock_path: &PathBuf) -> bool {
        let start = std::time::Instant::now();
        loop {
            let created = async_fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(lock_path)
                .await;
            if created.is_ok() {
                return true;
            }
            if start.elapsed() >= LOCK_WAIT_CEILING {
                return false;
            }
            let backoff = rand::rng().random_range(50..=250);
            tokio::time::sleep(Duration::from_millis(backoff)).await;
        }
    }

    async fn write_file(&self) -> Res<()> {
        let mut content = String::new();
        for (key, value) in &self.values {
            content.push_str(&format!("{}={}\n", key, value));
        }
        async_fs::write(&self.path, content).await?;
        Ok(())
    }

    fn parse(content: &str) -> BTreeMap<String, String> {
        content
            .lines()
            .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect()
    }

    fn default_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("relaylist/config.env");
        path
    }
}
