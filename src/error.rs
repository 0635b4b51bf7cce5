use thiserror::Error;

/// Everything that can go wrong during a sync run.
///
/// All variants are fatal for the pass that raised them; nothing in here is
/// retried automatically. Remote rejections keep the response body verbatim
/// so the upstream service's own diagnostics survive into the log.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The remote call could not be initiated or completed at the transport
    /// level (DNS, TLS, connect, read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service answered with a non-success status.
    #[error("remote rejected request with status {status}: {body}")]
    Api { status: u16, body: String },

    /// A release URL matched neither the track nor the album pattern. This
    /// indicates drift between the wiki table format and our patterns, so it
    /// is surfaced instead of silently skipped.
    #[error("could not parse release URL: {0}")]
    UnparseableRelease(String),

    /// A required key is absent from the config store.
    #[error("missing config value '{0}'")]
    MissingConfig(String),

    /// An operation needed remote state that was never set up, e.g. clearing
    /// the Current playlist before it has ever been created.
    #[error("missing prerequisite state: {0}")]
    MissingState(String),

    /// Unique-key violation in the local store.
    #[error("duplicate key in {table}: {key}")]
    DuplicateKey { table: &'static str, key: String },

    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
