//! Spotify Web API calls.
//!
//! Thin, stateless wrappers around the endpoints a sync run needs: the
//! token refresh grant, playlist creation and membership edits, and track
//! reference lookups. Credentials come from the config store on every call;
//! nothing in here caches state.

pub mod auth;
pub mod playlist;
pub mod tracks;
